//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and dialogs while reading/writing
//! shared state from Leptos context providers.

pub mod dashboard_shell;
pub mod modal;
pub mod require_auth;
pub mod toast_host;
