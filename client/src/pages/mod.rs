//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates chrome to `components`.
//! Dashboard pages render inside `DashboardShell`, which applies the route
//! guard.

pub mod dashboard;
pub mod home;
pub mod live_feed;
pub mod login;
pub mod reminders;
pub mod settings;
pub mod signup;
pub mod tasks;
pub mod visitors;
