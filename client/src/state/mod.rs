pub mod auth;
pub mod form;
pub mod live_feed;
pub mod overview;
pub mod reminders;
pub mod session;
pub mod settings;
pub mod tasks;
pub mod toast;
pub mod ui;
pub mod user;
pub mod visitors;
