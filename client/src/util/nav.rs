//! Dashboard navigation entries and active-entry marking.
//!
//! Matching is exact: a sub-route such as `/dashboard/tasks/123` marks no
//! entry active.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Icon reference for a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Video,
    Bell,
    Users,
    Calendar,
    Settings,
}

impl NavIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "\u{2302}",
            Self::Video => "\u{25B6}",
            Self::Bell => "\u{1F514}",
            Self::Users => "\u{1F465}",
            Self::Calendar => "\u{1F4C5}",
            Self::Settings => "\u{2699}",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

pub const NAVIGATION: [NavEntry; 6] = [
    NavEntry { label: "Dashboard", path: "/dashboard", icon: NavIcon::Home },
    NavEntry { label: "Live Feed", path: "/dashboard/live-feed", icon: NavIcon::Video },
    NavEntry { label: "Reminders", path: "/dashboard/reminders", icon: NavIcon::Bell },
    NavEntry { label: "Visitors", path: "/dashboard/visitors", icon: NavIcon::Users },
    NavEntry { label: "Tasks", path: "/dashboard/tasks", icon: NavIcon::Calendar },
    NavEntry { label: "Settings", path: "/dashboard/settings", icon: NavIcon::Settings },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub entry: NavEntry,
    pub active: bool,
}

/// The navigation list in order, with the entry equal to `current` active.
#[must_use]
pub fn nav_items(current: &str) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .map(|entry| NavItem { entry: *entry, active: entry.path == current })
        .collect()
}

/// CSS class for a navigation link.
#[must_use]
pub fn link_class(active: bool) -> &'static str {
    if active { "nav-link nav-link--active" } else { "nav-link" }
}
