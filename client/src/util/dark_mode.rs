//! Dark mode initialization and toggle.
//!
//! Reads the theme preference from `localStorage` and applies the `.dark`
//! class to the `<html>` element. Toggle writes back to `localStorage` and
//! updates the class. Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

const STORAGE_KEY: &str = "theme";

/// Interpret a stored theme value. Unknown values yield `None`.
#[must_use]
pub fn parse_theme(raw: &str) -> Option<bool> {
    match raw {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the dark mode preference.
///
/// Returns `true` if the user previously chose dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    if let Some(dark) = storage::read_item(STORAGE_KEY).as_deref().and_then(parse_theme) {
        return dark;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if enabled { class_list.add_1("dark") } else { class_list.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::write_item(STORAGE_KEY, theme_name(next));
    next
}

/// Theme option offered on the settings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeChoice {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == raw)
    }
}

/// The stored choice; no stored preference means follow the system.
pub fn current_choice() -> ThemeChoice {
    match storage::read_item(STORAGE_KEY).as_deref().and_then(parse_theme) {
        Some(true) => ThemeChoice::Dark,
        Some(false) => ThemeChoice::Light,
        None => ThemeChoice::System,
    }
}

/// Persist `choice`, apply it, and return whether dark mode is now on.
pub fn choose(choice: ThemeChoice) -> bool {
    let dark = match choice {
        ThemeChoice::Light => false,
        ThemeChoice::Dark => true,
        ThemeChoice::System => {
            storage::remove_item(STORAGE_KEY);
            let dark = system_prefers_dark();
            apply(dark);
            return dark;
        }
    };
    storage::write_item(STORAGE_KEY, theme_name(dark));
    apply(dark);
    dark
}
