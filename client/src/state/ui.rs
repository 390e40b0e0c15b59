//! Local UI chrome state for the dashboard shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (theme, open menus) out of the
//! session and page models.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which compact-layout overlay is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    /// Slide-in navigation sheet on narrow screens.
    NavSheet,
    /// Avatar dropdown with profile, settings and logout.
    UserMenu,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub overlay: Overlay,
}

impl UiState {
    /// Open `overlay`, or close it when it is already the open one.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == overlay { Overlay::None } else { overlay };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }
}
