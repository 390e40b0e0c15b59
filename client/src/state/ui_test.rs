use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.overlay, Overlay::None);
}

// =============================================================
// Overlays
// =============================================================

#[test]
fn toggle_overlay_opens_then_closes() {
    let mut state = UiState::default();
    state.toggle_overlay(Overlay::NavSheet);
    assert_eq!(state.overlay, Overlay::NavSheet);
    state.toggle_overlay(Overlay::NavSheet);
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn toggle_overlay_switches_between_overlays() {
    let mut state = UiState::default();
    state.toggle_overlay(Overlay::NavSheet);
    state.toggle_overlay(Overlay::UserMenu);
    assert_eq!(state.overlay, Overlay::UserMenu);
    state.close_overlay();
    assert_eq!(state.overlay, Overlay::None);
}
