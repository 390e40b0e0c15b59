use super::*;

#[test]
fn default_room_is_living_room() {
    let state = LiveFeedState::default();
    assert_eq!(state.room.id, "living-room");
    assert_eq!(stream_alt(&state.room), "Live feed from Living Room");
}

#[test]
fn select_known_room() {
    let mut state = LiveFeedState::default();
    assert!(state.select("kitchen"));
    assert_eq!(state.room.name, "Kitchen");
}

#[test]
fn select_unknown_room_keeps_selection() {
    let mut state = LiveFeedState::default();
    state.select("bedroom");
    assert!(!state.select("garage"));
    assert_eq!(state.room.id, "bedroom");
}

#[test]
fn default_controls_match_page_defaults() {
    let c = FeedControls::default();
    assert!(!c.muted && c.camera_on && c.speaker_on && !c.fullscreen);
}

#[test]
fn every_room_embeds_the_same_stream() {
    let mut state = LiveFeedState::default();
    for room in ROOMS {
        state.select(room.id);
        assert_eq!(state.stream_src(), Some(STREAM_URL));
    }
}

#[test]
fn camera_off_hides_stream() {
    let mut state = LiveFeedState::default();
    state.controls.camera_on = false;
    assert_eq!(state.stream_src(), None);
}
