//! Live camera page state: room tabs and feed controls.
//!
//! The stream itself is an opaque `<img>` source; nothing here decodes,
//! validates or reconnects it.

#[cfg(test)]
#[path = "live_feed_test.rs"]
mod live_feed_test;

/// MJPEG endpoint served by the camera host on the local network.
pub const STREAM_URL: &str = "http://127.0.0.1:5000/video_feed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
}

pub const ROOMS: [Room; 4] = [
    Room { id: "living-room", name: "Living Room" },
    Room { id: "kitchen", name: "Kitchen" },
    Room { id: "bedroom", name: "Bedroom" },
    Room { id: "entrance", name: "Entrance" },
];

#[must_use]
pub fn stream_alt(room: &Room) -> String {
    format!("Live feed from {}", room.name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedControls {
    pub muted: bool,
    pub camera_on: bool,
    pub speaker_on: bool,
    pub fullscreen: bool,
}

impl Default for FeedControls {
    fn default() -> Self {
        Self {
            muted: false,
            camera_on: true,
            speaker_on: true,
            fullscreen: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveFeedState {
    pub room: Room,
    pub controls: FeedControls,
}

impl Default for LiveFeedState {
    fn default() -> Self {
        Self {
            room: ROOMS[0],
            controls: FeedControls::default(),
        }
    }
}

impl LiveFeedState {
    /// Switch to the room with `id`. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> bool {
        match ROOMS.iter().find(|r| r.id == id) {
            Some(room) => {
                self.room = *room;
                true
            }
            None => false,
        }
    }

    /// Stream source for the selected room, or `None` while the camera is off.
    #[must_use]
    pub fn stream_src(&self) -> Option<&'static str> {
        self.controls.camera_on.then_some(STREAM_URL)
    }
}
