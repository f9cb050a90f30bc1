//! Core types for playback sequencing

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Track information for queue management
///
/// Carries the playable reference plus the metadata the UI displays.
/// Loaded eagerly from the catalog so playback never blocks on I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier from the catalog
    pub id: String,

    /// Playable reference handed to the streamer (file path or URL)
    pub uri: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (optional)
    pub album: Option<String>,

    /// Genre (optional)
    pub genre: Option<String>,

    /// Track number in album (optional)
    pub track_number: Option<u32>,

    /// Track duration
    pub duration: Duration,
}

/// Playback state
///
/// The player's own `state` field is the single source of truth;
/// the streaming backend is never queried for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for the player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Restart from the top of the queue when it runs out (default: false)
    pub looping: bool,
}
