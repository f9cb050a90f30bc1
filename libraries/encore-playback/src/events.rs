//! Player events
//!
//! Event-based communication for UI synchronization. The player pushes
//! events as transitions happen; the host drains them on its own
//! cadence with [`Player::drain_events`](crate::Player::drain_events)
//! and feeds them into whatever event system it uses.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed (playing, paused, stopped)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track was loaded into the streamer
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previously loaded track (if any)
        previous_track_id: Option<String>,
    },

    /// Track finished playing naturally (reached end of stream)
    TrackFinished {
        /// ID of the finished track
        track_id: String,
    },

    /// Queue changed (tracks added, removed or reordered)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}
