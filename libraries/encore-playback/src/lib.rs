//! Encore Player - Playback Sequencing
//!
//! Platform-agnostic playback sequencing for Encore Player.
//!
//! This crate provides:
//! - Ordered play queue with cursor navigation (next/previous/jump-to)
//! - Shuffle that keeps the current track playing
//! - Queue looping
//! - Player state machine (stopped/playing/paused)
//! - Fractional seek and position reporting
//! - Event feed for UI synchronization
//!
//! # Architecture
//!
//! `encore-playback` is completely platform-agnostic:
//! - No dependency on GStreamer or any other audio backend
//! - No dependency on the catalog client (network stack)
//! - No dependency on the UI toolkit
//!
//! Platform-specific code (audio output, end-of-stream notification
//! delivery) is provided via the [`Streamer`] trait, and UI updates are
//! consumed by draining [`PlayerEvent`]s.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use encore_playback::{Player, PlayerConfig, Result, Streamer, Track};
//! use std::time::Duration;
//!
//! // A backend that discards every command; real hosts wrap their
//! // streaming pipeline in this trait.
//! struct NullStreamer;
//!
//! impl Streamer for NullStreamer {
//!     fn queue_uri(&mut self, _uri: &str) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn start(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn stop(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn position(&self) -> Duration {
//!         Duration::ZERO
//!     }
//!
//!     fn duration(&self) -> Duration {
//!         Duration::from_secs(180)
//!     }
//!
//!     fn seek(&mut self, _position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut player = Player::new(Box::new(NullStreamer), PlayerConfig::default());
//!
//! player.queue_track(Track {
//!     id: "track1".to_string(),
//!     uri: "https://catalog.local/songs/track1".to_string(),
//!     title: "My Song".to_string(),
//!     artist: "Artist Name".to_string(),
//!     album: Some("Album Name".to_string()),
//!     genre: None,
//!     track_number: Some(1),
//!     duration: Duration::from_secs(180),
//! });
//!
//! player.play().unwrap();
//! assert!(player.is_playing());
//!
//! // The integration layer forwards end-of-stream notifications;
//! // with one queued track and no looping, playback settles stopped.
//! player.handle_stream_ended().unwrap();
//! assert!(!player.is_playing());
//! ```
//!
//! # Example: UI Synchronization
//!
//! The player accumulates [`PlayerEvent`]s as transitions happen; the
//! host drains them on its own cadence:
//!
//! ```rust,ignore
//! for event in player.drain_events() {
//!     match event {
//!         PlayerEvent::StateChanged { state } => ui.update_buttons(state),
//!         PlayerEvent::TrackChanged { track_id, .. } => ui.highlight(&track_id),
//!         PlayerEvent::QueueChanged { length } => ui.refresh_queue(length),
//!         PlayerEvent::TrackFinished { .. } => {}
//!         PlayerEvent::Error { message } => ui.show_error(&message),
//!     }
//! }
//! ```

mod error;
mod events;
mod player;
mod queue;
mod streamer;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use player::Player;
pub use streamer::Streamer;
pub use types::{PlaybackState, PlayerConfig, Track};
