//! Platform-agnostic streaming backend trait
//!
//! Abstracts audio decoding and output for different platforms
//! (GStreamer on desktop, a test mock in the suite).

use crate::error::Result;
use std::time::Duration;

/// Platform-agnostic streaming backend
///
/// Implementors decode and output audio for a queued URI. The player
/// treats the backend as a pure command sink and keeps the
/// authoritative playback state itself; the trait deliberately exposes
/// no state query.
///
/// Completion and error notifications originate on the backend's own
/// thread. The integration layer must marshal them onto the player's
/// control context and call [`Player::handle_stream_ended`] or
/// [`Player::handle_stream_error`] there.
///
/// [`Player::handle_stream_ended`]: crate::Player::handle_stream_ended
/// [`Player::handle_stream_error`]: crate::Player::handle_stream_error
pub trait Streamer: Send {
    /// Queue a URI to be streamed next
    ///
    /// Replaces whatever reference the backend currently holds; the
    /// stream does not start until [`Streamer::start`] is called.
    fn queue_uri(&mut self, uri: &str) -> Result<()>;

    /// Start or resume the audio stream
    fn start(&mut self) -> Result<()>;

    /// Stop the audio stream and release the pipeline
    fn stop(&mut self) -> Result<()>;

    /// Pause the audio stream, keeping its position
    fn pause(&mut self) -> Result<()>;

    /// Current position from the start of the stream
    ///
    /// Zero when nothing is loaded.
    fn position(&self) -> Duration;

    /// Total duration of the stream
    ///
    /// Zero when unknown (e.g. live streams or nothing loaded).
    fn duration(&self) -> Duration;

    /// Seek to a position from the start of the stream
    fn seek(&mut self, position: Duration) -> Result<()>;
}
