//! Error types for playback sequencing

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Operation requires a non-empty queue
    #[error("Queue is empty")]
    QueueEmpty,

    /// Queue cursor cannot move further in the requested direction
    #[error("Queue exhausted")]
    QueueExhausted,

    /// Player is already playing
    #[error("Already playing")]
    AlreadyPlaying,

    /// Track not present in the queue
    #[error("Track not in queue: {0}")]
    TrackNotFound(String),

    /// Seek fraction outside `[0.0, 1.0]`
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),

    /// Streaming backend failure
    #[error("Stream error: {0}")]
    Stream(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
