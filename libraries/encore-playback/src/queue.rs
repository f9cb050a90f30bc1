//! Cursor-based play queue
//!
//! Ordered sequence of tracks with a movable cursor. Navigation never
//! removes tracks; while the queue is non-empty the cursor always sits
//! on a valid index.

use crate::error::{PlaybackError, Result};
use crate::types::Track;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Ordered play queue with cursor navigation
///
/// Structure:
/// ```text
/// Queue: [Track A] [Track B] [Track C] [Track D]
///                     ^
///                   cursor (current track)
/// ```
///
/// Duplicate tracks are allowed; lookup by id finds the first match.
/// Not exposed outside the crate - all access goes through the player.
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    /// Tracks in insertion order
    tracks: Vec<Track>,

    /// Index of the current track
    cursor: usize,
}

impl PlayQueue {
    /// Create a new empty play queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a play queue pre-seeded with `tracks`, cursor on the first
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self { tracks, cursor: 0 }
    }

    /// The current track, or `None` when the queue is empty
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    /// Add a track to the end of the queue
    ///
    /// Never moves the cursor.
    pub fn append(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Remove all tracks from the queue
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = 0;
    }

    /// Move the cursor back to the first track
    ///
    /// Valid even when the queue is empty.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Move to the next track, returning it
    ///
    /// Fails with `QueueEmpty` when there are no tracks, and with
    /// `QueueExhausted` when the cursor already sits on the last track.
    /// On failure the cursor is unchanged; it never moves past a valid
    /// index.
    pub fn next(&mut self) -> Result<&Track> {
        if self.tracks.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }
        if self.cursor + 1 >= self.tracks.len() {
            return Err(PlaybackError::QueueExhausted);
        }

        self.cursor += 1;
        Ok(&self.tracks[self.cursor])
    }

    /// Move to the previous track, returning it
    ///
    /// Fails with `QueueEmpty` when there are no tracks, and with
    /// `QueueExhausted` when the cursor is already on the first track.
    pub fn previous(&mut self) -> Result<&Track> {
        if self.tracks.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }
        if self.cursor == 0 {
            return Err(PlaybackError::QueueExhausted);
        }

        self.cursor -= 1;
        Ok(&self.tracks[self.cursor])
    }

    /// Jump to the first track with the same id
    ///
    /// Fails with `TrackNotFound` and leaves the cursor unchanged when
    /// the track is not in the queue.
    pub fn jump_to(&mut self, track: &Track) -> Result<()> {
        let index = self
            .tracks
            .iter()
            .position(|t| t.id == track.id)
            .ok_or_else(|| PlaybackError::TrackNotFound(track.id.clone()))?;

        self.cursor = index;
        Ok(())
    }

    /// Shuffle the queue, keeping the current track at the front
    ///
    /// The current track is pulled out, the remainder is uniformly
    /// shuffled (Fisher-Yates), and the current track is reinserted at
    /// position 0 with the cursor on it. Fails with `QueueEmpty` when
    /// there is nothing to shuffle.
    pub fn shuffle(&mut self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }

        let current = self.tracks.remove(self.cursor);
        self.tracks.shuffle(&mut thread_rng());
        self.tracks.insert(0, current);
        self.cursor = 0;
        Ok(())
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All queued tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
