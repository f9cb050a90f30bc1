//! Player state machine - core orchestration
//!
//! Coordinates the play queue, the streaming backend and the UI-facing
//! event feed.

use tracing::{debug, error};

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    queue::PlayQueue,
    streamer::Streamer,
    types::{PlaybackState, PlayerConfig, Track},
};

/// Central playback sequencing
///
/// Owns the play queue and the streaming backend, and is the single
/// source of truth for playback state. All methods are synchronous,
/// non-blocking transformations over in-memory state; backend
/// notifications must be marshaled onto the owning context before
/// calling [`Player::handle_stream_ended`] or
/// [`Player::handle_stream_error`].
pub struct Player {
    // State
    state: PlaybackState,
    looping: bool,

    // Queue and backend
    queue: PlayQueue,
    streamer: Box<dyn Streamer>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,

    // Last track loaded into the streamer (for TrackChanged events)
    loaded_track_id: Option<String>,
}

impl Player {
    /// Create a new player around a streaming backend
    pub fn new(streamer: Box<dyn Streamer>, config: PlayerConfig) -> Self {
        Self {
            state: PlaybackState::Stopped,
            looping: config.looping,
            queue: PlayQueue::new(),
            streamer,
            pending_events: Vec::new(),
            loaded_track_id: None,
        }
    }

    // ===== Playback Control =====

    /// Begin playback of the current track
    ///
    /// Loads the current queue track into the streamer and starts it.
    /// Fails with `AlreadyPlaying` when playback is active, and with
    /// `QueueEmpty` when there is no current track to load.
    pub fn play(&mut self) -> Result<()> {
        if self.state == PlaybackState::Playing {
            return Err(PlaybackError::AlreadyPlaying);
        }

        let track = self.queue.current().ok_or(PlaybackError::QueueEmpty)?;
        let track_id = track.id.clone();
        let uri = track.uri.clone();

        self.streamer.queue_uri(&uri)?;
        self.streamer.start()?;
        self.state = PlaybackState::Playing;
        debug!("Playing track {}", track_id);

        let previous = self.loaded_track_id.replace(track_id.clone());
        if previous.as_deref() != Some(track_id.as_str()) {
            self.emit_track_changed(track_id, previous);
        }
        self.emit_state_changed(PlaybackState::Playing);
        Ok(())
    }

    /// Stop playback of the current track
    ///
    /// Idempotent: stopping a paused or already stopped player is
    /// accepted.
    pub fn stop(&mut self) -> Result<()> {
        self.streamer.stop()?;
        if self.state != PlaybackState::Stopped {
            self.state = PlaybackState::Stopped;
            debug!("Playback stopped");
            self.emit_state_changed(PlaybackState::Stopped);
        }
        Ok(())
    }

    /// Pause playback of the current track
    ///
    /// Starting playback again continues from the paused position.
    /// Pausing a player that is not playing is accepted and leaves the
    /// state unchanged; the streamer is only commanded mid-stream.
    pub fn pause(&mut self) -> Result<()> {
        if self.state != PlaybackState::Playing {
            return Ok(());
        }

        self.streamer.pause()?;
        self.state = PlaybackState::Paused;
        debug!("Playback paused");
        self.emit_state_changed(PlaybackState::Paused);
        Ok(())
    }

    /// Stop the current track and play the next one in the queue
    ///
    /// If there are no more tracks the player stays stopped, unless
    /// looping is enabled, in which case playback restarts from the
    /// first track.
    pub fn next_track(&mut self) -> Result<()> {
        self.ensure_stopped()?;
        if !self.advance_queue()? {
            return Ok(());
        }
        self.play()
    }

    /// Stop the current track and play the previous one in the queue
    ///
    /// At the front of the queue the same track is replayed from the
    /// beginning.
    pub fn previous_track(&mut self) -> Result<()> {
        self.ensure_stopped()?;
        match self.queue.previous() {
            Ok(_) | Err(PlaybackError::QueueExhausted) => {}
            Err(e) => return Err(e),
        }
        self.play()
    }

    /// Jump to a given track and play it
    ///
    /// Stops whatever is playing first. Fails with `TrackNotFound`
    /// without moving the cursor when the track is not queued.
    pub fn jump_to(&mut self, track: &Track) -> Result<()> {
        self.stop()?;
        self.queue.jump_to(track)?;
        self.play()
    }

    // ===== Queue Management =====

    /// Add a track to the end of the play queue
    pub fn queue_track(&mut self, track: Track) {
        self.queue.append(track);
        self.emit_queue_changed();
    }

    /// Shuffle the queue, keeping the current track first
    ///
    /// The current track keeps playing; only the upcoming order
    /// changes.
    pub fn shuffle(&mut self) -> Result<()> {
        self.queue.shuffle()?;
        self.emit_queue_changed();
        Ok(())
    }

    /// Stop playback and remove every track from the queue
    pub fn clear_queue(&mut self) -> Result<()> {
        if self.state != PlaybackState::Stopped {
            self.stop()?;
        }
        self.queue.clear();
        self.loaded_track_id = None;
        self.emit_queue_changed();
        Ok(())
    }

    // ===== Backend Notifications =====

    /// Handle end-of-stream from the backend
    ///
    /// Must be called on the player's control context. The streamer has
    /// already finished the current track, so no stop command is sent;
    /// the queue advances exactly as in [`Player::next_track`].
    pub fn handle_stream_ended(&mut self) -> Result<()> {
        let finished = self.queue.current().map(|t| t.id.clone());
        if let Some(track_id) = finished {
            debug!("Track {} finished", track_id);
            self.emit(PlayerEvent::TrackFinished { track_id });
        }

        // The stream is already over; only a settled stop is reported.
        self.state = PlaybackState::Stopped;
        if !self.advance_queue()? {
            self.emit_state_changed(PlaybackState::Stopped);
            return Ok(());
        }
        self.play()
    }

    /// Handle an error reported by the backend
    ///
    /// Stops playback and surfaces the error through the event feed.
    /// Never fatal to the host.
    pub fn handle_stream_error(&mut self, message: &str) {
        error!("Stream error: {}", message);
        if let Err(e) = self.stop() {
            error!("Failed to stop after stream error: {}", e);
        }
        self.emit(PlayerEvent::Error {
            message: message.to_string(),
        });
    }

    // ===== Position =====

    /// Current position as a fraction of the track duration, in [0, 1]
    ///
    /// Zero when the duration is unknown.
    pub fn position(&self) -> f64 {
        let duration = self.streamer.duration();
        if duration.is_zero() {
            return 0.0;
        }
        self.streamer.position().as_secs_f64() / duration.as_secs_f64()
    }

    /// Seek within the current track by fraction of its duration
    ///
    /// Fails with `InvalidSeekPosition` for fractions outside
    /// `[0.0, 1.0]`; the streamer is not commanded in that case.
    pub fn seek_to_fraction(&mut self, fraction: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PlaybackError::InvalidSeekPosition(fraction));
        }

        let target = self.streamer.duration().mul_f64(fraction);
        self.streamer.seek(target)
    }

    // ===== State Accessors =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True if the player is currently playing audio
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// The current track in the queue
    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current()
    }

    /// All queued tracks in order
    pub fn queued_tracks(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Number of tracks in the queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// True if the queue restarts after the last track
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Enable or disable queue looping
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    // ===== Events =====

    /// Drain all pending events (call from the UI layer)
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn ensure_stopped(&mut self) -> Result<()> {
        if self.state == PlaybackState::Playing {
            self.stop()?;
        }
        Ok(())
    }

    /// Move the queue forward, honoring the looping flag
    ///
    /// Returns false when the queue is exhausted and looping is off.
    fn advance_queue(&mut self) -> Result<bool> {
        match self.queue.next() {
            Ok(_) => Ok(true),
            Err(PlaybackError::QueueExhausted) => {
                if !self.looping {
                    debug!("Queue exhausted, not looping");
                    return Ok(false);
                }
                self.queue.reset();
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_state_changed(&mut self, state: PlaybackState) {
        self.pending_events.push(PlayerEvent::StateChanged { state });
    }

    fn emit_track_changed(&mut self, track_id: String, previous_track_id: Option<String>) {
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
    }

    fn emit_queue_changed(&mut self) {
        let length = self.queue.len();
        self.pending_events.push(PlayerEvent::QueueChanged { length });
    }
}
