//! Playback controller
//!
//! Owns one media output and the authoritative [`PlaybackState`]. Commands
//! (`play`, `pause`, `toggle`, `seek`) drive the output; output events are
//! applied on the caller's task through `process_pending`, `next_event`, or
//! `handle_event`. Every state change is published to `subscribe()` receivers.

use crate::backend::{MediaBackend, MediaEvent};
use crate::error::PlaybackError;
use crate::state::PlaybackState;
use daymuse_common::Release;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// Single-output playback controller
///
/// The output is attached in [`PlaybackController::new`] and released by
/// [`PlaybackController::shutdown`] or on drop, whichever comes first.
pub struct PlaybackController<B: MediaBackend> {
    /// `None` once released
    output: Option<B>,
    events: mpsc::UnboundedReceiver<MediaEvent>,
    state: PlaybackState,
    publisher: watch::Sender<PlaybackState>,
}

impl<B: MediaBackend> PlaybackController<B> {
    /// Take ownership of `output` and attach its event channel
    pub fn new(mut output: B) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        output.attach(event_tx);

        let state = PlaybackState::default();
        let (publisher, _) = watch::channel(state.clone());
        debug!("Playback controller attached to output");

        Self {
            output: Some(output),
            events,
            state,
            publisher,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Receiver updated after every transition
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.publisher.subscribe()
    }

    /// The attached output, `None` after shutdown
    pub fn output(&self) -> Option<&B> {
        self.output.as_ref()
    }

    /// Request playback of `release`
    ///
    /// Resumes in place when `release` is already the current track;
    /// otherwise switches the output's source and starts from zero.
    pub fn play(&mut self, release: &Release) {
        let Some(url) = release.stored_audio_url.as_deref() else {
            debug!("Release {} has no audio URL, ignoring play", release.id);
            return;
        };
        let Some(output) = self.output.as_mut() else {
            debug!("Output released, ignoring play for {}", release.id);
            return;
        };

        if self.state.is_current(release) {
            debug!("Resuming {} (day {})", release.id, release.day);
            self.state.resume_requested();
        } else {
            info!("Playing {} (day {}): {}", release.id, release.day, release.title);
            // Events queued for the previous source must not land on the new track
            let mut discarded = 0;
            while self.events.try_recv().is_ok() {
                discarded += 1;
            }
            if discarded > 0 {
                debug!("Discarded {} stale event(s) from previous source", discarded);
            }
            output.set_source(url);
            self.state.select_track(release.clone());
        }

        let result = output.play();
        if let Err(rejection) = result {
            let failure = PlaybackError::from(&rejection);
            error!("Playback start rejected for {}: {:?} ({})", release.id, rejection, failure);
            self.state.failed(&failure);
        }
        self.publish();
    }

    /// Pause the output; the state follows the resulting `Pause` event
    pub fn pause(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.pause();
        }
    }

    /// Pause if `release` is the current, playing track, else play it
    pub fn toggle(&mut self, release: &Release) {
        if self.state.is_playing && self.state.is_current(release) {
            self.pause();
        } else {
            self.play(release);
        }
    }

    /// Move the output's position (seconds); not clamped
    pub fn seek(&mut self, position_seconds: f64) {
        match self.output.as_mut() {
            Some(output) => output.seek(position_seconds),
            None => debug!("Output released, ignoring seek to {}", position_seconds),
        }
    }

    /// Apply one output event
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate { current_time } => self.state.time_update(current_time),
            MediaEvent::LoadedMetadata { duration } => {
                debug!("Metadata loaded, duration {}", duration);
                self.state.metadata_loaded(duration);
            }
            MediaEvent::Ended => {
                debug!("Track ended");
                self.state.ended();
            }
            MediaEvent::Play => self.state.started(),
            MediaEvent::Pause => self.state.paused(),
            MediaEvent::Error(code) => {
                let failure = PlaybackError::from(code);
                error!("Media error {:?}: {}", code, failure);
                self.state.failed(&failure);
            }
        }
        self.publish();
    }

    /// Apply every queued event without waiting; returns how many were applied
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for and apply the next event
    ///
    /// Returns `false` once the output has dropped its sender and the queue
    /// is drained.
    pub async fn next_event(&mut self) -> bool {
        match self.events.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Release the output now
    ///
    /// Later commands become no-ops; queued events can still be drained.
    pub fn shutdown(&mut self) {
        self.release_output();
    }

    fn release_output(&mut self) {
        if let Some(mut output) = self.output.take() {
            output.pause();
            output.release();
            self.events.close();
            info!("Playback output released");
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }
}

impl<B: MediaBackend> Drop for PlaybackController<B> {
    fn drop(&mut self) {
        if self.output.is_some() {
            warn!("Playback controller dropped without shutdown, releasing output");
        }
        self.release_output();
    }
}
