//! Playback state and its transitions
//!
//! [`PlaybackState`] is the single authoritative view of the player. It is
//! only changed through the transition methods below, which the controller
//! calls from its commands and from output events.

use crate::error::{PlaybackError, PlaybackErrorKind};
use daymuse_common::human_time::format_track_time;
use daymuse_common::{PlayerPhase, Release};
use serde::Serialize;

/// Snapshot of the player
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub phase: PlayerPhase,
    pub current_track: Option<Release>,
    /// Mirrors the output's own play/pause notifications
    pub is_playing: bool,
    /// Seconds
    pub current_time: f64,
    /// Seconds; 0 while unknown
    pub duration: f64,
    /// Percent in `0..=100`; 0 while the duration is unknown
    pub progress: f64,
    /// User-facing error message
    pub error: Option<String>,
    pub error_kind: Option<PlaybackErrorKind>,
}

impl PlaybackState {
    /// Elapsed time as `m:ss`
    pub fn elapsed_display(&self) -> String {
        format_track_time(self.current_time)
    }

    /// Track length as `m:ss`, "0:00" while unknown
    pub fn total_display(&self) -> String {
        format_track_time(self.duration)
    }

    pub fn is_current(&self, release: &Release) -> bool {
        self.current_track
            .as_ref()
            .is_some_and(|current| current.is_same_track(release))
    }

    /// A different track was assigned to the output
    pub(crate) fn select_track(&mut self, release: Release) {
        self.current_track = Some(release);
        self.current_time = 0.0;
        self.duration = 0.0;
        self.progress = 0.0;
        self.clear_error();
        self.phase = PlayerPhase::Loading;
    }

    /// Play requested for the track already on the output
    pub(crate) fn resume_requested(&mut self) {
        self.clear_error();
        if self.phase == PlayerPhase::Errored {
            self.phase = PlayerPhase::Loading;
        }
    }

    pub(crate) fn time_update(&mut self, current_time: f64) {
        self.current_time = if current_time.is_finite() {
            current_time.max(0.0)
        } else {
            0.0
        };
        self.progress = if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
    }

    pub(crate) fn metadata_loaded(&mut self, duration: f64) {
        self.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        self.clear_error();
        if self.phase == PlayerPhase::Errored {
            self.phase = PlayerPhase::Loading;
        }
    }

    /// Natural end: paused at zero, track kept
    pub(crate) fn ended(&mut self) {
        self.is_playing = false;
        self.current_time = 0.0;
        self.progress = 0.0;
        self.phase = PlayerPhase::Ended;
    }

    pub(crate) fn started(&mut self) {
        self.is_playing = true;
        self.clear_error();
        self.phase = PlayerPhase::Playing;
    }

    pub(crate) fn paused(&mut self) {
        self.is_playing = false;
        if matches!(self.phase, PlayerPhase::Playing | PlayerPhase::Loading) {
            self.phase = PlayerPhase::Paused;
        }
    }

    pub(crate) fn failed(&mut self, error: &PlaybackError) {
        self.is_playing = false;
        self.error = Some(error.to_string());
        self.error_kind = Some(error.kind());
        self.phase = PlayerPhase::Errored;
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_kind = None;
    }
}
