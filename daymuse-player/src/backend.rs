//! Media output seam
//!
//! The controller drives exactly one output through [`MediaBackend`]. The
//! output answers synchronously only for up-front play rejections; every
//! other outcome (metadata, position ticks, play/pause, end of track, media
//! errors) arrives later as a [`MediaEvent`] on the channel handed over in
//! [`MediaBackend::attach`].

use tokio::sync::mpsc;

/// Error codes an output reports while loading or playing a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorCode {
    /// Fetch aborted by the user agent
    Aborted,
    /// Network failure while fetching the source
    Network,
    /// Source fetched but could not be decoded
    Decode,
    /// Source missing or in an unsupported format
    SourceNotSupported,
    /// Anything the output could not classify
    Unknown,
}

/// Why an output refused to start playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRejection {
    /// Format unsupported or resource missing
    NotSupported,
    /// Autoplay policy refused to start without a user gesture
    NotAllowed,
    Network,
    Decode,
    /// Unrecognized failure, with the output's own description
    Other(String),
}

/// Asynchronous notifications from the output
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback position tick
    TimeUpdate { current_time: f64 },
    /// Source metadata is available; `duration` may be NaN or infinite
    LoadedMetadata { duration: f64 },
    /// Source played to its natural end
    Ended,
    /// Output started playing
    Play,
    /// Output paused
    Pause,
    /// Load or playback failure
    Error(MediaErrorCode),
}

/// Sending half handed to the output when the controller takes ownership
pub type MediaEventSender = mpsc::UnboundedSender<MediaEvent>;

/// A single audio output
///
/// Implementations wrap whatever actually renders audio. Calls return
/// immediately; results are reported as [`MediaEvent`]s.
pub trait MediaBackend {
    /// Register the event channel; called once, before any other method
    fn attach(&mut self, events: MediaEventSender);

    /// Replace the current source and start loading it
    fn set_source(&mut self, url: &str);

    /// Request playback of the current source
    ///
    /// `Ok` means "requested"; failures after this point arrive as
    /// [`MediaEvent::Error`].
    fn play(&mut self) -> Result<(), PlayRejection>;

    fn pause(&mut self);

    /// Move the playback position (seconds, unclamped)
    fn seek(&mut self, position_seconds: f64);

    /// Stop, clear the source, and drop the event sender
    fn release(&mut self);
}
