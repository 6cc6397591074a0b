//! Playback error classification
//!
//! Output failures are never propagated to callers. They are mapped to a
//! short user-facing message and stored in the controller state.

use crate::backend::{MediaErrorCode, PlayRejection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing playback failure
///
/// The `Display` text is the message shown to the listener.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Media error: source missing or format unsupported
    #[error("Audio source not found or format not supported")]
    SourceNotSupported,

    /// Network failure (media error or start rejection)
    #[error("Network error while playing audio")]
    Network,

    /// Decode failure (media error or start rejection)
    #[error("Error decoding audio")]
    Decode,

    /// Unclassified media error
    #[error("Error playing audio")]
    Media,

    /// Start rejected: format unsupported or file missing
    #[error("Audio format not supported or file missing")]
    StartNotSupported,

    /// Start rejected for any other reason (autoplay policy, unknown)
    #[error("Playback failed")]
    StartFailed,
}

/// Coarse failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackErrorKind {
    /// Source missing or unsupported
    Unsupported,
    Network,
    Decode,
    /// Generic playback failure
    Failed,
}

impl PlaybackError {
    pub fn kind(&self) -> PlaybackErrorKind {
        match self {
            PlaybackError::SourceNotSupported | PlaybackError::StartNotSupported => {
                PlaybackErrorKind::Unsupported
            }
            PlaybackError::Network => PlaybackErrorKind::Network,
            PlaybackError::Decode => PlaybackErrorKind::Decode,
            PlaybackError::Media | PlaybackError::StartFailed => PlaybackErrorKind::Failed,
        }
    }
}

impl From<MediaErrorCode> for PlaybackError {
    fn from(code: MediaErrorCode) -> Self {
        match code {
            MediaErrorCode::SourceNotSupported => PlaybackError::SourceNotSupported,
            MediaErrorCode::Network => PlaybackError::Network,
            MediaErrorCode::Decode => PlaybackError::Decode,
            MediaErrorCode::Aborted | MediaErrorCode::Unknown => PlaybackError::Media,
        }
    }
}

impl From<&PlayRejection> for PlaybackError {
    fn from(rejection: &PlayRejection) -> Self {
        match rejection {
            PlayRejection::NotSupported => PlaybackError::StartNotSupported,
            PlayRejection::Network => PlaybackError::Network,
            PlayRejection::Decode => PlaybackError::Decode,
            PlayRejection::NotAllowed | PlayRejection::Other(_) => PlaybackError::StartFailed,
        }
    }
}
