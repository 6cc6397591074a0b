//! # Daily Muse Player (daymuse-player)
//!
//! Single-output playback controller for resolved releases.
//!
//! **Modules:**
//! - `backend`: the `MediaBackend` seam and its asynchronous `MediaEvent`s
//! - `controller`: commands, event application, state publication, teardown
//! - `state`: the `PlaybackState` snapshot and its transitions
//! - `error`: classification of output failures into user messages

pub mod backend;
pub mod controller;
pub mod error;
pub mod state;

pub use backend::{MediaBackend, MediaErrorCode, MediaEvent, MediaEventSender, PlayRejection};
pub use controller::PlaybackController;
pub use error::{PlaybackError, PlaybackErrorKind};
pub use state::PlaybackState;
