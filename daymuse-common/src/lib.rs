//! # Daily Muse Common Library
//!
//! Shared code for the Daily Muse crates:
//! - The resolved `Release` record
//! - Error types
//! - Configuration resolution (storage base URL, input paths, logging)
//! - Track time formatting
//! - Playback phase definitions

pub mod config;
pub mod error;
pub mod human_time;
pub mod models;
pub mod playback_types;

pub use error::{Error, Result};
pub use models::Release;
pub use playback_types::PlayerPhase;
