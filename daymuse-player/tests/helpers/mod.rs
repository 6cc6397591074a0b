//! Test helpers for daymuse-player integration tests
//!
//! - ScriptedOutput: in-memory media output that behaves like a browser
//!   audio element and records every call it receives
//! - release: minimal playable release fixture

pub mod scripted_output;

pub use scripted_output::{OutputCall, OutputHandle, ScriptedOutput};

use daymuse_common::Release;

/// Playable release fixture with a URL derived from `id`
pub fn release(id: &str, day: u32) -> Release {
    Release {
        id: id.to_string(),
        day,
        date: format!("2026-01-{:02}", day.min(31)),
        title: format!("Track {}", id),
        description: String::new(),
        custom_info: None,
        video_url: None,
        stored_audio_url: Some(format!("https://storage.test/audio/{}.wav", id)),
        artwork_url: None,
        mood: "light".to_string(),
        duration_formatted: "3:00".to_string(),
    }
}
