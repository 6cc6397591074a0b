//! Playback-related type definitions

use serde::{Deserialize, Serialize};

/// Player phase enumeration
///
/// `Idle` (nothing loaded) → `Loading` (source assigned) → `Playing` ⇄ `Paused`
/// → `Ended`. Any phase may move to `Errored`; a new play request from
/// `Errored` re-enters `Loading`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPhase {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
    Ended,
    Errored,
}

impl std::fmt::Display for PlayerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerPhase::Idle => write!(f, "idle"),
            PlayerPhase::Loading => write!(f, "loading"),
            PlayerPhase::Playing => write!(f, "playing"),
            PlayerPhase::Paused => write!(f, "paused"),
            PlayerPhase::Ended => write!(f, "ended"),
            PlayerPhase::Errored => write!(f, "errored"),
        }
    }
}
