//! Resolved release record shared by the catalog and the player

use serde::{Deserialize, Serialize};

/// Fully resolved, display-ready release
///
/// Built once per resolution pass and never mutated afterwards. `id` is
/// derived from the manifest month and index, so it survives editorial
/// overrides; `day` is the absolute day-of-year used for dating and lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Stable key, `{month}-{index}`
    pub id: String,
    /// Absolute day-of-year (1-based)
    pub day: u32,
    /// ISO-8601 calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub title: String,
    /// Plain-text description
    pub description: String,
    /// Raw rich-text editorial info, kept for rich rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Absolute audio URL (absent for display-only entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_audio_url: Option<String>,
    /// Absolute cover art URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    pub mood: String,
    /// Track length as `m:ss`
    pub duration_formatted: String,
}

impl Release {
    /// Track identity used by the player: same id and same day
    pub fn is_same_track(&self, other: &Release) -> bool {
        self.id == other.id && self.day == other.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Release {
        Release {
            id: "january-1".to_string(),
            day: 1,
            date: "2026-01-01".to_string(),
            title: "Chunky".to_string(),
            description: "Day 1".to_string(),
            custom_info: None,
            video_url: None,
            stored_audio_url: Some("https://cdn.test/audio/january/01.wav".to_string()),
            artwork_url: None,
            mood: "light".to_string(),
            duration_formatted: "3:00".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case_and_omits_absent_fields() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["storedAudioUrl"], "https://cdn.test/audio/january/01.wav");
        assert_eq!(json["durationFormatted"], "3:00");
        assert!(json.get("customInfo").is_none());
        assert!(json.get("artworkUrl").is_none());
    }

    #[test]
    fn test_same_track_requires_id_and_day() {
        let a = sample();
        let mut b = sample();
        assert!(a.is_same_track(&b));

        b.day = 2;
        assert!(!a.is_same_track(&b));
    }
}
