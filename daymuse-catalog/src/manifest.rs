//! Release manifest and editorial override inputs
//!
//! The manifest is the authoritative list of releases; it is required and a
//! malformed document fails the whole load. The override document is
//! optional: when it is missing or unreadable the catalog resolves with
//! manifest defaults only.

use daymuse_common::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// One source record describing a release's month, position and file naming
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestItem {
    /// Lowercase full English month name
    pub month: String,
    /// 1-based position within the month
    pub index: u32,
    /// Title as used in the stored file name
    pub storage_title: String,
    /// Audio file extension without the dot (empty means `wav`)
    #[serde(default)]
    pub ext: String,
    /// Explicit audio storage path, wins over the derived one
    #[serde(default)]
    pub audio_path: Option<String>,
    /// Explicit cover storage path, wins over the derived one
    #[serde(default)]
    pub cover_path: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}

impl ManifestItem {
    /// Minimal item with derived paths
    pub fn new(month: &str, index: u32, storage_title: &str, ext: &str) -> Self {
        Self {
            month: month.to_string(),
            index,
            storage_title: storage_title.to_string(),
            ext: ext.to_string(),
            audio_path: None,
            cover_path: None,
            mood: None,
            duration_seconds: None,
        }
    }

    /// Stable release key, independent of the computed day
    pub fn release_id(&self) -> String {
        format!("{}-{}", self.month, self.index)
    }

    /// Explicit audio path, if set and non-empty
    pub fn explicit_audio_path(&self) -> Option<&str> {
        self.audio_path.as_deref().filter(|p| !p.is_empty())
    }

    /// Explicit cover path, if set and non-empty
    pub fn explicit_cover_path(&self) -> Option<&str> {
        self.cover_path.as_deref().filter(|p| !p.is_empty())
    }
}

/// Top-level manifest document: `{ "items": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestDocument {
    #[serde(default)]
    pub items: Vec<ManifestItem>,
}

/// Editorial correction for one day
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideEntry {
    #[serde(default)]
    pub title: Option<String>,
    /// Rich text (may contain markup)
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl OverrideEntry {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn info(&self) -> Option<&str> {
        non_empty(&self.info)
    }

    pub fn video_url(&self) -> Option<&str> {
        non_empty(&self.video_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Overrides keyed by stringified absolute day
pub type OverrideMap = HashMap<String, OverrideEntry>;

/// Parse a manifest document
pub fn parse_manifest(json: &str) -> Result<Vec<ManifestItem>> {
    let document: ManifestDocument = serde_json::from_str(json)?;
    Ok(document.items)
}

/// Read and parse the manifest file; any failure is fatal to the caller
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestItem>> {
    let raw = std::fs::read_to_string(path)?;
    let items = parse_manifest(&raw)?;
    debug!("Loaded {} manifest items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse an override document
pub fn parse_overrides(json: &str) -> Result<OverrideMap> {
    let overrides: OverrideMap = serde_json::from_str(json)?;
    Ok(overrides)
}

/// Read the override file, treating a missing or broken file as "no overrides"
pub fn load_overrides(path: &Path) -> OverrideMap {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("No overrides loaded from {}: {}", path.display(), e);
            return OverrideMap::new();
        }
    };

    match parse_overrides(&raw) {
        Ok(overrides) => {
            debug!("Loaded {} overrides from {}", overrides.len(), path.display());
            overrides
        }
        Err(e) => {
            warn!("Ignoring malformed overrides in {}: {}", path.display(), e);
            OverrideMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_camel_case() {
        let items = parse_manifest(
            r#"{"items": [
                {"month": "january", "index": 1, "storageTitle": "Chunky", "ext": "wav"},
                {"month": "march", "index": 4, "storageTitle": "Drift", "ext": "mp3",
                 "audioPath": "audio/custom/drift.mp3", "coverPath": null, "durationSeconds": 201.5}
            ]}"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], ManifestItem::new("january", 1, "Chunky", "wav"));
        assert_eq!(items[1].explicit_audio_path(), Some("audio/custom/drift.mp3"));
        assert_eq!(items[1].explicit_cover_path(), None);
        assert_eq!(items[1].duration_seconds, Some(201.5));
    }

    #[test]
    fn test_missing_items_is_empty_manifest() {
        assert!(parse_manifest("{}").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_manifest_is_error() {
        assert!(parse_manifest("{\"items\": [").is_err());
        assert!(parse_manifest(r#"{"items": [{"month": "may"}]}"#).is_err());
    }

    #[test]
    fn test_empty_strings_read_as_absent() {
        let mut item = ManifestItem::new("may", 2, "Bloom", "");
        item.audio_path = Some(String::new());
        assert_eq!(item.explicit_audio_path(), None);

        let entry = OverrideEntry {
            title: Some(String::new()),
            info: Some("<p>x</p>".to_string()),
            video_url: None,
        };
        assert_eq!(entry.title(), None);
        assert_eq!(entry.info(), Some("<p>x</p>"));
        assert_eq!(entry.video_url(), None);
    }

    #[test]
    fn test_release_id_uses_month_and_index() {
        assert_eq!(ManifestItem::new("february", 3, "x", "wav").release_id(), "february-3");
    }

    #[test]
    fn test_parse_overrides() {
        let overrides =
            parse_overrides(r#"{"32": {"title": "Renamed", "videoUrl": "https://v.test/1"}}"#)
                .unwrap();
        let entry = &overrides["32"];
        assert_eq!(entry.title(), Some("Renamed"));
        assert_eq!(entry.video_url(), Some("https://v.test/1"));
    }
}
