//! Release resolution
//!
//! Turns manifest items plus the sparse override map into the ordered list
//! of display-ready releases. Each item resolves on its own; the only
//! cross-item step is the final sort by day.

use crate::calendar::{absolute_day, iso_date};
use crate::manifest::{ManifestItem, OverrideMap};
use crate::overrides::{apply_override, fallback_description, lookup};
use crate::paths::{derive_audio_path, derive_cover_path, to_absolute_url};
use daymuse_common::config::{CatalogConfig, DEFAULT_COVER_EXTENSION, DEFAULT_STORAGE_BASE_URL};
use daymuse_common::human_time::format_track_time_or;
use daymuse_common::{Release, Result};
use tracing::debug;

/// Mood shown when the manifest does not set one
pub const DEFAULT_MOOD: &str = "light";

/// Duration shown when the manifest does not set one
pub const DEFAULT_DURATION: &str = "3:00";

/// Storage settings applied during resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    /// Root that relative storage paths are joined onto
    pub storage_base_url: String,
    /// Extension for derived cover paths
    pub cover_extension: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            storage_base_url: DEFAULT_STORAGE_BASE_URL.to_string(),
            cover_extension: DEFAULT_COVER_EXTENSION.to_string(),
        }
    }
}

impl From<&CatalogConfig> for ResolveOptions {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            storage_base_url: config.storage_base_url.clone(),
            cover_extension: config.cover_extension.clone(),
        }
    }
}

impl ResolveOptions {
    pub fn with_base_url(storage_base_url: &str) -> Self {
        Self {
            storage_base_url: storage_base_url.to_string(),
            ..Self::default()
        }
    }
}

/// Resolve every manifest item and sort ascending by day
///
/// Items that land on the same day are both kept; see
/// [`crate::validation::validate_manifest`] for detecting that. Fails as a
/// whole if any item cannot be dated.
pub fn resolve(
    items: &[ManifestItem],
    overrides: &OverrideMap,
    options: &ResolveOptions,
) -> Result<Vec<Release>> {
    let mut releases = items
        .iter()
        .map(|item| resolve_item(item, overrides, options))
        .collect::<Result<Vec<_>>>()?;

    // Stable sort: colliding days keep manifest order
    releases.sort_by_key(|release| release.day);

    debug!(
        "Resolved {} releases ({} overrides available)",
        releases.len(),
        overrides.len()
    );
    Ok(releases)
}

/// Resolve a single manifest item
pub fn resolve_item(
    item: &ManifestItem,
    overrides: &OverrideMap,
    options: &ResolveOptions,
) -> Result<Release> {
    let day = absolute_day(&item.month, item.index);

    let audio_path = item
        .explicit_audio_path()
        .map(str::to_string)
        .unwrap_or_else(|| derive_audio_path(item));
    let cover_path = match item.explicit_cover_path() {
        Some(path) => Some(path.to_string()),
        None => derive_cover_path(Some(&audio_path), &options.cover_extension),
    };

    let base = Release {
        id: item.release_id(),
        day,
        date: iso_date(day)?,
        title: item.storage_title.clone(),
        description: fallback_description(day),
        custom_info: None,
        video_url: None,
        stored_audio_url: to_absolute_url(Some(&audio_path), &options.storage_base_url),
        artwork_url: to_absolute_url(cover_path.as_deref(), &options.storage_base_url),
        mood: item
            .mood
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MOOD)
            .to_string(),
        duration_formatted: format_track_time_or(item.duration_seconds, DEFAULT_DURATION),
    };

    Ok(match lookup(overrides, day) {
        Some(entry) => apply_override(base, entry),
        None => base,
    })
}
