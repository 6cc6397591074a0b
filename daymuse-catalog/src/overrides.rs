//! Editorial override merging
//!
//! Overrides are sparse: a day without an entry keeps the manifest defaults,
//! and an entry only replaces the fields it actually carries.

use crate::manifest::{OverrideEntry, OverrideMap};
use daymuse_common::Release;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>?").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Description used when no override supplies one
pub fn fallback_description(day: impl std::fmt::Display) -> String {
    format!("Day {} from the 365 Days of Light and Dark collection.", day)
}

/// Plain-text approximation of rich text
///
/// Every tag becomes a single space, whitespace runs collapse, and the result
/// is trimmed. An unterminated `<` swallows the rest of the input. This is
/// not an HTML parser or sanitizer.
pub fn strip_markup(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");
    WHITESPACE_RE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Override entry for an absolute day
pub fn lookup(overrides: &OverrideMap, day: u32) -> Option<&OverrideEntry> {
    overrides.get(&day.to_string())
}

/// Merge an override into a release built from manifest defaults
///
/// Only non-empty override fields are applied, so merging the same entry
/// twice gives the same release as merging it once.
pub fn apply_override(mut release: Release, entry: &OverrideEntry) -> Release {
    if let Some(title) = entry.title() {
        release.title = title.to_string();
    }

    if let Some(info) = entry.info() {
        release.description = strip_markup(info);
        release.custom_info = Some(info.to_string());
    }

    if let Some(video_url) = entry.video_url() {
        release.video_url = Some(video_url.to_string());
    }

    release
}
