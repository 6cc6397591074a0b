//! Token metadata records
//!
//! Each release is also published as a collectible whose token id is the
//! absolute day. This module parses incoming token ids and derives the
//! display record served for them; serving it over HTTP is left to the host.

use crate::overrides::{fallback_description, strip_markup};
use daymuse_common::Release;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use serde_json::{json, Value};

/// Largest integer representable without loss in a JSON number (2^53 - 1)
pub const MAX_SAFE_TOKEN_ID: u64 = 9_007_199_254_740_991;

/// Public site each token links back to
pub const MAIN_APP_URL: &str = "https://th3scr1b3.art";

/// Display record for one token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,
    pub external_url: String,
    pub attributes: Vec<TraitAttribute>,
    pub properties: TokenProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitAttribute {
    pub trait_type: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenProperties {
    /// Serialized as `null` when absent
    pub video_url: Option<String>,
}

/// Parse a token id from a request path segment
///
/// Accepts decimal digits or hex (optionally `0x`-prefixed) after
/// percent-decoding and trimming. Zero and values above
/// [`MAX_SAFE_TOKEN_ID`] are rejected.
pub fn parse_token_id(raw: &str) -> Option<u64> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let id = decoded.trim();
    if id.is_empty() {
        return None;
    }

    let parsed = if id.bytes().all(|b| b.is_ascii_digit()) {
        id.parse::<u64>().ok()?
    } else {
        let hex = id.strip_prefix("0x").unwrap_or(id);
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u128::from_str_radix(hex, 16).ok()?;
        u64::try_from(value).ok()?
    };

    (1..=MAX_SAFE_TOKEN_ID).contains(&parsed).then_some(parsed)
}

impl TokenMetadata {
    /// Build the record for `release`, served under `token_id`
    ///
    /// `app_url` supplies the fallback image when the release has no artwork.
    pub fn from_release(release: &Release, token_id: u64, app_url: &str) -> Self {
        let title = if release.title.is_empty() {
            "Untitled"
        } else {
            release.title.as_str()
        };

        let rich_description = release
            .custom_info
            .as_deref()
            .map(strip_markup)
            .unwrap_or_default();
        let description = if !rich_description.is_empty() {
            rich_description
        } else if !release.description.is_empty() {
            release.description.clone()
        } else {
            fallback_description(token_id)
        };

        Self {
            name: format!("Day {}: {}", token_id, title),
            description,
            image: release
                .artwork_url
                .clone()
                .unwrap_or_else(|| format!("{}/icon.svg", app_url.trim_end_matches('/'))),
            animation_url: release.stored_audio_url.clone(),
            external_url: format!("{}?day={}", MAIN_APP_URL, token_id),
            attributes: vec![
                TraitAttribute {
                    trait_type: "Day".to_string(),
                    value: json!(token_id),
                    display_type: Some("number".to_string()),
                },
                TraitAttribute {
                    trait_type: "Mood".to_string(),
                    value: json!(non_empty_or_unknown(&release.mood)),
                    display_type: None,
                },
                TraitAttribute {
                    trait_type: "Duration".to_string(),
                    value: json!(non_empty_or_unknown(&release.duration_formatted)),
                    display_type: None,
                },
            ],
            properties: TokenProperties {
                video_url: release.video_url.clone(),
            },
        }
    }
}

fn non_empty_or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "unknown"
    } else {
        value
    }
}
