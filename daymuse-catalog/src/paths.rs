//! Storage path derivation
//!
//! Audio files live at `audio/{month}/{NN} - {title}.{ext}` in object
//! storage and cover art mirrors the audio tree under `covers/` with an image
//! extension. Explicit manifest paths always win; these functions only fill
//! in what the manifest leaves out.

use crate::manifest::ManifestItem;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Extension assumed when a manifest item leaves `ext` empty
pub const DEFAULT_AUDIO_EXTENSION: &str = "wav";

/// Characters left unescaped in a URI component (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`)
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Relative audio path for an item without an explicit `audioPath`
///
/// Only the file name is percent-encoded; the month segment is used as is.
pub fn derive_audio_path(item: &ManifestItem) -> String {
    let ext = if item.ext.is_empty() {
        DEFAULT_AUDIO_EXTENSION
    } else {
        item.ext.as_str()
    };
    let file_name = format!("{:02} - {}.{}", item.index, item.storage_title, ext);
    let encoded = utf8_percent_encode(&file_name, URI_COMPONENT);
    format!("audio/{}/{}", item.month, encoded)
}

/// Relative cover path mirroring an audio path
///
/// A leading `audio/` segment becomes `covers/`; otherwise the first
/// `/audio/` becomes `/covers/`. The file extension is then replaced with
/// `image_ext`.
pub fn derive_cover_path(audio_path: Option<&str>, image_ext: &str) -> Option<String> {
    let normalized = audio_path.filter(|p| !p.is_empty())?.trim_start_matches('/');

    let cover_path = match normalized.strip_prefix("audio/") {
        Some(rest) => format!("covers/{}", rest),
        None => normalized.replacen("/audio/", "/covers/", 1),
    };

    Some(replace_extension(&cover_path, image_ext))
}

/// Absolute URL for a storage path, joined with exactly one slash
pub fn to_absolute_url(relative_path: Option<&str>, base_url: &str) -> Option<String> {
    let normalized = relative_path.filter(|p| !p.is_empty())?.trim_start_matches('/');
    Some(format!("{}/{}", base_url.trim_end_matches('/'), normalized))
}

/// Swap the extension of the last path segment; paths without one are unchanged
fn replace_extension(path: &str, new_ext: &str) -> String {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) if segment_start + dot + 1 < path.len() => {
            format!("{}.{}", &path[..segment_start + dot], new_ext)
        }
        _ => path.to_string(),
    }
}
