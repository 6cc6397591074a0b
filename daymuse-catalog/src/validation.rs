//! Manifest validation
//!
//! The resolver is deliberately lenient: unknown months resolve at offset 0
//! and colliding days are both kept. Validation reports those cases so a
//! caller (or strict catalog loading) can reject the manifest before it is
//! published.

use crate::calendar::{days_in_month, month_offset};
use crate::manifest::ManifestItem;
use daymuse_common::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// A single problem found in a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestIssue {
    /// Month name not in the calendar table
    UnknownMonth { id: String, month: String },
    /// Index 0 (indexes are 1-based)
    ZeroIndex { id: String },
    /// Index larger than the month is long
    IndexPastMonthEnd { id: String, index: u32, days_in_month: u32 },
    /// Two items resolve to the same absolute day
    DuplicateDay { day: u32, first_id: String, second_id: String },
}

impl fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestIssue::UnknownMonth { id, month } => {
                write!(f, "{}: unknown month '{}'", id, month)
            }
            ManifestIssue::ZeroIndex { id } => write!(f, "{}: index must be at least 1", id),
            ManifestIssue::IndexPastMonthEnd {
                id,
                index,
                days_in_month,
            } => write!(
                f,
                "{}: index {} exceeds month length {}",
                id, index, days_in_month
            ),
            ManifestIssue::DuplicateDay {
                day,
                first_id,
                second_id,
            } => write!(f, "day {} claimed by both {} and {}", day, first_id, second_id),
        }
    }
}

/// Collect every issue in the manifest, in manifest order
pub fn validate_manifest(items: &[ManifestItem]) -> Vec<ManifestIssue> {
    let mut issues = Vec::new();
    let mut claimed_days: HashMap<u32, String> = HashMap::new();

    for item in items {
        let id = item.release_id();

        let offset = match month_offset(&item.month) {
            Some(offset) => offset,
            None => {
                issues.push(ManifestIssue::UnknownMonth {
                    id: id.clone(),
                    month: item.month.clone(),
                });
                0
            }
        };

        if item.index == 0 {
            issues.push(ManifestIssue::ZeroIndex { id: id.clone() });
        }

        if let Some(length) = days_in_month(&item.month) {
            if item.index > length {
                issues.push(ManifestIssue::IndexPastMonthEnd {
                    id: id.clone(),
                    index: item.index,
                    days_in_month: length,
                });
            }
        }

        let day = offset.saturating_add(item.index);
        match claimed_days.get(&day) {
            Some(first_id) => issues.push(ManifestIssue::DuplicateDay {
                day,
                first_id: first_id.clone(),
                second_id: id,
            }),
            None => {
                claimed_days.insert(day, id);
            }
        }
    }

    issues
}

/// Fail with every issue listed if the manifest has any
pub fn ensure_valid(items: &[ManifestItem]) -> Result<()> {
    let issues = validate_manifest(items);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::ManifestInvalid(
            issues.iter().map(ToString::to_string).collect(),
        ))
    }
}
