//! Day-of-year arithmetic for the release calendar
//!
//! Releases are addressed by month name and 1-based index within the month.
//! Both map onto an absolute day-of-year using a fixed non-leap offset
//! table, and absolute days map onto calendar dates in the project year.

use chrono::{Duration, NaiveDate};
use daymuse_common::{Error, Result};
use tracing::warn;

/// Year all release dates are derived in
pub const PROJECT_YEAR: i32 = 2026;

/// Cumulative day offset at the start of each month (non-leap year)
const MONTH_OFFSETS: [(&str, u32); 12] = [
    ("january", 0),
    ("february", 31),
    ("march", 59),
    ("april", 90),
    ("may", 120),
    ("june", 151),
    ("july", 181),
    ("august", 212),
    ("september", 243),
    ("october", 273),
    ("november", 304),
    ("december", 334),
];

/// Offset of the month start, or `None` for an unrecognized month name
pub fn month_offset(month: &str) -> Option<u32> {
    let month = month.to_lowercase();
    MONTH_OFFSETS
        .iter()
        .find(|(name, _)| *name == month)
        .map(|(_, offset)| *offset)
}

/// Number of days in a month of the reference year
pub fn days_in_month(month: &str) -> Option<u32> {
    let month = month.to_lowercase();
    let position = MONTH_OFFSETS.iter().position(|(name, _)| *name == month)?;
    let start = MONTH_OFFSETS[position].1;
    let end = MONTH_OFFSETS
        .get(position + 1)
        .map(|(_, offset)| *offset)
        .unwrap_or(365);
    Some(end - start)
}

/// Absolute day-of-year for a month name and 1-based index
///
/// Unknown month names fall back to offset 0 so the release still resolves
/// (as a January day). Use manifest validation to reject them instead.
pub fn absolute_day(month: &str, index: u32) -> u32 {
    match month_offset(month) {
        Some(offset) => offset.saturating_add(index),
        None => {
            warn!("Unknown month '{}' (index {}), using offset 0", month, index);
            index
        }
    }
}

/// ISO-8601 date (`YYYY-MM-DD`) of an absolute day in the project year
///
/// Day 1 is January 1st. Days past the end of the year roll over into the
/// following year.
pub fn iso_date(day: u32) -> Result<String> {
    NaiveDate::from_ymd_opt(PROJECT_YEAR, 1, 1)
        .and_then(|start| start.checked_add_signed(Duration::days(i64::from(day) - 1)))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| {
            Error::InvalidInput(format!("day {} is outside the representable calendar", day))
        })
}
