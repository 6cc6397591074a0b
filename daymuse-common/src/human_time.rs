//! Human-readable track time formatting
//!
//! Provides the `m:ss` display used for release durations and the player's
//! elapsed/total readout.

/// Placeholder shown when a time is zero, unknown, or not finite
pub const ZERO_TIME: &str = "0:00";

/// Format seconds as `m:ss`.
///
/// Fractional seconds are truncated. Minutes are not wrapped into hours, so
/// a 65 minute track renders as `65:00`.
///
/// Zero, negative, NaN and infinite values all render as `0:00`; media
/// backends report NaN or infinity for durations they cannot determine yet.
///
/// # Examples
///
/// ```
/// use daymuse_common::human_time::format_track_time;
///
/// assert_eq!(format_track_time(0.0), "0:00");
/// assert_eq!(format_track_time(7.9), "0:07");
/// assert_eq!(format_track_time(180.0), "3:00");
/// assert_eq!(format_track_time(f64::NAN), "0:00");
/// ```
pub fn format_track_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return ZERO_TIME.to_string();
    }

    let whole = seconds.floor() as u64;
    let minutes = whole / 60;
    let secs = whole % 60;
    format!("{}:{:02}", minutes, secs)
}

/// Format optional seconds as `m:ss`, with `fallback` for `None`.
///
/// # Examples
///
/// ```
/// use daymuse_common::human_time::format_track_time_or;
///
/// assert_eq!(format_track_time_or(Some(95.0), "3:00"), "1:35");
/// assert_eq!(format_track_time_or(None, "3:00"), "3:00");
/// ```
pub fn format_track_time_or(seconds_opt: Option<f64>, fallback: &str) -> String {
    match seconds_opt {
        Some(seconds) => format_track_time(seconds),
        None => fallback.to_string(),
    }
}
