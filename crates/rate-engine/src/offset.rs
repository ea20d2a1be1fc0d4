//! UTC offset rendering.

use chrono::{DateTime, FixedOffset, Offset, TimeZone};

/// Format a fixed offset as `±HHMM` (e.g. `-0600`, `+0530`).
pub fn format_offset(offset: FixedOffset) -> String {
    let offset_secs = offset.local_minus_utc();
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    format!("{sign}{hours:02}{minutes:02}")
}

/// The `±HHMM` UTC offset in effect for `dt`.
pub fn offset_of<T: TimeZone>(dt: &DateTime<T>) -> String {
    format_offset(dt.offset().fix())
}
