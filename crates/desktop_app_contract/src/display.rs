//! Human-readable rendering of backend timestamps.
//!
//! The backend stores naive local ISO-8601 strings (`2026-01-01T09:30:00.123456`). Anything
//! that does not parse is shown as received.

use chrono::{DateTime, Local, NaiveDateTime};

const DATE_TIME_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";
const DATE_FORMAT: &str = "%m/%d/%Y";

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Date and time, e.g. `01/02/2026, 09:05:00 AM`.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|value| value.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Date only, e.g. `01/02/2026`.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|value| value.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Current local time rendered like [`format_timestamp`].
pub fn now_display() -> String {
    Local::now().format(DATE_TIME_FORMAT).to_string()
}

/// Current local time as an ISO-8601 string with offset.
pub fn now_iso8601() -> String {
    Local::now().to_rfc3339()
}

/// Sort key that orders parseable timestamps chronologically and the rest lexically.
pub fn timestamp_sort_key(raw: &str) -> (Option<NaiveDateTime>, String) {
    (parse_timestamp(raw), raw.to_string())
}
