//! HTML rendering utilities

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use htmlescape::encode_minimal;

/// Display format for timestamps in rendered views
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Escape text for safe insertion into HTML element content
pub fn escape_html(text: &str) -> String {
    encode_minimal(text)
}

/// Format a backend timestamp in the local time zone
///
/// See [`format_timestamp_in`].
pub fn format_local_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format a backend timestamp in `tz`
///
/// Accepts RFC 3339 (`2024-03-01T09:30:00Z`, `...+09:00`) and offset-less
/// ISO forms, which are taken as UTC. Unparseable input is returned as-is.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return naive
                .and_utc()
                .with_timezone(tz)
                .format(DISPLAY_FORMAT)
                .to_string();
        }
    }

    tracing::debug!(timestamp = raw, "Unrecognized timestamp format");
    raw.to_string()
}
