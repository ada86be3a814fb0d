//! Date formatting helpers.
//!
//! Exported timestamps render as relative time ("12 minutes ago") when they
//! are less than a day old, and as a full local date-time otherwise. A
//! value that cannot be parsed is shown verbatim; a missing value shows as
//! "Unknown".

use chrono::{DateTime, Local, Utc};

/// Fallback label for missing timestamps and authors.
pub const UNKNOWN: &str = "Unknown";

/// Format an exported timestamp for display.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return UNKNOWN.to_string();
    };
    if raw.is_empty() {
        return UNKNOWN.to_string();
    }

    let Some(parsed) = parse_timestamp(raw) else {
        // Not a recognizable timestamp; show what the export gave us
        return raw.to_string();
    };

    format_parsed(parsed, Utc::now())
}

/// Parse the timestamp formats seen in exports (RFC 3339, with a
/// date-time-without-zone fallback read as UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

/// Render a parsed timestamp relative to `now`.
fn format_parsed(parsed: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(parsed);

    if age.num_seconds() >= 0 && age.num_hours() < 24 {
        return format_relative(age.num_seconds());
    }

    parsed
        .with_timezone(&Local)
        .format("%m/%d/%Y %H:%M:%S")
        .to_string()
}

/// Relative rendering for timestamps under a day old.
fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, if minutes != 1 { "s" } else { "" })
    } else {
        format!("{} hour{} ago", hours, if hours != 1 { "s" } else { "" })
    }
}
