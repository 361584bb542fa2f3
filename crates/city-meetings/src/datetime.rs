use chrono::{DateTime, NaiveDateTime};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 timestamp into the wall-clock time it was written in.
///
/// The offset is dropped rather than applied: "2026-01-15T18:00:00-08:00"
/// becomes 18:00, not 02:00 the next day. Date-only strings and anything
/// unparseable yield `None`.
pub fn parse_naive_datetime(date_str: &str) -> Option<NaiveDateTime> {
    let date_str = date_str.trim();
    if !date_str.contains('T') {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.naive_local());
    }

    // ISO-8601 also allows "+0000" offsets and omitted seconds; %z takes no "Z"
    let with_offset = date_str.replace('Z', "+00:00");
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&with_offset, fmt).ok())
    {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date_str, fmt).ok())
}
