//! Parsing of the timestamp strings stored on content-store records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

/// Naive layouts accepted after RFC 3339 fails, most specific first.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// ## Summary
/// Parses a stored timestamp into a local wall-clock value.
///
/// Strings with an offset (`2024-01-02T14:00:00.000Z`, `...-04:00`) are shifted
/// into `tz` and the offset is dropped. Naive strings and bare dates are taken
/// as already being local; a bare date means midnight.
///
/// Returns `None` for anything unparseable.
#[must_use]
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Some(zoned.with_timezone(&tz).naive_local());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
