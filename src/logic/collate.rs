//! Shared ordering helpers: locale-ish string comparison and series date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;

/// Case-insensitive comparison with a raw fallback, so distinct strings never
/// compare equal. Stands in for locale collation on nicks, names and ids.
pub(crate) fn cmp_locale(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Parse a series date: RFC 3339 timestamp, bare datetime, or plain `YYYY-MM-DD`.
pub(crate) fn parse_series_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Millisecond timestamp used for ordering; unparseable dates count as the epoch.
pub(crate) fn series_date_value(value: &str) -> i64 {
    parse_series_date(value)
        .map(|datetime| datetime.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Calendar day of a range-filter bound; `None` (no bound) when absent or unparseable.
pub(crate) fn parse_filter_date(value: Option<&str>) -> Option<NaiveDate> {
    parse_series_date(value?).map(|datetime| datetime.date())
}
