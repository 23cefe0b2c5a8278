//! FILENAME: core/engine/src/coerce.rs
//! PURPOSE: Permissive value coercion shared by inference, filtering and
//! sorting. Numeric coercion accepts numeric strings with grouping commas;
//! date coercion accepts a fixed set of common calendar/timestamp layouts.
//! Coercion never fails loudly: unparsable input is simply `None`.

use crate::value::RecordValue;
use chrono::{NaiveDate, NaiveDateTime};

/// Attempts to read a value as a number.
/// Booleans and absent values never coerce.
pub fn coerce_number(value: &RecordValue) -> Option<f64> {
    match value {
        RecordValue::Number(n) if n.is_finite() => Some(*n),
        RecordValue::Text(s) => parse_numeric_str(s),
        _ => None,
    }
}

/// Parses a numeric string, tolerating grouping commas and whitespace.
pub fn parse_numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = if trimmed.contains(',') {
        trimmed.replace(',', "")
    } else {
        trimmed.to_string()
    };
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Attempts to read a value as a calendar date / timestamp.
/// Only string values participate; numeric "date serials" do not coerce.
pub fn coerce_datetime(value: &RecordValue) -> Option<NaiveDateTime> {
    match value {
        RecordValue::Text(s) => parse_datetime_str(s),
        _ => None,
    }
}

/// Timestamp layouts tried before date-only layouts.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts; midnight is assumed.
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Parses a date string against the known layouts, most specific first.
pub fn parse_datetime_str(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(ts);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// True when a string carries a time-of-day component marker.
pub fn has_time_marker(s: &str) -> bool {
    s.contains(':') || s.contains('T')
}
