//! Display formatters
//!
//! Pure conversions from stored timestamps and dates to the labels shown in the
//! dashboard. Both are deterministic for a fixed `now`. Unparseable input is not
//! an error; it renders as `Invalid Date`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Label shown for input that cannot be parsed as a date
pub const INVALID_DATE: &str = "Invalid Date";

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Parse an ISO 8601 timestamp or a bare calendar date (taken as UTC midnight)
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Relative age of `timestamp` as seen from `now`
///
/// Whole hours are floored: under one hour is `Just now`, under a day is
/// `{n}h ago`, anything older is `{n}d ago`. Timestamps in the future count as
/// `Just now`.
pub fn relative_age(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return INVALID_DATE.to_string();
    };

    let hours = (now - then).num_milliseconds().div_euclid(MILLIS_PER_HOUR);

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Long month-day-year form, e.g. `August 17, 2025`
pub fn long_date(date: &str) -> String {
    match parse_timestamp(date) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
