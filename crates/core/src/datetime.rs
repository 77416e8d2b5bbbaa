//! ISO-8601 timestamp parsing for request inputs.
//!
//! Clients send dates both with and without a UTC offset, and sometimes as
//! a bare calendar date. Offset-less values are taken to be UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Offset-less date-time layouts, tried in order after RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 date or date-time string into a UTC [`Timestamp`].
///
/// Accepted forms:
/// - RFC 3339 with an offset: `2024-01-01T00:00:00Z`, `2024-01-01T03:00:00+03:00`
/// - naive date-time, `T` or space separated, optional fractional seconds
/// - bare date `2024-01-01` (midnight UTC)
///
/// Fails with [`CoreError::InvalidDateFormat`] carrying the parse failure.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, CoreError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|err| {
            CoreError::InvalidDateFormat(format!(
                "'{trimmed}' is not an ISO-8601 date-time ({err})"
            ))
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_naive_datetime_as_utc() {
        let ts = parse_timestamp("2024-01-01T12:30:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_space_separator_and_fraction() {
        let ts = parse_timestamp("2024-01-01 00:00:01.5").unwrap();
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
        assert_eq!((ts - base).num_milliseconds(), 500);
    }

    #[test]
    fn parses_rfc3339_offset_into_utc() {
        let ts = parse_timestamp("2024-01-01T03:00:00+03:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let ts = parse_timestamp("2024-02-29").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert!(parse_timestamp("  2024-01-01T00:00:00 ").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert_matches!(err, CoreError::InvalidDateFormat(msg) if msg.contains("yesterday"));
    }

    #[test]
    fn rejects_impossible_date() {
        assert_matches!(
            parse_timestamp("2023-02-30T00:00:00"),
            Err(CoreError::InvalidDateFormat(_))
        );
    }
}
