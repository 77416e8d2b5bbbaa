//! Range filter parsing for the roll listing endpoint.
//!
//! Each filterable field arrives as an optional text expression:
//! numeric fields use `"<start>-<end>"`, date fields use `"<start>/<end>"`.
//! Parsing produces inclusive bounds; no ordering between `start` and `end`
//! is enforced, so a reversed range simply matches nothing.

use std::str::FromStr;

use serde::Deserialize;

use crate::datetime::parse_timestamp;
use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Separator between the bounds of a numeric range.
pub const NUMERIC_RANGE_SEPARATOR: char = '-';
/// Separator between the bounds of a date range.
pub const DATE_RANGE_SEPARATOR: char = '/';

/// An inclusive `[start, end]` interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclusiveRange<T> {
    pub start: T,
    pub end: T,
}

impl<T: PartialOrd> InclusiveRange<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// `start <= value <= end`. Always false when `start > end`.
    pub fn contains(&self, value: &T) -> bool {
        self.start <= *value && *value <= self.end
    }
}

/// Raw range expressions as received on the listing query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RollFilterParams {
    pub id_range: Option<String>,
    pub weight_range: Option<String>,
    pub length_range: Option<String>,
    pub added_date_range: Option<String>,
    pub removed_date_range: Option<String>,
}

/// Typed bounds for listing rolls. `None` means the field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollFilter {
    pub id: Option<InclusiveRange<DbId>>,
    pub weight: Option<InclusiveRange<f64>>,
    pub length: Option<InclusiveRange<f64>>,
    pub added_date: Option<InclusiveRange<Timestamp>>,
    pub removed_date: Option<InclusiveRange<Timestamp>>,
}

impl RollFilter {
    /// Parse every provided expression. The first malformed one aborts parsing.
    pub fn parse(params: &RollFilterParams) -> Result<Self, CoreError> {
        Ok(Self {
            id: parse_optional(params.id_range.as_deref(), |raw| {
                parse_numeric_range("id_range", raw)
            })?,
            weight: parse_optional(params.weight_range.as_deref(), |raw| {
                parse_numeric_range("weight_range", raw)
            })?,
            length: parse_optional(params.length_range.as_deref(), |raw| {
                parse_numeric_range("length_range", raw)
            })?,
            added_date: parse_optional(params.added_date_range.as_deref(), |raw| {
                parse_date_range("added_date_range", raw)
            })?,
            removed_date: parse_optional(params.removed_date_range.as_deref(), |raw| {
                parse_date_range("removed_date_range", raw)
            })?,
        })
    }

    /// True when no field carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse `"<start>-<end>"` into an inclusive range of `T`.
///
/// Fails with [`CoreError::InvalidRangeFormat`] unless the expression has
/// exactly one separator and both sides parse as `T`.
pub fn parse_numeric_range<T: FromStr>(
    field: &'static str,
    raw: &str,
) -> Result<InclusiveRange<T>, CoreError> {
    let invalid = || CoreError::InvalidRangeFormat {
        field,
        value: raw.to_string(),
    };

    let (start, end) = split_pair(raw, NUMERIC_RANGE_SEPARATOR).ok_or_else(invalid)?;
    let start = start.parse::<T>().map_err(|_| invalid())?;
    let end = end.parse::<T>().map_err(|_| invalid())?;

    Ok(InclusiveRange { start, end })
}

/// Parse `"<start>/<end>"` into an inclusive range of timestamps.
pub fn parse_date_range(
    field: &'static str,
    raw: &str,
) -> Result<InclusiveRange<Timestamp>, CoreError> {
    let (start, end) = split_pair(raw, DATE_RANGE_SEPARATOR).ok_or_else(|| {
        CoreError::InvalidDateFormat(format!(
            "{field}: expected '<start>/<end>', got '{raw}'"
        ))
    })?;

    Ok(InclusiveRange {
        start: parse_timestamp(start)?,
        end: parse_timestamp(end)?,
    })
}

/// Split into exactly two trimmed tokens around a single separator.
fn split_pair(raw: &str, separator: char) -> Option<(&str, &str)> {
    let mut parts = raw.split(separator);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => Some((start.trim(), end.trim())),
        _ => None,
    }
}

/// Absent or empty expressions yield no constraint. Whitespace-only input
/// is parsed and rejected like any other malformed expression.
fn parse_optional<T>(
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, CoreError>,
) -> Result<Option<T>, CoreError> {
    match raw {
        Some(raw) if !raw.is_empty() => parse(raw).map(Some),
        _ => Ok(None),
    }
}
