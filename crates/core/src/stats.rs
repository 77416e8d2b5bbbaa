//! Roll inventory statistics over a date window.
//!
//! The counting metrics (`added_rolls`, `removed_rolls`, time differences)
//! re-filter the input to rolls added inside the window. The length/weight
//! aggregates cover every roll passed in. Callers normally pass rolls that
//! were already selected by `added_date` so both views coincide.
//!
//! A roll added inside the window counts as removed no matter when the
//! removal happened.

use serde::Serialize;

use crate::datetime::parse_timestamp;
use crate::error::CoreError;
use crate::range_filter::InclusiveRange;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inclusive `[start_date, end_date]` statistics window.
pub type StatsWindow = InclusiveRange<Timestamp>;

/// The fields of a roll the aggregator looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollSnapshot {
    pub length: f64,
    pub weight: f64,
    pub added_date: Timestamp,
    pub removed_date: Option<Timestamp>,
}

/// Aggregate metrics returned by the stats endpoint.
///
/// Time differences are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollStats {
    pub added_rolls: u64,
    pub removed_rolls: u64,
    pub avg_length: f64,
    pub avg_weight: f64,
    pub max_length: f64,
    pub min_length: f64,
    pub max_weight: f64,
    pub min_weight: f64,
    pub total_weight: f64,
    pub len_time_diffs: u64,
    pub max_time_diff: f64,
    pub min_time_diff: f64,
}

// ---------------------------------------------------------------------------
// Window parsing
// ---------------------------------------------------------------------------

/// Build the statistics window from request strings.
///
/// A missing or empty `end_date` means `now`.
pub fn parse_stats_window(
    start_date: &str,
    end_date: Option<&str>,
    now: Timestamp,
) -> Result<StatsWindow, CoreError> {
    let start = parse_timestamp(start_date)?;
    let end = match end_date {
        Some(raw) if !raw.is_empty() => parse_timestamp(raw)?,
        _ => now,
    };
    Ok(InclusiveRange { start, end })
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Compute [`RollStats`] for `rolls` over `window`. Empty input gives all zeros.
pub fn compute_roll_stats(rolls: &[RollSnapshot], window: &StatsWindow) -> RollStats {
    let added: Vec<&RollSnapshot> = rolls
        .iter()
        .filter(|roll| window.contains(&roll.added_date))
        .collect();

    let time_diffs: Vec<f64> = added
        .iter()
        .filter_map(|roll| {
            roll.removed_date
                .map(|removed| seconds_between(roll.added_date, removed))
        })
        .collect();

    let (min_length, max_length) = extremes(rolls.iter().map(|r| r.length)).unwrap_or((0.0, 0.0));
    let (min_weight, max_weight) = extremes(rolls.iter().map(|r| r.weight)).unwrap_or((0.0, 0.0));
    let (min_time_diff, max_time_diff) =
        extremes(time_diffs.iter().copied()).unwrap_or((0.0, 0.0));

    let total_length: f64 = rolls.iter().map(|r| r.length).sum();
    let total_weight: f64 = rolls.iter().map(|r| r.weight).sum();

    RollStats {
        added_rolls: added.len() as u64,
        removed_rolls: added.iter().filter(|r| r.removed_date.is_some()).count() as u64,
        avg_length: mean(total_length, rolls.len()),
        avg_weight: mean(total_weight, rolls.len()),
        max_length,
        min_length,
        max_weight,
        min_weight,
        total_weight,
        len_time_diffs: time_diffs.len() as u64,
        max_time_diff,
        min_time_diff,
    }
}

/// Signed seconds from `from` to `to`, keeping sub-second precision.
fn seconds_between(from: Timestamp, to: Timestamp) -> f64 {
    let delta = to - from;
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// `(min, max)` of the values, or `None` when there are none.
fn extremes(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
