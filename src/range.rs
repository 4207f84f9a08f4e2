//! Navigating the visible time range of a chart.

use serde::Serialize;

use crate::duration::{format_duration, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};

/// Range shown when a chart is first opened.
pub const DEFAULT_RANGE_MS: i64 = 5 * MILLIS_PER_MINUTE;

/// How far back `default_time_range` reaches.
pub const DEFAULT_LOOKBACK_MS: i64 = 6 * MILLIS_PER_HOUR;

/// Ranges visited by `increase_range` and `decrease_range`, ascending.
pub const RANGE_STEPS: [i64; 15] = [
    5 * MILLIS_PER_MINUTE,
    15 * MILLIS_PER_MINUTE,
    30 * MILLIS_PER_MINUTE,
    MILLIS_PER_HOUR,
    2 * MILLIS_PER_HOUR,
    6 * MILLIS_PER_HOUR,
    12 * MILLIS_PER_HOUR,
    24 * MILLIS_PER_HOUR,
    48 * MILLIS_PER_HOUR,
    7 * MILLIS_PER_DAY,
    14 * MILLIS_PER_DAY,
    28 * MILLIS_PER_DAY,
    56 * MILLIS_PER_DAY,
    365 * MILLIS_PER_DAY,
    730 * MILLIS_PER_DAY,
];

/// Ranges offered in the range picker, ascending.
pub const RANGE_PRESETS: [i64; 11] = [
    MILLIS_PER_MINUTE,
    5 * MILLIS_PER_MINUTE,
    15 * MILLIS_PER_MINUTE,
    30 * MILLIS_PER_MINUTE,
    MILLIS_PER_HOUR,
    2 * MILLIS_PER_HOUR,
    6 * MILLIS_PER_HOUR,
    12 * MILLIS_PER_HOUR,
    24 * MILLIS_PER_HOUR,
    48 * MILLIS_PER_HOUR,
    7 * MILLIS_PER_DAY,
];

/// A picker entry: the range and its compact label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangePreset {
    pub label: String,
    pub range_ms: i64,
}

/// `RANGE_PRESETS` paired with their `format_duration` labels.
pub fn range_presets() -> Vec<RangePreset> {
    RANGE_PRESETS
        .iter()
        .map(|&range_ms| RangePreset {
            label: format_duration(range_ms),
            range_ms,
        })
        .collect()
}

/// Next larger step, or `current` when already at or past the largest.
pub fn increase_range(current: i64) -> i64 {
    RANGE_STEPS
        .iter()
        .copied()
        .find(|&step| current < step)
        .unwrap_or(current)
}

/// Next smaller step, or `current` when already at or below the smallest.
pub fn decrease_range(current: i64) -> i64 {
    RANGE_STEPS
        .iter()
        .rev()
        .copied()
        .find(|&step| current > step)
        .unwrap_or(current)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Move the end of the visible window by one full range.
pub fn shift_end(end_ms: i64, range_ms: i64, direction: Direction) -> i64 {
    match direction {
        Direction::Forward => end_ms.saturating_add(range_ms),
        Direction::Backward => end_ms.saturating_sub(range_ms),
    }
}

/// Absolute bounds plus the relative expressions they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from_ms: i64,
    pub to_ms: i64,
    pub raw_from: String,
    pub raw_to: String,
}

/// The last six hours, ending at `now_ms`.
pub fn default_time_range(now_ms: i64) -> TimeRange {
    TimeRange {
        from_ms: now_ms - DEFAULT_LOOKBACK_MS,
        to_ms: now_ms,
        raw_from: format!("now-{}", format_duration(DEFAULT_LOOKBACK_MS)),
        raw_to: "now".to_string(),
    }
}
