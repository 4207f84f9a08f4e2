//! Snapping a raw per-sample interval to a "nice" query step.

/// `(threshold_ms, step_ms)` pairs: a raw interval strictly below
/// `threshold_ms` resolves to `step_ms`. Both columns strictly increase.
pub const INTERVAL_TABLE: &[(i64, i64)] = &[
    (15, 10),
    (35, 20),
    (75, 50),
    (150, 100),
    (350, 200),
    (750, 500),
    (1_500, 1_000),
    (3_500, 2_000),
    (7_500, 5_000),
    (12_500, 10_000),
    (17_500, 15_000),
    (25_000, 20_000),
    (45_000, 30_000),
    (90_000, 60_000),
    (210_000, 120_000),
    (450_000, 300_000),
    (750_000, 600_000),
    (1_050_000, 900_000),
    (1_500_000, 1_200_000),
    (2_700_000, 1_800_000),
    (5_400_000, 3_600_000),
    (9_000_000, 7_200_000),
    (16_200_000, 10_800_000),
    (32_400_000, 21_600_000),
    (86_400_000, 43_200_000),
    (604_800_000, 86_400_000),
    (1_814_400_000, 604_800_000),
    (3_628_800_000, 2_592_000_000),
];

/// Step used once the raw interval reaches the last threshold (one year).
pub const LARGEST_STEP: i64 = 31_536_000_000;

/// Step used for NaN input.
pub const SMALLEST_STEP: i64 = 10;

/// Return the nice step for a raw interval in milliseconds.
///
/// The raw interval is normally `visible_range_ms / desired_samples`.
/// Negative input resolves to the smallest step and `+inf` to the largest.
pub fn round_interval(raw_interval_ms: f64) -> i64 {
    if raw_interval_ms.is_nan() {
        return SMALLEST_STEP;
    }

    INTERVAL_TABLE
        .iter()
        .find(|(threshold, _)| raw_interval_ms < *threshold as f64)
        .map_or(LARGEST_STEP, |(_, step)| *step)
}
