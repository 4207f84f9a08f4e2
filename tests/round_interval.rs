// Integration tests for nice-step selection.

use stepwise::interval::{round_interval, INTERVAL_TABLE, LARGEST_STEP, SMALLEST_STEP};

#[test]
fn round_interval_boundaries() {
    assert_eq!(round_interval(14.0), 10);
    assert_eq!(round_interval(15.0), 20);
    assert_eq!(round_interval(3_628_800_000.0), 2_592_000_000);
    assert_eq!(round_interval(3_628_800_001.0), 31_536_000_000);
    assert_eq!(round_interval(180_000.0), 120_000);
    assert_eq!(round_interval(300_000.0), 300_000);
}

#[test]
fn round_interval_every_threshold_is_exclusive() {
    for (i, &(threshold, step)) in INTERVAL_TABLE.iter().enumerate() {
        let next = INTERVAL_TABLE.get(i + 1).map_or(LARGEST_STEP, |&(_, s)| s);
        assert_eq!(round_interval((threshold - 1) as f64), step, "below {threshold}");
        assert_eq!(round_interval(threshold as f64 - 0.5), step, "below {threshold}");
        assert_eq!(round_interval(threshold as f64), next, "at {threshold}");
    }
}

#[test]
fn round_interval_table_is_strictly_increasing() {
    for pair in INTERVAL_TABLE.windows(2) {
        assert!(pair[0].0 < pair[1].0);
        assert!(pair[0].1 < pair[1].1);
    }
    assert!(INTERVAL_TABLE.last().unwrap().1 < LARGEST_STEP);
}

#[test]
fn round_interval_is_monotonic() {
    let mut raw = 0.0_f64;
    let mut last = round_interval(raw);
    while raw < 5_000_000_000.0 {
        raw = raw * 1.07 + 1.0;
        let step = round_interval(raw);
        assert!(step >= last, "round_interval({raw}) = {step} < {last}");
        last = step;
    }
    assert_eq!(last, LARGEST_STEP);
}

#[test]
fn round_interval_out_of_domain_input() {
    assert_eq!(round_interval(0.0), SMALLEST_STEP);
    assert_eq!(round_interval(-5.0), SMALLEST_STEP);
    assert_eq!(round_interval(f64::NEG_INFINITY), SMALLEST_STEP);
    assert_eq!(round_interval(f64::NAN), SMALLEST_STEP);
    assert_eq!(round_interval(f64::INFINITY), LARGEST_STEP);
}
