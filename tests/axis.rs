// Integration tests for axis label selection and UTC timestamp helpers.

use stepwise::axis::{tick_count, AxisTimeFormat};
use stepwise::time::{format_time, format_time_no_seconds, parse_time, TimeError};

// 2020-09-13T12:26:40Z
const T0: i64 = 1_600_000_000_000;
const DAY: i64 = 86_400_000;

#[test]
fn tick_count_from_width() {
    assert_eq!(tick_count(None), 2.0);
    assert_eq!(tick_count(Some(0.0)), 2.0);
    assert_eq!(tick_count(Some(1000.0)), 10.0);
    assert_eq!(tick_count(Some(250.0)), 2.5);
}

#[test]
fn axis_format_grows_with_seconds_per_tick() {
    let select = |ticks: f64, range: i64| AxisTimeFormat::select(ticks, T0, T0 + range);

    assert_eq!(select(10.0, 300_000), AxisTimeFormat::HourMinuteSecond);
    assert_eq!(select(10.0, 6 * 3_600_000), AxisTimeFormat::HourMinute);
    // 86_400 seconds per tick, but still within a day.
    assert_eq!(select(1.0, DAY), AxisTimeFormat::HourMinute);
    assert_eq!(select(10.0, 7 * DAY), AxisTimeFormat::MonthDayTime);
    assert_eq!(select(10.0, 56 * DAY), AxisTimeFormat::MonthDay);
    assert_eq!(select(1.0, 365 * DAY), AxisTimeFormat::MonthDay);
    assert_eq!(select(10.0, 730 * DAY), AxisTimeFormat::YearMonth);
    assert_eq!(select(1.0, 730 * DAY), AxisTimeFormat::Year);
}

#[test]
fn axis_format_defaults_without_bounds() {
    assert_eq!(AxisTimeFormat::select(0.0, T0, T0 + DAY), AxisTimeFormat::HourMinute);
    assert_eq!(AxisTimeFormat::select(10.0, 0, T0), AxisTimeFormat::HourMinute);
    assert_eq!(AxisTimeFormat::select(10.0, T0, 0), AxisTimeFormat::HourMinute);
}

#[test]
fn axis_format_with_extreme_bounds() {
    assert_eq!(AxisTimeFormat::select(10.0, i64::MIN, i64::MAX), AxisTimeFormat::Year);
    assert_eq!(
        AxisTimeFormat::select(10.0, i64::MAX, i64::MIN),
        AxisTimeFormat::HourMinuteSecond
    );
}

#[test]
fn axis_format_serializes_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&AxisTimeFormat::MonthDayTime).unwrap(),
        "\"month_day_time\""
    );
    assert_eq!(serde_json::to_string(&AxisTimeFormat::Year).unwrap(), "\"year\"");
}

#[test]
fn axis_labels_in_utc() {
    assert_eq!(AxisTimeFormat::HourMinuteSecond.format_label(T0).unwrap(), "12:26:40");
    assert_eq!(AxisTimeFormat::HourMinute.format_label(T0).unwrap(), "12:26");
    assert_eq!(AxisTimeFormat::MonthDayTime.format_label(T0).unwrap(), "09/13 12:26");
    assert_eq!(AxisTimeFormat::MonthDay.format_label(T0).unwrap(), "09/13");
    assert_eq!(AxisTimeFormat::YearMonth.format_label(T0).unwrap(), "2020-09");
    assert_eq!(AxisTimeFormat::Year.format_label(T0).unwrap(), "2020");
    assert_eq!(AxisTimeFormat::MonthDayTime.pattern(), "MM/DD HH:mm");
}

#[test]
fn timestamps_format_and_parse() {
    assert_eq!(format_time(T0).unwrap(), "2020-09-13T12:26:40");
    assert_eq!(format_time_no_seconds(T0).unwrap(), "2020-09-13T12:26");
    assert_eq!(format_time(i64::MAX), Err(TimeError::OutOfRange(i64::MAX)));

    assert_eq!(parse_time("2020-09-13T12:26:40").unwrap(), T0);
    assert_eq!(parse_time("2020-09-13T12:26:40Z").unwrap(), T0);
    assert_eq!(parse_time("2020-09-13T14:26:40+02:00").unwrap(), T0);
    assert_eq!(parse_time("2020-09-13T12:26").unwrap(), T0 - 40_000);
    assert_eq!(
        parse_time("yesterday"),
        Err(TimeError::Unparsable("yesterday".to_string()))
    );
}
