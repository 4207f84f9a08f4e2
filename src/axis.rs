//! Time-axis labelling for metrics charts.

use serde::Serialize;

use crate::time::{to_datetime, TimeError};
use crate::window::PIXELS_PER_SAMPLE;

/// A day plus a 10ms margin: a "last 24 hours" window can come out a few
/// milliseconds longer than 86_400_000.
pub const ONE_DAY_MS: i64 = 86_400_010;
pub const ONE_YEAR_MS: i64 = 31_536_000_000;

/// Tick count for a chart `width_px` wide; 2 when the width is unknown.
pub fn tick_count(width_px: Option<f64>) -> f64 {
    match width_px {
        Some(width) if width != 0.0 => width / PIXELS_PER_SAMPLE,
        _ => 2.0,
    }
}

/// Label layout for the time axis, coarser as the seconds per tick grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisTimeFormat {
    HourMinuteSecond,
    HourMinute,
    MonthDayTime,
    MonthDay,
    YearMonth,
    Year,
}

impl AxisTimeFormat {
    /// Pick the label layout for `ticks` ticks spread over `[min_ms, max_ms]`.
    pub fn select(ticks: f64, min_ms: i64, max_ms: i64) -> Self {
        if ticks == 0.0 || min_ms == 0 || max_ms == 0 {
            return AxisTimeFormat::HourMinute;
        }

        let range = max_ms.saturating_sub(min_ms);
        let sec_per_tick = range as f64 / ticks / 1000.0;

        if sec_per_tick <= 45.0 {
            AxisTimeFormat::HourMinuteSecond
        } else if sec_per_tick <= 7_200.0 || range <= ONE_DAY_MS {
            AxisTimeFormat::HourMinute
        } else if sec_per_tick <= 80_000.0 {
            AxisTimeFormat::MonthDayTime
        } else if sec_per_tick <= 2_419_200.0 || range <= ONE_YEAR_MS {
            AxisTimeFormat::MonthDay
        } else if sec_per_tick <= 31_536_000.0 {
            AxisTimeFormat::YearMonth
        } else {
            AxisTimeFormat::Year
        }
    }

    /// Display pattern, e.g. `MM/DD HH:mm`.
    pub fn pattern(&self) -> &'static str {
        match self {
            AxisTimeFormat::HourMinuteSecond => "HH:mm:ss",
            AxisTimeFormat::HourMinute => "HH:mm",
            AxisTimeFormat::MonthDayTime => "MM/DD HH:mm",
            AxisTimeFormat::MonthDay => "MM/DD",
            AxisTimeFormat::YearMonth => "YYYY-MM",
            AxisTimeFormat::Year => "YYYY",
        }
    }

    fn strftime(&self) -> &'static str {
        match self {
            AxisTimeFormat::HourMinuteSecond => "%H:%M:%S",
            AxisTimeFormat::HourMinute => "%H:%M",
            AxisTimeFormat::MonthDayTime => "%m/%d %H:%M",
            AxisTimeFormat::MonthDay => "%m/%d",
            AxisTimeFormat::YearMonth => "%Y-%m",
            AxisTimeFormat::Year => "%Y",
        }
    }

    /// Render a tick label for `timestamp_ms` in UTC.
    pub fn format_label(&self, timestamp_ms: i64) -> Result<String, TimeError> {
        Ok(to_datetime(timestamp_ms)?.format(self.strftime()).to_string())
    }
}
