use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::interval::round_interval;

/// Lower bound on the query step used by the metrics charts.
pub const DEFAULT_MIN_STEP_MS: i64 = 5_000;

/// Horizontal pixels per desired sample.
pub const PIXELS_PER_SAMPLE: f64 = 100.0;

/// Number of samples wanted for a chart `width_px` pixels wide.
pub fn samples_for_width(width_px: f64) -> f64 {
    width_px / PIXELS_PER_SAMPLE
}

/// Errors returned by `QueryWindow::compute` for unusable requests.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowError {
    /// The visible range was zero or negative.
    EmptyRange(i64),
    /// The sample count was zero, negative or not finite.
    InvalidSampleCount(f64),
    /// The aligned boundaries do not fit in a millisecond timestamp.
    OutOfRange(i64),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::EmptyRange(range) => {
                write!(f, "Visible range must be positive, got {range}ms")
            }
            WindowError::InvalidSampleCount(samples) => {
                write!(f, "Sample count must be a positive number, got {samples}")
            }
            WindowError::OutOfRange(end) => {
                write!(f, "Query window ending at {end}ms is out of range")
            }
        }
    }
}

impl std::error::Error for WindowError {}

/// What a chart wants to display: a range ending at `end_ms`, drawn with
/// roughly `samples` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRequest {
    pub end_ms: i64,
    pub range_ms: i64,
    pub samples: f64,
    pub min_step_ms: i64,
}

impl WindowRequest {
    /// Request sized for a chart of the given pixel width, using the default minimum step.
    pub fn for_width(end_ms: i64, range_ms: i64, width_px: f64) -> Self {
        Self {
            end_ms,
            range_ms,
            samples: samples_for_width(width_px),
            min_step_ms: DEFAULT_MIN_STEP_MS,
        }
    }
}

/// Step-aligned query boundaries, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryWindow {
    pub start_ms: i64,
    pub end_ms: i64,
    pub step_ms: i64,
}

/// Range query parameters in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryParams {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl QueryWindow {
    /// Pick a step for the request and floor-align the end time to it.
    ///
    /// The step is `round_interval(range / samples)`, raised to
    /// `min_step_ms`. The aligned end is `floor(end / step) * step` and the
    /// start lies exactly one range before it.
    pub fn compute(request: &WindowRequest) -> Result<Self, WindowError> {
        if request.range_ms <= 0 {
            return Err(WindowError::EmptyRange(request.range_ms));
        }
        if !request.samples.is_finite() || request.samples <= 0.0 {
            return Err(WindowError::InvalidSampleCount(request.samples));
        }

        let raw = request.range_ms as f64 / request.samples;
        let step = round_interval(raw).max(request.min_step_ms);
        let end_ms = request
            .end_ms
            .div_euclid(step)
            .checked_mul(step)
            .ok_or(WindowError::OutOfRange(request.end_ms))?;
        let start_ms = end_ms
            .checked_sub(request.range_ms)
            .ok_or(WindowError::OutOfRange(request.end_ms))?;

        trace!(raw, step, start_ms, end_ms, "computed query window");

        Ok(Self {
            start_ms,
            end_ms,
            step_ms: step,
        })
    }

    pub fn range_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Number of whole steps between start and end.
    pub fn point_count(&self) -> i64 {
        self.range_ms() / self.step_ms
    }

    /// Rate window for range-vector selectors, e.g. `[300000ms]`.
    pub fn range_selector(&self) -> String {
        format!("[{}ms]", self.step_ms)
    }

    pub fn to_query_params(&self) -> QueryParams {
        QueryParams {
            start: self.start_ms as f64 / 1000.0,
            end: self.end_ms as f64 / 1000.0,
            step: self.step_ms as f64 / 1000.0,
        }
    }
}
