//! Duration strings and metrics query resolution for time-series dashboards.
//!
//! A chart picks a visible range and a pixel width; `round_interval` turns
//! `range / samples` into a nice step, and `QueryWindow` aligns the query
//! boundaries to that step.

pub mod axis;
pub mod duration;
pub mod interval;
pub mod range;
pub mod time;
pub mod window;

pub use duration::{
    format_duration, humanize_duration, parse_duration, try_parse_duration, ParseDurationError,
};
pub use interval::round_interval;
pub use window::{QueryWindow, WindowError, WindowRequest};
