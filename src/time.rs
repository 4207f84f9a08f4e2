use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::fmt;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TIME_FORMAT_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Errors converting between epoch milliseconds and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The millisecond value is outside the representable date range.
    OutOfRange(i64),
    /// The text is neither RFC 3339 nor `YYYY-MM-DDTHH:mm[:ss]`.
    Unparsable(String),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::OutOfRange(ms) => write!(f, "Timestamp out of range: {ms}ms"),
            TimeError::Unparsable(text) => write!(f, "Unrecognized timestamp: {text}"),
        }
    }
}

impl std::error::Error for TimeError {}

pub(crate) fn to_datetime(ms: i64) -> Result<DateTime<Utc>, TimeError> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or(TimeError::OutOfRange(ms))
}

/// UTC timestamp as `YYYY-MM-DDTHH:mm:ss`.
pub fn format_time(ms: i64) -> Result<String, TimeError> {
    Ok(to_datetime(ms)?.format(TIME_FORMAT).to_string())
}

/// UTC timestamp as `YYYY-MM-DDTHH:mm`.
pub fn format_time_no_seconds(ms: i64) -> Result<String, TimeError> {
    Ok(to_datetime(ms)?.format(TIME_FORMAT_NO_SECONDS).to_string())
}

/// Parse an RFC 3339 timestamp, or a zone-less `format_time` /
/// `format_time_no_seconds` string taken as UTC, into epoch milliseconds.
pub fn parse_time(text: &str) -> Result<i64, TimeError> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp_millis());
    }

    [TIME_FORMAT, TIME_FORMAT_NO_SECONDS]
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .map(|naive| Utc.from_utc_datetime(&naive).timestamp_millis())
        .ok_or_else(|| TimeError::Unparsable(text.to_string()))
}
