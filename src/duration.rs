use std::fmt;

pub const MILLIS_PER_SECOND: i64 = 1000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;
/// Calendar-naive year of 365 days.
pub const MILLIS_PER_YEAR: i64 = 365 * MILLIS_PER_DAY;

/// Duration units in the only order they may appear in a duration string.
/// The flag marks units that are only emitted when they divide the value exactly.
const UNITS: [(&str, i64, bool); 7] = [
    ("y", MILLIS_PER_YEAR, true),
    ("w", MILLIS_PER_WEEK, true),
    ("d", MILLIS_PER_DAY, false),
    ("h", MILLIS_PER_HOUR, false),
    ("m", MILLIS_PER_MINUTE, false),
    ("s", MILLIS_PER_SECOND, false),
    ("ms", 1, false),
];

/// Reasons a duration string is rejected by `try_parse_duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    /// The string was empty, meaning no duration was given.
    Empty,
    /// A unit appeared without a preceding number (e.g., `h`).
    MissingNumber,
    /// A number appeared without a trailing unit (e.g., `15`).
    MissingUnit,
    /// The unit was not recognized (e.g., `1x`).
    UnsupportedUnit(String),
    /// The unit appeared after a smaller or identical unit (e.g., `1m1h`).
    OutOfOrder(String),
    /// The total does not fit in a signed 64-bit millisecond count.
    Overflow,
}

impl fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDurationError::Empty => write!(f, "Duration string is empty"),
            ParseDurationError::MissingNumber => write!(f, "Missing number in duration"),
            ParseDurationError::MissingUnit => write!(f, "Missing unit in duration"),
            ParseDurationError::UnsupportedUnit(unit) => {
                write!(f, "Unsupported duration unit: {unit}")
            }
            ParseDurationError::OutOfOrder(unit) => {
                write!(f, "Duration unit out of order: {unit} (expected y, w, d, h, m, s, ms)")
            }
            ParseDurationError::Overflow => write!(f, "Duration is too large"),
        }
    }
}

impl std::error::Error for ParseDurationError {}

/// Parse a compact duration such as `"1h30m"` into milliseconds.
///
/// Returns `None` for the empty string ("not specified") and for anything
/// that does not follow the `<n>y<n>w<n>d<n>h<n>m<n>s<n>ms` grammar.
/// The literal `"0"` is accepted without a unit.
pub fn parse_duration(input: &str) -> Option<i64> {
    try_parse_duration(input).ok()
}

/// Same grammar as `parse_duration`, but reports why the input was rejected.
///
/// Units must appear at most once each and in descending order; no
/// whitespace, signs or separators are allowed.
pub fn try_parse_duration(input: &str) -> Result<i64, ParseDurationError> {
    if input.is_empty() {
        return Err(ParseDurationError::Empty);
    }
    if input == "0" {
        return Ok(0);
    }

    let bytes = input.as_bytes();
    let mut pos = 0;
    let mut next_rank = 0;
    let mut total: i64 = 0;

    while pos < bytes.len() {
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            return Err(ParseDurationError::MissingNumber);
        }
        let digits = &input[digits_start..pos];

        let unit_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == unit_start {
            return Err(ParseDurationError::MissingUnit);
        }
        let unit = &input[unit_start..pos];

        let rank = UNITS
            .iter()
            .position(|(name, _, _)| *name == unit)
            .ok_or_else(|| ParseDurationError::UnsupportedUnit(unit.to_string()))?;
        if rank < next_rank {
            return Err(ParseDurationError::OutOfOrder(unit.to_string()));
        }
        next_rank = rank + 1;

        // Only ASCII digits reach here, so the sole parse failure is overflow.
        let count: i64 = digits.parse().map_err(|_| ParseDurationError::Overflow)?;
        total = count
            .checked_mul(UNITS[rank].1)
            .and_then(|ms| total.checked_add(ms))
            .ok_or(ParseDurationError::Overflow)?;
    }

    Ok(total)
}

/// Render milliseconds in the compact form accepted by `parse_duration`.
///
/// Years and weeks are only used when they divide the value exactly, so
/// 90 days renders as `90d` rather than `12w6d`. Negative values are
/// rendered as their magnitude with a leading `-`.
pub fn format_duration(ms: i64) -> String {
    if ms == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if ms < 0 {
        out.push('-');
    }

    let mut rest = ms.unsigned_abs();
    for (unit, mult, exact) in UNITS {
        let mult = mult as u64;
        if exact && rest % mult != 0 {
            continue;
        }
        let count = rest / mult;
        if count > 0 {
            out.push_str(&format!("{count}{unit}"));
            rest -= count * mult;
        }
    }

    out
}

/// Render milliseconds for display, e.g. `"1d 2h 3m 4s"` or `"1.250s"`.
///
/// Days are the total number of whole days; hours, minutes and seconds are
/// the within-day, within-hour and within-minute components. Only the
/// coarsest non-zero unit and those below it are shown. The output is not
/// meant to be parsed back.
pub fn humanize_duration(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let magnitude = ms.unsigned_abs();

    let millis = magnitude % MILLIS_PER_SECOND as u64;
    let seconds = magnitude / MILLIS_PER_SECOND as u64 % 60;
    let minutes = magnitude / MILLIS_PER_MINUTE as u64 % 60;
    let hours = magnitude / MILLIS_PER_HOUR as u64 % 24;
    let days = magnitude / MILLIS_PER_DAY as u64;

    if days != 0 {
        format!("{sign}{days}d {hours}h {minutes}m {seconds}s")
    } else if hours != 0 {
        format!("{sign}{hours}h {minutes}m {seconds}s")
    } else if minutes != 0 {
        format!("{sign}{minutes}m {seconds}s")
    } else if seconds != 0 && millis == 0 {
        format!("{sign}{seconds}s")
    } else if seconds != 0 {
        format!("{sign}{seconds}.{millis:03}s")
    } else if magnitude > 0 {
        format!("{sign}{:.3}ms", magnitude as f64)
    } else {
        "0s".to_string()
    }
}
