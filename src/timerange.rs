//! Relative time-range parsing
//!
//! Converts the compact SignalFx syntax (`-5m`, `-1h`, `-2d`, `-1w`) into a
//! millisecond duration.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SyncError;

// Unit is any single non-digit character; unknown units fall through to the
// milliseconds multiplier below.
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-(\d+)(\D)$").expect("valid pattern"));

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// Convert a relative time range to milliseconds.
///
/// `-5m` is five minutes, `-1w` one week. An unrecognized unit character
/// multiplies by 1, treating the magnitude as already being milliseconds;
/// this mirrors what the SignalFx API tolerates and is kept for
/// compatibility with existing configurations. Anything not of the form
/// `-<integer><unit>` is an error.
pub fn to_milliseconds(time_range: &str) -> Result<i64, SyncError> {
    let caps = RANGE_RE
        .captures(time_range)
        .ok_or_else(|| SyncError::InvalidTimeRange {
            input: time_range.to_string(),
        })?;

    let magnitude: i64 = caps[1]
        .parse()
        .map_err(|source| SyncError::TimeRangeMagnitude {
            input: time_range.to_string(),
            source,
        })?;

    let multiplier = match &caps[2] {
        "m" => MILLIS_PER_MINUTE,
        "h" => MILLIS_PER_HOUR,
        "d" => MILLIS_PER_DAY,
        "w" => MILLIS_PER_WEEK,
        _ => 1,
    };

    magnitude
        .checked_mul(multiplier)
        .ok_or_else(|| SyncError::TimeRangeOverflow {
            input: time_range.to_string(),
        })
}
