// Expiry timestamp parsing
//
// The directory returns `endDateTime` in three observed textual forms:
// variable-precision fraction + "Z", fixed 6-digit fraction + "Z" (sometimes
// with excess digits), and whole seconds + "Z". Instead of a parse/fallback
// chain, the fraction is normalized once (truncated to nanosecond precision)
// and the result goes through a single parse.

use crate::error::CredError;
use crate::Result;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Split a raw value into its whole-seconds part and fractional nanoseconds.
///
/// Returns None when the value does not end in "Z" or carries a non-numeric
/// fraction. Fractional digits beyond nanosecond precision are truncated.
fn normalize(value: &str) -> Option<(&str, u32)> {
    let trimmed = value.strip_suffix('Z')?;

    match trimmed.split_once('.') {
        Some((seconds, fraction)) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let digits = &fraction[..fraction.len().min(9)];
            let nanos = digits.parse::<u32>().ok()? * 10u32.pow(9 - digits.len() as u32);
            Some((seconds, nanos))
        }
        None => Some((trimmed, 0)),
    }
}

/// Parse a directory `endDateTime` value into a UTC timestamp
///
/// An unparseable value is a fatal condition for the run: silently skipping
/// the record could hide an expiring credential.
pub fn parse_end_date_time(value: &str) -> Result<DateTime<Utc>> {
    let parse_error = || CredError::TimestampParse {
        value: value.to_string(),
    };

    let (seconds, nanos) = normalize(value).ok_or_else(parse_error)?;

    let naive = NaiveDateTime::parse_from_str(seconds, SECONDS_FORMAT)
        .map_err(|_| parse_error())?
        .with_nanosecond(nanos)
        .ok_or_else(parse_error)?;

    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}
