//! Timestamp parsing for the backend JSON contract.
//!
//! The backend mixes several timestamp dialects: Timewarrior exports use a
//! compact UTC form, JIRA worklogs carry a `-0400` style offset, and the
//! interval and time editor endpoints return naive local or naive UTC
//! strings. Everything is normalized to `DateTime<FixedOffset>` so that
//! differences between instants are exact, and naive strings are
//! interpreted in an offset chosen explicitly by the caller.
//!
//! ## Accepted forms
//!
//! | Example                         | Interpretation               |
//! |---------------------------------|------------------------------|
//! | `2025-08-06T15:16:30Z`          | RFC 3339                     |
//! | `2025-08-06T15:16:30.000-0400`  | JIRA style offset            |
//! | `20250806T151630Z`              | Timewarrior export, UTC      |
//! | `2025-08-06T15:16:30`           | naive, in the assumed offset |
//! | `2025-08-06 15:16:30`           | naive, in the assumed offset |

use super::error::InputError;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const TIMEWARRIOR_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Returns the offset of the machine's local timezone at this moment.
pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Parses one timestamp, interpreting naive values in `assume`.
///
/// # Errors
///
/// Returns [`InputError::InvalidTimestamp`] (with index 0) if none of the
/// accepted forms match.
///
/// # Examples
///
/// ```rust
/// use chrono::FixedOffset;
/// use timegrid::libs::timestamp::parse_timestamp;
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let a = parse_timestamp("20250806T151630Z", &utc).unwrap();
/// let b = parse_timestamp("2025-08-06T11:16:30.000-0400", &utc).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_timestamp(text: &str, assume: &FixedOffset) -> Result<DateTime<FixedOffset>, InputError> {
    let text = text.trim();
    if let Some(parsed) = parse_with_offset(text) {
        return Ok(parsed);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, TIMEWARRIOR_FORMAT) {
        return Ok(Utc.from_utc_datetime(&naive).fixed_offset());
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return assume
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| invalid(text));
        }
    }
    // Some worklogs come back with a UTC suffix glued onto an existing offset.
    if let Some(stripped) = text.strip_suffix("+00:00") {
        if let Some(parsed) = parse_with_offset(stripped) {
            return Ok(parsed);
        }
    }
    Err(invalid(text))
}

/// Parses a naive timestamp that the backend stores in UTC.
///
/// The time editor endpoint returns `timestamp` and `end_time` without a
/// zone even though they are UTC, so the assumed offset is fixed to zero.
pub fn parse_utc_timestamp(text: &str) -> Result<DateTime<FixedOffset>, InputError> {
    parse_timestamp(text, &Utc.fix())
}

fn parse_with_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed);
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
}

fn invalid(text: &str) -> InputError {
    InputError::InvalidTimestamp {
        index: 0,
        value: text.to_string(),
    }
}
