//! Duration formatting utilities for user-friendly display.
//!
//! Two formats are in use across the dashboard:
//!
//! - **Compact** ([`format_duration`]): the time editor style, picking the
//!   two most significant units and rounding the last one. `45s`, `2m`,
//!   `1h 1m`, `3d 4h`.
//! - **Hours** ([`format_hours`]): the time sync style used for worklogs and
//!   ticket totals, always `{h}h {m}m` with both parts floored.
//!
//! ## Format Specifications
//!
//! [`format_duration`] works on the absolute value of the duration. The sign
//! is the caller's concern: a negative span usually means a manually edited
//! entry ends before it starts, which is a data-quality signal rather than a
//! reason to fail.
//!
//! | Magnitude     | Output        | Rounding                               |
//! |---------------|---------------|----------------------------------------|
//! | < 60s         | `{s}s`        | nearest second                         |
//! | < 1h          | `{m}m`        | nearest minute                         |
//! | < 1d          | `{h}h {m}m`   | hours floored, minutes rounded         |
//! | otherwise     | `{d}d {h}h`   | both floored                           |
//!
//! Zero minutes or zero hours in the last position are omitted.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Duration;
//! use timegrid::libs::formatter::{format_duration, format_hours};
//!
//! assert_eq!(format_duration(&Duration::seconds(3660)), "1h 1m");
//! assert_eq!(format_duration(&Duration::seconds(-90)), "2m");
//! assert_eq!(format_hours(5400), "1h 30m");
//! ```

use super::interval::{Interval, TimeEntry};
use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86400.0;

/// Literal shown for an interval with no end and nothing after it.
pub const ONGOING: &str = "ongoing";

/// Represents a formatted interval for display purposes.
///
/// All values are pre-formatted strings, suitable for table rendering and
/// JSON output of the `timeline` and `sync` commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedInterval {
    /// Sequential number in the displayed list, starting from 1.
    pub id: usize,
    /// Formatted start, `%b %-d %H:%M` in the display offset.
    pub start: String,
    /// Formatted end, or `-` when the interval has no explicit end.
    pub end: String,
    /// Compact duration or `ongoing`.
    pub duration: String,
    pub label: String,
}

/// Formats a duration into the compact time editor form.
///
/// # Examples
///
/// ```rust
/// use chrono::Duration;
/// use timegrid::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(&Duration::seconds(45)), "45s");
/// assert_eq!(format_duration(&Duration::seconds(90)), "2m");
/// assert_eq!(format_duration(&Duration::seconds(90000)), "1d 1h");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let seconds = (duration.num_milliseconds() as f64 / 1000.0).abs();

    if seconds < MINUTE {
        format!("{}s", seconds.round())
    } else if seconds < HOUR {
        format!("{}m", (seconds / MINUTE).round())
    } else if seconds < DAY {
        let hours = (seconds / HOUR).floor();
        let minutes = ((seconds % HOUR) / MINUTE).round();
        if minutes > 0.0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    } else {
        let days = (seconds / DAY).floor();
        let hours = ((seconds % DAY) / HOUR).floor();
        if hours > 0.0 {
            format!("{}d {}h", days, hours)
        } else {
            format!("{}d", days)
        }
    }
}

/// Formats whole seconds as `{h}h {m}m`, flooring both parts.
///
/// Used for worklog durations and ticket totals. Negative input is clamped
/// to zero.
pub fn format_hours(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Computes the elapsed time of an interval, if it can be known.
///
/// The explicit end wins; otherwise the next interval's start closes this
/// one. With neither, the interval is still running and `None` is returned.
pub fn elapsed(interval: &Interval, next: Option<&Interval>) -> Option<Duration> {
    match (interval.end, next) {
        (Some(end), _) => Some(end.signed_duration_since(interval.start)),
        (None, Some(next)) => Some(next.start.signed_duration_since(interval.start)),
        (None, None) => None,
    }
}

/// Computes and formats the duration shown for an interval.
///
/// Returns `"ongoing"` when the interval has no end and no successor.
pub fn compute_duration(interval: &Interval, next: Option<&Interval>) -> String {
    match elapsed(interval, next) {
        Some(duration) => format_duration(&duration),
        None => ONGOING.to_string(),
    }
}

/// Formats an instant as `Jun 2 09:30` in the display offset.
pub fn format_instant(instant: &DateTime<FixedOffset>, offset: &FixedOffset) -> String {
    instant.with_timezone(offset).format("%b %-d %H:%M").to_string()
}

/// Builds the time editor rows for entries ordered by start.
///
/// An entry without an end runs until the next entry starts; the last open
/// entry is ongoing.
pub fn format_timeline(entries: &[TimeEntry], offset: &FixedOffset) -> Vec<FormattedInterval> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let next = entries.get(index + 1).map(|next| &next.interval);
            FormattedInterval {
                id: index + 1,
                start: format_instant(&entry.interval.start, offset),
                end: entry
                    .interval
                    .end
                    .map(|end| format_instant(&end, offset))
                    .unwrap_or_else(|| "-".to_string()),
                duration: compute_duration(&entry.interval, next),
                label: entry.task.clone(),
            }
        })
        .collect()
}
