//! Sunday-aligned calendar grid construction.
//!
//! The dashboard draws every daily series (switch counts, tracked hours,
//! ActivityWatch hours) as a grid of weeks × 7 days, Sunday first. This
//! module maps a list of day records onto that grid, padding the first and
//! last week with out-of-range cells.
//!
//! ## Date Policy
//!
//! Dates are `chrono::NaiveDate` values from parsing to rendering. No step
//! goes through an instant or a timezone, so a record's calendar day is the
//! day written in the JSON and "today" is whatever date the caller passes.
//! The command layer passes the viewer's local date.
//!
//! ## Grid Layout
//!
//! ```text
//!   Sun  Mon  Tue  Wed  Thu  Fri  Sat
//!   ...  ...  [1]  [2]  [3]  [4]  [5]     offset = 2 padding cells
//!   [6]  [7]  [8]  ...                    then one cell per day
//!   ...  [30] ...  ...  ...  ...  ...     padded to a full week
//! ```

use super::error::InputError;
use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Period requested from the backend.
///
/// Passed explicitly to every query and render call instead of living in a
/// shared toggle.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Daily series shown in a calendar grid.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Task switches per day.
    #[default]
    Switches,
    /// Timewarrior hours per day.
    Hours,
    /// ActivityWatch active hours per day.
    Activity,
}

impl Metric {
    /// Whether values are hours, which adds the weekly column and monthly stats.
    pub fn is_hours(&self) -> bool {
        !matches!(self, Metric::Switches)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Switches => "Task switches",
            Metric::Hours => "Tracked hours",
            Metric::Activity => "Active hours",
        }
    }

    /// Formats a cell value: integer counts, hours with one decimal.
    pub fn format_value(&self, value: f64) -> String {
        if self.is_hours() {
            format!("{:.1}h", value)
        } else {
            format!("{}", value.round() as i64)
        }
    }
}

/// Day record as returned by the metrics endpoints.
///
/// Switch counts arrive as `count`, tracked hours as `hours`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayRecordRaw {
    pub date: String,
    #[serde(alias = "count", alias = "hours", default)]
    pub value: f64,
}

/// One calendar day and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub value: f64,
}

/// One day's slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub value: f64,
    /// `true` when backed by a day record, `false` for padding.
    pub in_range: bool,
    pub day_of_month: u32,
    pub is_today: bool,
}

impl DayRecord {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Validates a batch of wire records.
    ///
    /// # Errors
    ///
    /// The whole batch is rejected on the first date that is not a valid
    /// `YYYY-MM-DD` calendar date, or the first negative or non-finite
    /// value.
    pub fn parse_batch(raw: &[DayRecordRaw]) -> Result<Vec<Self>, InputError> {
        raw.iter()
            .enumerate()
            .map(|(index, record)| {
                let date = NaiveDate::parse_from_str(record.date.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
                    index,
                    value: record.date.clone(),
                })?;
                if !record.value.is_finite() || record.value < 0.0 {
                    return Err(InputError::InvalidValue {
                        index,
                        date: record.date.clone(),
                        value: record.value,
                    });
                }
                Ok(Self { date, value: record.value })
            })
            .collect()
    }
}

/// Returns the number of days between Sunday and `date` (0 = Sunday).
pub fn sunday_offset(date: NaiveDate) -> i64 {
    date.weekday().num_days_from_sunday() as i64
}

/// Maps ascending day records onto a Sunday-aligned grid.
///
/// Empty input produces an empty grid. Gaps inside the range are allowed and
/// show up as padding cells.
///
/// # Errors
///
/// Returns [`InputError::OutOfOrder`] if a date does not strictly follow
/// the previous one.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use timegrid::libs::calendar::{bucket_to_grid, DayRecord};
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
/// let cells = bucket_to_grid(&[DayRecord::new(sunday, 3.0)], sunday).unwrap();
/// assert_eq!(cells.len(), 7);
/// assert!(cells[0].in_range && cells[0].is_today);
/// assert!(cells[1..].iter().all(|cell| !cell.in_range && cell.value == 0.0));
/// ```
pub fn bucket_to_grid(days: &[DayRecord], today: NaiveDate) -> Result<Vec<GridCell>, InputError> {
    let (first, last) = match (days.first(), days.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return Ok(Vec::new()),
    };

    for (index, pair) in days.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(InputError::OutOfOrder {
                index: index + 1,
                date: pair[1].date.to_string(),
                previous: pair[0].date.to_string(),
            });
        }
    }

    let offset = sunday_offset(first);
    let spanned = (last - first).num_days() + 1;
    let num_weeks = (spanned + offset + 6) / 7;
    let grid_start = first - Duration::days(offset);

    let by_date: HashMap<NaiveDate, f64> = days.iter().map(|day| (day.date, day.value)).collect();

    let cells = (0..num_weeks * 7)
        .map(|i| {
            let date = grid_start + Duration::days(i);
            let value = by_date.get(&date).copied();
            GridCell {
                date,
                value: value.unwrap_or(0.0),
                in_range: value.is_some(),
                day_of_month: date.day(),
                is_today: date == today,
            }
        })
        .collect();

    Ok(cells)
}

/// Row label shown to the left of a grid week.
///
/// This is the week-of-month of the row's Sunday, `ceil(day / 7)`, so a row
/// starting on the 29th of the previous month is labelled 5.
pub fn week_of_month(week_start: NaiveDate) -> u32 {
    week_start.day().div_ceil(7)
}

/// Splits a grid into its weeks.
pub trait GridWeeks {
    fn weeks(&self) -> std::slice::Chunks<'_, GridCell>;
}

impl GridWeeks for [GridCell] {
    fn weeks(&self) -> std::slice::Chunks<'_, GridCell> {
        self.chunks(7)
    }
}
