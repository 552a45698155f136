//! Heat levels and summary statistics for calendar grids.
//!
//! ## Heat Scale
//!
//! Cell shading uses threshold scales: the level of a value is the number of
//! thresholds it reaches, so with thresholds `[0, 1, 3]` a value of `0` is
//! level 1, `2` is level 2 and `3` or more is level 3.
//!
//! ## Weekly Totals
//!
//! The hours calendars add a column summarizing each grid row: the total, the
//! Monday–Friday total and the average per weekday.
//!
//! ## Monthly Stats
//!
//! In the month view of the hours calendars the month-to-date average is
//! compared against a daily goal, counting only weekdays.

use super::calendar::{DayRecord, GridCell, GridWeeks, Metric, ViewMode};
use super::config::CalendarConfig;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

const WEEKDAYS_PER_WEEK: f64 = 5.0;

/// Threshold scale mapping values to discrete shading levels.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatScale {
    thresholds: Vec<f64>,
}

impl HeatScale {
    /// Thresholds must be ascending.
    pub fn new(thresholds: Vec<f64>) -> Self {
        Self { thresholds }
    }

    /// Scale for daily switch counts.
    pub fn switch_counts() -> Self {
        Self::new(vec![0.0, 1.0, 3.0, 5.0, 10.0])
    }

    /// Scale for daily tracked hours.
    pub fn daily_hours() -> Self {
        Self::new(vec![0.0, 1.0, 3.0, 5.0, 6.5, 7.0])
    }

    /// Scale for the weekly total column.
    pub fn weekly_hours() -> Self {
        Self::new(vec![0.0, 10.0, 20.0, 30.0, 40.0])
    }

    /// Scale used for the daily cells of `metric`.
    pub fn for_metric(metric: Metric) -> Self {
        if metric.is_hours() {
            Self::daily_hours()
        } else {
            Self::switch_counts()
        }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of thresholds less than or equal to `value`.
    pub fn level(&self, value: f64) -> usize {
        self.thresholds.partition_point(|threshold| *threshold <= value)
    }

    /// Highest level this scale produces.
    pub fn max_level(&self) -> usize {
        self.thresholds.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekLoad {
    Light,
    Normal,
    Busy,
    Heavy,
}

impl WeekLoad {
    pub fn from_total(total: f64) -> Self {
        if total >= 40.0 {
            WeekLoad::Heavy
        } else if total >= 30.0 {
            WeekLoad::Busy
        } else if total >= 20.0 {
            WeekLoad::Normal
        } else {
            WeekLoad::Light
        }
    }
}

impl fmt::Display for WeekLoad {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            WeekLoad::Light => "Light week",
            WeekLoad::Normal => "Normal week",
            WeekLoad::Busy => "Busy week",
            WeekLoad::Heavy => "Heavy week",
        };
        write!(f, "{}", label)
    }
}

/// Summary of one grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTotal {
    /// Zero-based row index.
    pub week: usize,
    /// Sum of all seven cells, rounded to one decimal.
    pub total: f64,
    /// Sum of Monday to Friday, rounded to one decimal.
    pub weekdays_total: f64,
    pub average_per_weekday: f64,
    pub load: WeekLoad,
}

/// Computes the weekly column for a grid.
///
/// The per-weekday average falls back to `total / 5` for rows whose
/// weekdays are all zero, so weekend-only work still shows up.
pub fn weekly_totals(cells: &[GridCell]) -> Vec<WeekTotal> {
    cells
        .weeks()
        .enumerate()
        .map(|(week, days)| {
            let total: f64 = days.iter().map(|cell| cell.value).sum();
            let weekdays_total: f64 = days
                .iter()
                .filter(|cell| !matches!(cell.date.weekday(), Weekday::Sat | Weekday::Sun))
                .map(|cell| cell.value)
                .sum();
            let total = round1(total);
            let weekdays_total = round1(weekdays_total);
            let base = if weekdays_total > 0.0 { weekdays_total } else { total };

            WeekTotal {
                week,
                total,
                weekdays_total,
                average_per_weekday: base / WEEKDAYS_PER_WEEK,
                load: WeekLoad::from_total(total),
            }
        })
        .collect()
}

/// Month-to-date progress against the daily hours goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub weekdays_in_month: u32,
    pub weekdays_passed: u32,
    pub total_hours: f64,
    pub average_per_weekday: f64,
    pub target_hours: f64,
    pub hours_remaining: f64,
    pub goal_reached: bool,
    /// Average at or above the daily goal.
    pub on_track: bool,
    /// Average below the low threshold.
    pub low: bool,
    /// Remaining hours exceed what the remaining weekdays can absorb.
    pub behind: bool,
}

impl MonthlyStats {
    /// Computes stats for `today`'s month.
    ///
    /// Returns `None` for the week view or when there are no days, mirroring
    /// the calendar that clears the stats panel in those cases. All day
    /// values are summed; the caller is expected to pass the month's series.
    pub fn compute(days: &[DayRecord], view: ViewMode, today: NaiveDate, goals: &CalendarConfig) -> Option<Self> {
        if view != ViewMode::Month || days.is_empty() {
            return None;
        }

        let first = today.with_day(1)?;
        let (weekdays_in_month, weekdays_passed) = first
            .iter_days()
            .take_while(|date| date.month() == first.month())
            .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
            .fold((0u32, 0u32), |(all, passed), date| {
                (all + 1, passed + u32::from(date.day() <= today.day()))
            });

        let total_hours: f64 = days.iter().map(|day| day.value).sum();
        let average_per_weekday = if weekdays_passed > 0 {
            total_hours / weekdays_passed as f64
        } else {
            0.0
        };
        let target_hours = weekdays_in_month as f64 * goals.goal_hours_per_day;
        let hours_remaining = (target_hours - total_hours).max(0.0);
        let weekdays_left = weekdays_in_month - weekdays_passed;

        Some(Self {
            weekdays_in_month,
            weekdays_passed,
            total_hours,
            average_per_weekday,
            target_hours,
            hours_remaining,
            goal_reached: hours_remaining == 0.0,
            on_track: average_per_weekday >= goals.goal_hours_per_day,
            low: average_per_weekday < goals.low_hours_per_day,
            behind: hours_remaining > weekdays_left as f64 * goals.max_hours_per_day,
        })
    }

    pub fn weekdays_left(&self) -> u32 {
        self.weekdays_in_month - self.weekdays_passed
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
