use super::calendar::{week_of_month, GridCell, GridWeeks, Metric};
use super::formatter::{format_hours, format_instant, FormattedInterval};
use super::interval::{Interval, RemoteWorklog};
use super::matcher::MatchResult;
use super::stats::{HeatScale, WeekTotal};
use anyhow::Result;
use chrono::FixedOffset;
use prettytable::{format, row, Cell, Row, Table};

/// Shading glyphs from empty to full.
const HEAT_GLYPHS: [&str; 6] = [" ", "·", "░", "▒", "▓", "█"];
const TODAY_MARKER: &str = "*";
const WEEKDAY_TITLES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct View {}

impl View {
    /// Prints a calendar grid, one row per week.
    ///
    /// `weekly` adds the total and weekday average column used by the hours
    /// calendars.
    pub fn grid(cells: &[GridCell], metric: Metric, scale: &HeatScale, weekly: Option<&[WeekTotal]>) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut titles = vec![Cell::new("Week")];
        titles.extend(WEEKDAY_TITLES.iter().map(|title| Cell::new(title)));
        if weekly.is_some() {
            titles.push(Cell::new("Total"));
        }
        table.set_titles(Row::new(titles));

        for (index, days) in cells.weeks().enumerate() {
            let mut row = vec![Cell::new(&format!("W{}", week_of_month(days[0].date)))];
            row.extend(days.iter().map(|cell| Cell::new(&Self::grid_cell(cell, metric, scale))));

            if let Some(week) = weekly.and_then(|weekly| weekly.get(index)) {
                let weekly_scale = HeatScale::weekly_hours();
                row.push(Cell::new(&format!(
                    "{} {:.1}h\navg {:.1}h",
                    heat_glyph(&weekly_scale, week.total),
                    week.total,
                    week.average_per_weekday
                )));
            }
            table.add_row(Row::new(row));
        }
        table.printstd();

        Ok(())
    }

    /// Prints tracked intervals with their match indicator.
    pub fn intervals(intervals: &[Interval], results: &[MatchResult], offset: &FixedOffset) -> Result<()> {
        let mut table = Table::new();

        table.set_titles(row!["", "#", "START", "DURATION", "NOTE"]);
        for (index, (interval, result)) in intervals.iter().zip(results).enumerate() {
            table.add_row(row![
                result.indicator(),
                index + 1,
                format_instant(&interval.start, offset),
                format_hours(interval.duration_seconds),
                interval.note.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints remote worklogs with their match indicator.
    pub fn worklogs(worklogs: &[RemoteWorklog], results: &[MatchResult], offset: &FixedOffset) -> Result<()> {
        let mut table = Table::new();

        table.set_titles(row!["", "#", "STARTED", "TIME SPENT", "AUTHOR", "COMMENT"]);
        for (index, (worklog, result)) in worklogs.iter().zip(results).enumerate() {
            table.add_row(row![
                result.indicator(),
                index + 1,
                format_instant(&worklog.started, offset),
                format_hours(worklog.time_spent_seconds),
                worklog.author.as_deref().unwrap_or(""),
                worklog.comment.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn timeline(rows: &[FormattedInterval]) -> Result<()> {
        let mut table = Table::new();

        table.set_titles(row!["#", "TASK", "START", "END", "DURATION"]);
        for entry in rows {
            table.add_row(row![entry.id, entry.label, entry.start, entry.end, entry.duration]);
        }
        table.printstd();

        Ok(())
    }

    fn grid_cell(cell: &GridCell, metric: Metric, scale: &HeatScale) -> String {
        if !cell.in_range {
            return String::new();
        }
        let marker = if cell.is_today { TODAY_MARKER } else { "" };
        format!(
            "{:>2}{}\n{} {}",
            cell.day_of_month,
            marker,
            heat_glyph(scale, cell.value),
            metric.format_value(cell.value)
        )
    }
}

/// Glyph for `value`, spreading the scale's levels over the glyph ramp.
pub fn heat_glyph(scale: &HeatScale, value: f64) -> &'static str {
    let max_level = scale.max_level().max(1);
    let index = scale.level(value) * (HEAT_GLYPHS.len() - 1) / max_level;
    HEAT_GLYPHS[index.min(HEAT_GLYPHS.len() - 1)]
}

/// One-line legend such as `· 0  ░ 1  ▒ 3`.
pub fn heat_legend(scale: &HeatScale) -> String {
    scale
        .thresholds()
        .iter()
        .map(|threshold| format!("{} {}", heat_glyph(scale, *threshold), threshold))
        .collect::<Vec<_>>()
        .join("  ")
}
