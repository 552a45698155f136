//! Calendar heatmap command.
//!
//! Draws the switch-count or hours calendar for the current week or month.
//! Days come from the backend metrics endpoints or, with `--file`, from a
//! JSON array in the same `[{date, count|hours}]` format.

use super::{backend, read_json};
use crate::libs::calendar::{bucket_to_grid, DayRecord, DayRecordRaw, GridCell, Metric, ViewMode};
use crate::libs::config::{CalendarConfig, Config};
use crate::libs::messages::Message;
use crate::libs::stats::{weekly_totals, HeatScale, MonthlyStats, WeekTotal};
use crate::libs::view::{heat_legend, View};
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GridArgs {
    /// Daily series to show
    #[arg(long, short, value_enum, default_value_t = Metric::Switches)]
    metric: Metric,

    /// Period to request from the backend
    #[arg(long, short, value_enum, default_value_t = ViewMode::Week)]
    view: ViewMode,

    /// Read days from a JSON file instead of the backend
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Date to highlight and measure monthly progress against (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the grid as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GridReport {
    metric: Metric,
    view: ViewMode,
    today: NaiveDate,
    cells: Vec<GridCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weekly: Option<Vec<WeekTotal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monthly: Option<MonthlyStats>,
}

pub async fn cmd(args: GridArgs) -> Result<()> {
    let config = Config::read()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let days = match &args.file {
        Some(path) => DayRecord::parse_batch(&read_json::<Vec<DayRecordRaw>>(path)?)?,
        None => backend(&config)?.daily(args.metric, args.view).await?,
    };

    let cells = bucket_to_grid(&days, today)?;
    let calendar = config.calendar.unwrap_or_default();
    let (weekly, monthly) = if args.metric.is_hours() {
        (
            Some(weekly_totals(&cells)),
            MonthlyStats::compute(&days, args.view, today, &calendar),
        )
    } else {
        (None, None)
    };

    if args.json {
        let report = GridReport {
            metric: args.metric,
            view: args.view,
            today,
            cells,
            weekly,
            monthly,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cells.is_empty() {
        msg_info!(Message::GridEmpty);
        return Ok(());
    }

    msg_print!(Message::GridHeader(args.metric.title().to_string(), args.view.to_string()), true);
    let scale = HeatScale::for_metric(args.metric);
    View::grid(&cells, args.metric, &scale, weekly.as_deref())?;
    msg_print!(Message::HeatLegend(heat_legend(&scale)));

    if let Some(stats) = monthly {
        print_monthly(&stats, &calendar);
    }

    Ok(())
}

fn print_monthly(stats: &MonthlyStats, calendar: &CalendarConfig) {
    if stats.on_track {
        msg_success!(Message::MonthlyAverage(stats.average_per_weekday));
    } else {
        msg_print!(Message::MonthlyAverage(stats.average_per_weekday));
    }

    if stats.goal_reached {
        msg_success!(Message::GoalReached);
    } else {
        msg_print!(Message::HoursRemaining(stats.hours_remaining));
    }

    if stats.low {
        msg_warning!(Message::AverageLow(stats.average_per_weekday, calendar.low_hours_per_day));
    }
    if stats.behind {
        msg_warning!(Message::BehindSchedule(stats.hours_remaining, stats.weekdays_left()));
    }
}
