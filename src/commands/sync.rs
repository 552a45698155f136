//! Time sync command.
//!
//! Shows a ticket's Timewarrior intervals next to the worklogs already in
//! JIRA, marks each side with its match result and lists the intervals that
//! would be pushed as new worklogs. With `--push` those intervals are sent
//! to the backend, which creates the worklogs, after a confirmation.

use super::{backend, read_json};
use crate::libs::config::Config;
use crate::libs::formatter::format_hours;
use crate::libs::interval::{Interval, IntervalRecord, RemoteWorklog, WorklogRecord};
use crate::libs::matcher::{IntervalMatcher, MatchResult, MatchTolerance};
use crate::libs::messages::Message;
use crate::libs::ticket::{group_by_ticket, sync_candidates, sync_comment, SyncEntry, TicketData, TicketSummary};
use crate::libs::timestamp::local_offset;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde::Serialize;
use std::path::PathBuf;

const UNKNOWN_TICKET: &str = "-";

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// JIRA issue key, e.g. PROJ-123
    ticket: Option<String>,

    /// Read intervals from a JSON file instead of the backend
    #[arg(long, requires = "worklogs")]
    intervals: Option<PathBuf>,

    /// Read existing worklogs from a JSON file instead of the backend
    #[arg(long, requires = "intervals")]
    worklogs: Option<PathBuf>,

    /// Print the comparison as JSON
    #[arg(long, conflicts_with = "push")]
    json: bool,

    /// Push the unmatched intervals to JIRA after confirmation
    #[arg(long)]
    push: bool,
}

#[derive(Debug, Serialize)]
struct IntervalRow {
    start: DateTime<FixedOffset>,
    end: Option<DateTime<FixedOffset>>,
    duration_seconds: i64,
    note: Option<String>,
    result: MatchResult,
}

#[derive(Debug, Serialize)]
struct WorklogRow {
    started: DateTime<FixedOffset>,
    time_spent_seconds: i64,
    author: Option<String>,
    comment: Option<String>,
    result: MatchResult,
}

#[derive(Debug, Serialize)]
struct Candidate {
    started: DateTime<FixedOffset>,
    time_spent_seconds: i64,
    comment: String,
}

#[derive(Debug, Serialize)]
struct SyncReport {
    summary: TicketSummary,
    intervals: Vec<IntervalRow>,
    worklogs: Vec<WorklogRow>,
    candidates: Vec<Candidate>,
}

pub async fn cmd(args: SyncArgs) -> Result<()> {
    let config = Config::read()?;

    let data = match (&args.intervals, &args.worklogs, &args.ticket) {
        (Some(intervals), Some(worklogs), ticket) => TicketData {
            ticket: ticket.clone().unwrap_or_else(|| UNKNOWN_TICKET.to_string()),
            summary: None,
            intervals: read_json::<Vec<IntervalRecord>>(intervals)?,
            existing_worklogs: read_json::<Vec<WorklogRecord>>(worklogs)?,
        },
        (_, _, Some(ticket)) => match backend(&config)?.ticket(ticket).await? {
            Some(data) => data,
            None => {
                msg_warning!(Message::TicketNotFound(ticket.clone()));
                return Ok(());
            }
        },
        _ => msg_bail_anyhow!(Message::SyncSourceRequired),
    };

    let offset = local_offset();
    let mut intervals = Interval::parse_batch(&data.intervals, &offset)?;
    let worklogs = RemoteWorklog::parse_batch(&data.existing_worklogs, &offset)?;

    // Files may hold several tickets; keep the requested one and untagged rows.
    let ticket = if data.ticket == UNKNOWN_TICKET {
        let groups = group_by_ticket(&intervals);
        match (groups.len(), groups.keys().next()) {
            (1, Some(only)) => only.clone(),
            _ => data.ticket.clone(),
        }
    } else {
        intervals.retain(|interval| interval.ticket.as_deref().map_or(true, |t| t == data.ticket));
        data.ticket.clone()
    };

    if args.push && ticket == UNKNOWN_TICKET {
        msg_bail_anyhow!(Message::SyncTicketRequired);
    }

    let matcher = IntervalMatcher::new(MatchTolerance::from(&config.matching.clone().unwrap_or_default()));
    let summary = TicketSummary::from_intervals(&ticket, &intervals, &worklogs).with_summary(data.summary.clone());
    let interval_results = matcher.classify_all(&intervals, &worklogs);
    let worklog_results = matcher.classify_all_worklogs(&worklogs, &intervals);
    let candidates = sync_candidates(&intervals, &worklogs, &matcher);

    if args.json {
        let report = SyncReport {
            summary,
            intervals: intervals
                .iter()
                .zip(&interval_results)
                .map(|(interval, result)| IntervalRow {
                    start: interval.start,
                    end: interval.end,
                    duration_seconds: interval.duration_seconds,
                    note: interval.note.clone(),
                    result: *result,
                })
                .collect(),
            worklogs: worklogs
                .iter()
                .zip(&worklog_results)
                .map(|(worklog, result)| WorklogRow {
                    started: worklog.started,
                    time_spent_seconds: worklog.time_spent_seconds,
                    author: worklog.author.clone(),
                    comment: worklog.comment.clone(),
                    result: *result,
                })
                .collect(),
            candidates: candidates
                .iter()
                .map(|interval| Candidate {
                    started: interval.start,
                    time_spent_seconds: interval.duration_seconds,
                    comment: sync_comment(interval.note.as_deref()),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    msg_print!(
        Message::TicketHeader(summary.ticket.clone(), summary.summary.clone().unwrap_or_default()),
        true
    );
    msg_print!(Message::TicketTotals {
        tracked: summary.total_formatted.clone(),
        existing: summary.existing_formatted.clone(),
        count: summary.interval_count,
    });
    msg_info!(Message::MatchLegend);

    msg_print!(Message::TrackedIntervalsHeader, true);
    let (eligible, eligible_results): (Vec<Interval>, Vec<MatchResult>) = intervals
        .iter()
        .zip(&interval_results)
        .filter(|(interval, _)| matcher.is_eligible(interval))
        .map(|(interval, result)| (interval.clone(), *result))
        .unzip();
    if intervals.is_empty() {
        msg_info!(Message::NoIntervals);
    } else if eligible.is_empty() {
        msg_info!(Message::NoEligibleIntervals(matcher.tolerance().min_interval_seconds));
    } else {
        View::intervals(&eligible, &eligible_results, &offset)?;
    }

    msg_print!(Message::JiraWorklogsHeader, true);
    if worklogs.is_empty() {
        msg_info!(Message::NoWorklogs);
    } else {
        View::worklogs(&worklogs, &worklog_results, &offset)?;
    }

    if candidates.is_empty() {
        msg_success!(Message::AllIntervalsSynced, true);
        return Ok(());
    }

    let total: i64 = candidates.iter().map(|interval| interval.duration_seconds).sum();
    msg_info!(Message::SyncCandidates(candidates.len(), format_hours(total)), true);

    if args.push {
        let entries: Vec<SyncEntry> = candidates.iter().map(|interval| SyncEntry::new(&ticket, interval)).collect();
        push(&config, &entries).await?;
    }

    Ok(())
}

async fn push(config: &Config, entries: &[SyncEntry]) -> Result<()> {
    let backend = backend(config)?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmSync(entries.len()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let response = backend.sync(entries).await?;
    if response.summary.success > 0 {
        let synced: i64 = entries.iter().map(|entry| entry.duration_seconds).sum();
        msg_success!(Message::SyncPushed(format_hours(synced), response.summary.success));
    } else {
        msg_warning!(Message::SyncPushFailed(response.summary.failed));
    }

    for outcome in response.failures() {
        let reason = outcome.message.clone().unwrap_or_default();
        msg_warning!(Message::SyncEntryFailed(outcome.start.clone(), reason));
    }

    Ok(())
}
