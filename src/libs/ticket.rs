//! Per-ticket aggregation and sync planning.
//!
//! Tracked intervals carry their JIRA key either explicitly or as a tag
//! such as `PROJ-123`. This module groups intervals by ticket, summarizes
//! them next to the worklogs already in JIRA and selects the intervals that
//! still need to be pushed. The push itself goes through the backend, which
//! owns the JIRA credentials; [`SyncEntry`] and [`SyncResponse`] are its
//! request and answer.

use super::formatter::format_hours;
use super::interval::{Interval, IntervalRecord, RemoteWorklog, WorklogRecord};
use super::matcher::{IntervalMatcher, MatchResult};
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

const TICKET_PATTERN: &str = r"^[A-Z]+-\d+$";
const SYNC_SUFFIX: &str = " (Synced from Timewarrior)";
const DEFAULT_SYNC_COMMENT: &str = "Time tracked via Timewarrior sync";

static TICKET_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Ticket payload returned by the time sync endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TicketData {
    pub ticket: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub intervals: Vec<IntervalRecord>,
    #[serde(default)]
    pub existing_worklogs: Vec<WorklogRecord>,
}

/// Whether `tag` looks like a JIRA issue key.
pub fn is_ticket_key(tag: &str) -> bool {
    TICKET_REGEX
        .get_or_init(|| Regex::new(TICKET_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(tag))
}

/// Returns the first tag shaped like a JIRA issue key.
pub fn ticket_from_tags(tags: &[String]) -> Option<String> {
    tags.iter().find(|tag| is_ticket_key(tag)).cloned()
}

/// Totals for one ticket across both systems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketSummary {
    pub ticket: String,
    pub summary: Option<String>,
    pub interval_count: usize,
    pub total_seconds: i64,
    pub existing_seconds: i64,
    pub earliest_start: Option<DateTime<FixedOffset>>,
    pub latest_end: Option<DateTime<FixedOffset>>,
    pub total_formatted: String,
    pub existing_formatted: String,
}

impl TicketSummary {
    pub fn from_intervals(ticket: &str, intervals: &[Interval], worklogs: &[RemoteWorklog]) -> Self {
        let total_seconds = intervals.iter().map(|interval| interval.duration_seconds).sum();
        let existing_seconds = worklogs.iter().map(|worklog| worklog.time_spent_seconds).sum();
        let earliest_start = intervals.iter().map(|interval| interval.start).min();
        // Open intervals end at start + duration.
        let latest_end = intervals
            .iter()
            .map(|interval| interval.end.unwrap_or(interval.start + interval.duration()))
            .max();

        Self {
            ticket: ticket.to_string(),
            summary: None,
            interval_count: intervals.len(),
            total_seconds,
            existing_seconds,
            earliest_start,
            latest_end,
            total_formatted: format_hours(total_seconds),
            existing_formatted: format_hours(existing_seconds),
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary.filter(|s| !s.trim().is_empty());
        self
    }
}

/// Groups intervals by ticket, keyed in ticket order.
///
/// Intervals without a ticket are left out.
pub fn group_by_ticket(intervals: &[Interval]) -> BTreeMap<String, Vec<Interval>> {
    let mut groups: BTreeMap<String, Vec<Interval>> = BTreeMap::new();
    for interval in intervals {
        if let Some(ticket) = &interval.ticket {
            groups.entry(ticket.clone()).or_default().push(interval.clone());
        }
    }
    groups
}

/// Intervals that should be pushed as new worklogs.
///
/// Everything long enough to match and not already an exact match. Close
/// matches are proposed too; the user decides whether they are duplicates.
pub fn sync_candidates<'a>(
    intervals: &'a [Interval],
    worklogs: &[RemoteWorklog],
    matcher: &IntervalMatcher,
) -> Vec<&'a Interval> {
    intervals
        .iter()
        .filter(|interval| matcher.is_eligible(interval))
        .filter(|interval| matcher.classify(interval, worklogs) != MatchResult::ExactMatch)
        .collect()
}

/// Builds the worklog comment for a synced interval.
pub fn sync_comment(note: Option<&str>) -> String {
    match note.map(str::trim).filter(|note| !note.is_empty()) {
        Some(note) if note.ends_with('.') => format!("{}{}", note, SYNC_SUFFIX),
        Some(note) => format!("{}.{}", note, SYNC_SUFFIX),
        None => DEFAULT_SYNC_COMMENT.to_string(),
    }
}

/// One interval in a push request to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncEntry {
    pub ticket: String,
    pub start: String,
    pub duration_seconds: i64,
    pub duration_formatted: String,
    pub note: Option<String>,
    pub comment: String,
}

impl SyncEntry {
    /// Builds the entry for `interval`; its own ticket wins over `ticket`.
    pub fn new(ticket: &str, interval: &Interval) -> Self {
        Self {
            ticket: interval.ticket.clone().unwrap_or_else(|| ticket.to_string()),
            start: interval.start.to_rfc3339(),
            duration_seconds: interval.duration_seconds,
            duration_formatted: format_hours(interval.duration_seconds),
            note: interval.note.clone(),
            comment: sync_comment(interval.note.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SyncTotals {
    pub success: usize,
    pub failed: usize,
}

/// Per-entry outcome reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SyncOutcome {
    #[serde(default)]
    pub ticket: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub duration: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SyncResponse {
    pub summary: SyncTotals,
    #[serde(default)]
    pub results: Vec<SyncOutcome>,
}

impl SyncResponse {
    pub fn failures(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.results.iter().filter(|outcome| !outcome.success)
    }
}
