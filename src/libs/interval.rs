//! Tracked intervals, remote worklogs and time editor entries.
//!
//! Each type has a wire record mirroring the backend JSON exactly and a
//! validated form with parsed timestamps. Conversion happens per batch so
//! one malformed record rejects the whole response.

use super::error::InputError;
use super::ticket::ticket_from_tags;
use super::timestamp::{parse_timestamp, parse_utc_timestamp};
use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

/// Interval as exported by the Timewarrior endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IntervalRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub ticket: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// JIRA worklog as relayed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WorklogRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub started: String,
    #[serde(rename = "timeSpentSeconds", default)]
    pub time_spent_seconds: i64,
    #[serde(rename = "timeSpent", default)]
    pub time_spent: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Switch record from the time editor endpoint. Timestamps are naive UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TimeEntryRecord {
    pub id: i64,
    pub timestamp: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub to_task: String,
    #[serde(default)]
    pub from_task: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A locally tracked contiguous span of time attributed to a task.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
    pub duration_seconds: i64,
    pub note: Option<String>,
    pub ticket: Option<String>,
    pub tags: Vec<String>,
}

/// A remote system's record of time logged against a ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteWorklog {
    pub id: Option<String>,
    pub author: Option<String>,
    pub started: DateTime<FixedOffset>,
    pub time_spent_seconds: i64,
    pub comment: Option<String>,
}

/// A time editor row: one task switch and the span it opened.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: i64,
    pub task: String,
    pub from_task: Option<String>,
    pub interval: Interval,
}

impl Interval {
    /// Creates an interval without an explicit end.
    pub fn new(start: DateTime<FixedOffset>, duration_seconds: i64) -> Self {
        Self {
            start,
            end: None,
            duration_seconds,
            note: None,
            ticket: None,
            tags: Vec::new(),
        }
    }

    /// Creates a closed interval; the duration is derived from the bounds.
    pub fn closed(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self {
            end: Some(end),
            ..Self::new(start, end.signed_duration_since(start).num_seconds())
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_ticket(mut self, ticket: &str) -> Self {
        self.ticket = Some(ticket.to_string());
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_seconds)
    }

    /// Validates one wire record.
    ///
    /// A missing `duration_seconds` is derived from `end − start` when an end
    /// exists and is zero otherwise. The ticket falls back to the first tag
    /// shaped like a JIRA key.
    pub fn from_record(record: &IntervalRecord, assume: &FixedOffset) -> Result<Self, InputError> {
        let start = parse_timestamp(&record.start, assume)?;
        let end = record.end.as_deref().map(|end| parse_timestamp(end, assume)).transpose()?;
        let duration_seconds = match (record.duration_seconds, end) {
            (Some(seconds), _) => seconds,
            (None, Some(end)) => end.signed_duration_since(start).num_seconds(),
            (None, None) => 0,
        };
        if duration_seconds < 0 {
            return Err(InputError::NegativeDuration {
                index: 0,
                seconds: duration_seconds,
            });
        }

        Ok(Self {
            start,
            end,
            duration_seconds,
            note: record.note.clone().filter(|note| !note.trim().is_empty()),
            ticket: record.ticket.clone().or_else(|| ticket_from_tags(&record.tags)),
            tags: record.tags.clone(),
        })
    }

    pub fn parse_batch(records: &[IntervalRecord], assume: &FixedOffset) -> Result<Vec<Self>, InputError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_record(record, assume).map_err(|e| e.at(index)))
            .collect()
    }
}

impl RemoteWorklog {
    pub fn new(started: DateTime<FixedOffset>, time_spent_seconds: i64) -> Self {
        Self {
            id: None,
            author: None,
            started,
            time_spent_seconds,
            comment: None,
        }
    }

    /// Validates one wire record. Naive `started` values use `assume`.
    pub fn from_record(record: &WorklogRecord, assume: &FixedOffset) -> Result<Self, InputError> {
        let started = parse_timestamp(&record.started, assume)?;
        if record.time_spent_seconds < 0 {
            return Err(InputError::NegativeDuration {
                index: 0,
                seconds: record.time_spent_seconds,
            });
        }

        Ok(Self {
            id: record.id.clone(),
            author: record.author.clone(),
            started,
            time_spent_seconds: record.time_spent_seconds,
            comment: record.comment.clone().filter(|comment| !comment.trim().is_empty()),
        })
    }

    pub fn parse_batch(records: &[WorklogRecord], assume: &FixedOffset) -> Result<Vec<Self>, InputError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_record(record, assume).map_err(|e| e.at(index)))
            .collect()
    }
}

impl TimeEntry {
    pub fn from_record(record: &TimeEntryRecord) -> Result<Self, InputError> {
        let start = parse_utc_timestamp(&record.timestamp)?;
        let mut interval = match record.end_time.as_deref() {
            Some(end) => Interval::closed(start, parse_utc_timestamp(end)?),
            None => Interval::new(start, 0),
        };
        interval.note = record.note.clone().filter(|note| !note.trim().is_empty());
        interval.tags = vec![record.to_task.clone()];
        interval.ticket = ticket_from_tags(&interval.tags);

        Ok(Self {
            id: record.id,
            task: record.to_task.clone(),
            from_task: record.from_task.clone(),
            interval,
        })
    }

    /// Validates a batch and orders it by start, as the editor lists it.
    pub fn parse_batch(records: &[TimeEntryRecord]) -> Result<Vec<Self>, InputError> {
        let mut entries = records
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_record(record).map_err(|e| e.at(index)))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.interval.start);
        Ok(entries)
    }
}
