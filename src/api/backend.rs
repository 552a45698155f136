//! HTTP client for the tracker backend.
//!
//! The backend owns all storage and talks to Timewarrior, ActivityWatch and
//! JIRA. timegrid reads its JSON, and writes only through two calls: the
//! worklog push and the removal of a time editor switch. Requests are
//! independent: no retries, no caching and no de-duplication.

use crate::libs::calendar::{DayRecord, DayRecordRaw, Metric, ViewMode};
use crate::libs::config::ServerConfig;
use crate::libs::interval::{TimeEntry, TimeEntryRecord};
use crate::libs::messages::Message;
use crate::libs::ticket::{SyncEntry, SyncResponse, TicketData};
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const COUNTS_URL: &str = "metrics/counts";
const HOURS_URL: &str = "metrics/hours";
const ACTIVITY_HOURS_URL: &str = "metrics/activitywatch-hours";
const TICKETS_URL: &str = "timesync/tickets";
const SWITCHES_URL: &str = "switches/list";
const SYNC_URL: &str = "timesync/sync";
const SWITCH_URL: &str = "switches";

#[derive(Debug, Serialize)]
struct SyncRequest<'a> {
    intervals: &'a [SyncEntry],
}

/// Body of write responses and of most backend errors.
#[derive(Debug, Default, Deserialize)]
struct StatusBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Backend {
    client: Client,
    api_url: String,
}

impl Backend {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Daily series for `metric` over the current week or month.
    pub async fn daily(&self, metric: Metric, view: ViewMode) -> Result<Vec<DayRecord>> {
        match metric {
            Metric::Switches => self.switch_counts(view).await,
            Metric::Hours => self.hours(view).await,
            Metric::Activity => self.activity_hours(view).await,
        }
    }

    pub async fn switch_counts(&self, view: ViewMode) -> Result<Vec<DayRecord>> {
        self.days(COUNTS_URL, view).await
    }

    pub async fn hours(&self, view: ViewMode) -> Result<Vec<DayRecord>> {
        self.days(HOURS_URL, view).await
    }

    pub async fn activity_hours(&self, view: ViewMode) -> Result<Vec<DayRecord>> {
        self.days(ACTIVITY_HOURS_URL, view).await
    }

    /// Intervals and existing worklogs for one ticket.
    ///
    /// The endpoint answers with a list; an empty list means the ticket has
    /// no tracked time and yields `None`.
    pub async fn ticket(&self, ticket_id: &str) -> Result<Option<TicketData>> {
        let tickets: Vec<TicketData> = self.get(TICKETS_URL, &[("ticket_id", ticket_id.to_string())]).await?;
        Ok(tickets.into_iter().next())
    }

    /// Time editor entries between two dates, inclusive, ordered by start.
    pub async fn switches(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<Vec<TimeEntry>> {
        let records: Vec<TimeEntryRecord> = self
            .get(
                SWITCHES_URL,
                &[
                    ("start_date", start_date.format("%Y-%m-%d").to_string()),
                    ("end_date", end_date.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;
        Ok(TimeEntry::parse_batch(&records)?)
    }

    /// Pushes entries to JIRA through the backend.
    pub async fn sync(&self, entries: &[SyncEntry]) -> Result<SyncResponse> {
        let url = self.url(SYNC_URL);
        debug!(%url, count = entries.len(), "backend sync");
        self.send(SYNC_URL, self.client.post(&url).json(&SyncRequest { intervals: entries }))
            .await
    }

    /// Deletes one time editor switch.
    pub async fn delete_switch(&self, id: i64) -> Result<()> {
        let path = format!("{}/{}", SWITCH_URL, id);
        let url = self.url(&path);
        debug!(%url, "backend delete");
        let body: StatusBody = self.send(&path, self.client.delete(&url)).await?;
        if let Some(error) = body.error {
            msg_bail_anyhow!(Message::BackendError(path, error));
        }
        Ok(())
    }

    async fn days(&self, path: &str, view: ViewMode) -> Result<Vec<DayRecord>> {
        let raw: Vec<DayRecordRaw> = self.get(path, &[("view", view.to_string())]).await?;
        Ok(DayRecord::parse_batch(&raw)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        debug!(%url, ?query, "backend request");
        self.send(path, self.client.get(&url).query(query)).await
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<T> {
        let res = request.send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.json::<StatusBody>().await.unwrap_or_default();
            return Err(match body.error {
                Some(error) => msg_error_anyhow!(Message::BackendError(path.to_string(), error)),
                None => msg_error_anyhow!(Message::BackendRequestFailed(path.to_string(), status.to_string())),
            });
        }

        debug!(path, %status, "backend response");
        Ok(res.json::<T>().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }
}
