//! Display implementation for timegrid messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between commands and new variants cannot be added without a
//! text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleServer => "Tracker server settings".to_string(),
            Message::ConfigModuleMatching => "Worklog matching settings".to_string(),
            Message::ConfigModuleCalendar => "Calendar goal settings".to_string(),
            Message::NoServerConfigured => {
                "No tracker server configured. Run 'timegrid init', set TIMEGRID_API_URL, or pass --file".to_string()
            }

            // === PROMPTS ===
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the tracker server URL".to_string(),
            Message::PromptServerTimeout => "Enter the request timeout (seconds)".to_string(),
            Message::PromptMatchWindow => "Enter the close-match window (minutes)".to_string(),
            Message::PromptMinIntervalSeconds => "Enter the minimum interval length (seconds)".to_string(),
            Message::PromptDurationFloor => "Enter the minimum duration tolerance (seconds)".to_string(),
            Message::PromptDurationRatio => "Enter the duration tolerance ratio (0.0-1.0)".to_string(),
            Message::PromptGoalHours => "Enter the daily hours goal".to_string(),
            Message::PromptLowHours => "Enter the low daily average threshold (hours)".to_string(),
            Message::PromptMaxHours => "Enter the most hours a remaining day can take".to_string(),

            // === CALENDAR MESSAGES ===
            Message::GridHeader(metric, view) => format!("{} for this {}", metric, view),
            Message::GridEmpty => "No days to display".to_string(),
            Message::MonthlyAverage(avg) => format!("Monthly average: {:.1}h/day", avg),
            Message::HoursRemaining(hours) => format!("Hours remaining to goal: {:.1}h", hours),
            Message::GoalReached => "Goal reached!".to_string(),
            Message::AverageLow(avg, low) => format!("Average of {:.1}h/day is below {:.1}h/day", avg, low),
            Message::BehindSchedule(hours, days) => {
                format!("{:.1}h remaining cannot fit into {} weekday(s) left this month", hours, days)
            }
            Message::HeatLegend(legend) => format!("Legend: {}", legend),

            // === TIME SYNC MESSAGES ===
            Message::TicketHeader(ticket, summary) => format!("{}: {}", ticket, summary),
            Message::TicketNotFound(ticket) => format!("Ticket {} not found", ticket),
            Message::TrackedIntervalsHeader => "Timewarrior entries".to_string(),
            Message::JiraWorklogsHeader => "JIRA worklogs".to_string(),
            Message::NoIntervals => "No entries found".to_string(),
            Message::NoEligibleIntervals(seconds) => {
                format!("No entries found (entries under {} seconds are excluded)", seconds)
            }
            Message::NoWorklogs => "No worklogs found".to_string(),
            Message::TicketTotals { tracked, existing, count } => {
                format!("Tracked: {} in {} entries | Logged in JIRA: {}", tracked, count, existing)
            }
            Message::SyncCandidates(count, total) => format!("{} unmatched entries ({}) can be synced to JIRA", count, total),
            Message::AllIntervalsSynced => "All time entries are already synced to JIRA or are too short".to_string(),
            Message::MatchLegend => "✓ matched   ~ close match   ! missing / no match".to_string(),
            Message::SyncSourceRequired => "Pass a ticket id or both --intervals and --worklogs".to_string(),
            Message::ConfirmSync(count) => format!("This will sync {} unmatched time entries to JIRA. Continue?", count),
            Message::SyncPushed(total, count) => format!("Successfully synced {} to JIRA ({} entries)", total, count),
            Message::SyncPushFailed(count) => format!("Sync failed - {} entries failed", count),
            Message::SyncEntryFailed(start, reason) => format!("{}: {}", start, reason),
            Message::SyncTicketRequired => "Pass a ticket id to push entries read from files".to_string(),

            // === TIMELINE MESSAGES ===
            Message::TimelineHeader(from, to) => format!("Time entries from {} to {}", from, to),
            Message::TimelineEmpty => "No entries found for the selected date range".to_string(),
            Message::TimelineSourceRequired => "Pass --file or both --from and --to".to_string(),
            Message::ConfirmDeleteEntry(id) => format!("Are you sure you want to delete entry {}?", id),
            Message::EntryDeleted(id) => format!("Entry {} deleted", id),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === INPUT & BACKEND MESSAGES ===
            Message::InvalidInput(details) => format!("Invalid input: {}", details),
            Message::FileReadFailed(path) => format!("Failed to read {}", path),
            Message::BackendRequestFailed(endpoint, status) => format!("Request to {} failed: {}", endpoint, status),
            Message::BackendError(endpoint, error) => format!("Request to {} failed: {}", endpoint, error),
        };
        write!(f, "{}", s)
    }
}
