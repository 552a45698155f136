//! Message types for all user-facing text in timegrid.
//!
//! Each variant is one message; parameters carry the dynamic parts. The
//! text itself lives in [`display`](super::display).

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigModuleServer,
    ConfigModuleMatching,
    ConfigModuleCalendar,
    NoServerConfigured,

    // === PROMPTS ===
    PromptSelectModules,
    PromptServerApiUrl,
    PromptServerTimeout,
    PromptMatchWindow,
    PromptMinIntervalSeconds,
    PromptDurationFloor,
    PromptDurationRatio,
    PromptGoalHours,
    PromptLowHours,
    PromptMaxHours,

    // === CALENDAR MESSAGES ===
    GridHeader(String, String), // metric, view
    GridEmpty,
    MonthlyAverage(f64),
    HoursRemaining(f64),
    GoalReached,
    AverageLow(f64, f64),    // average, low threshold
    BehindSchedule(f64, u32), // remaining hours, weekdays left
    HeatLegend(String),

    // === TIME SYNC MESSAGES ===
    TicketHeader(String, String), // ticket, summary
    TicketNotFound(String),
    TrackedIntervalsHeader,
    JiraWorklogsHeader,
    NoIntervals,
    NoEligibleIntervals(i64), // minimum seconds
    NoWorklogs,
    TicketTotals {
        tracked: String,
        existing: String,
        count: usize,
    },
    SyncCandidates(usize, String), // count, formatted total
    AllIntervalsSynced,
    MatchLegend,
    SyncSourceRequired,
    ConfirmSync(usize),
    SyncPushed(String, usize), // synced total, success count
    SyncPushFailed(usize),
    SyncEntryFailed(String, String), // start, reason
    SyncTicketRequired,

    // === TIMELINE MESSAGES ===
    TimelineHeader(String, String), // from, to
    TimelineEmpty,
    TimelineSourceRequired,
    ConfirmDeleteEntry(i64),
    EntryDeleted(i64),

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === INPUT & BACKEND MESSAGES ===
    InvalidInput(String),
    FileReadFailed(String),
    BackendRequestFailed(String, String), // endpoint, status
    BackendError(String, String),         // endpoint, error text
}
