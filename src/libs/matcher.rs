//! Heuristic matching between tracked intervals and remote worklogs.
//!
//! Before pushing Timewarrior intervals to JIRA, both sides are compared so
//! that time which is already logged is not logged twice. There is no shared
//! identifier between the systems; a pair is recognized by how close its
//! start instants are and how similar its durations are.
//!
//! ## Classification
//!
//! For an interval `I` and a worklog `W`:
//!
//! ```text
//! time_diff          = |I.start - W.started|                 (ms)
//! duration_diff      = |I.duration - W.time_spent|           (s)
//! duration_tolerance = max(30, I.duration * 0.2)             (s)
//!
//! exact-match  time_diff <= window / 2  and  duration_diff <= duration_tolerance
//! close-match  time_diff <= window
//! no-match     otherwise, or I.duration < 60s
//! ```
//!
//! The duration tolerance is always derived from the tracked interval, in
//! both directions. That keeps the relation symmetric: an interval is an
//! exact match for a worklog exactly when the worklog is an exact match for
//! the interval.
//!
//! ## Scanning
//!
//! [`IntervalMatcher::classify`] returns on the first exact match. A close
//! match is remembered but scanning continues, so an exact match later in
//! the list still wins. [`IntervalMatcher::closest`] is the order-independent
//! variant that reports the nearest candidate.

use super::config::MatchConfig;
use super::interval::{Interval, RemoteWorklog};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Default matching window: ten minutes.
pub const DEFAULT_WINDOW_MS: i64 = 10 * 60 * 1000;

/// Result of comparing one interval or worklog against the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchResult {
    ExactMatch,
    CloseMatch,
    NoMatch,
}

impl MatchResult {
    /// Single-character marker used in tables: ✓, ~ or !.
    pub fn indicator(&self) -> &'static str {
        match self {
            MatchResult::ExactMatch => "✓",
            MatchResult::CloseMatch => "~",
            MatchResult::NoMatch => "!",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            MatchResult::ExactMatch => "exact-match",
            MatchResult::CloseMatch => "close-match",
            MatchResult::NoMatch => "no-match",
        };
        write!(f, "{}", label)
    }
}

/// Tolerances for [`IntervalMatcher`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchTolerance {
    /// Close-match window in milliseconds; exact matches use half of it.
    pub window_ms: i64,
    /// Intervals shorter than this never match.
    pub min_interval_seconds: i64,
    /// Lower bound of the duration tolerance.
    pub duration_floor_seconds: f64,
    /// Duration tolerance as a share of the interval's duration.
    pub duration_ratio: f64,
}

impl Default for MatchTolerance {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_WINDOW_MS,
            min_interval_seconds: 60,
            duration_floor_seconds: 30.0,
            duration_ratio: 0.2,
        }
    }
}

/// Values too large for the tolerance saturate at `i64::MAX`.
impl From<&MatchConfig> for MatchTolerance {
    fn from(config: &MatchConfig) -> Self {
        Self {
            window_ms: saturating_i64(config.window_minutes).saturating_mul(60 * 1000),
            min_interval_seconds: saturating_i64(config.min_interval_seconds),
            duration_floor_seconds: config.duration_floor_seconds as f64,
            duration_ratio: config.duration_ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalMatcher {
    tolerance: MatchTolerance,
}

impl IntervalMatcher {
    pub fn new(tolerance: MatchTolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> &MatchTolerance {
        &self.tolerance
    }

    /// Whether an interval is long enough to take part in matching.
    pub fn is_eligible(&self, interval: &Interval) -> bool {
        interval.duration_seconds >= self.tolerance.min_interval_seconds
    }

    /// Classifies a single interval/worklog pair.
    pub fn pair(&self, interval: &Interval, worklog: &RemoteWorklog) -> MatchResult {
        if !self.is_eligible(interval) {
            return MatchResult::NoMatch;
        }

        let time_diff = time_diff_ms(interval.start, worklog.started);
        let duration_diff = (interval.duration_seconds - worklog.time_spent_seconds).abs() as f64;
        let duration_tolerance = self
            .tolerance
            .duration_floor_seconds
            .max(interval.duration_seconds as f64 * self.tolerance.duration_ratio);

        if time_diff <= self.tolerance.window_ms {
            debug!(
                interval_start = %interval.start,
                worklog_start = %worklog.started,
                time_diff_ms = time_diff,
                duration_diff,
                duration_tolerance,
                "checking potential match"
            );
        }

        if time_diff <= self.tolerance.window_ms / 2 && duration_diff <= duration_tolerance {
            MatchResult::ExactMatch
        } else if time_diff <= self.tolerance.window_ms {
            MatchResult::CloseMatch
        } else {
            MatchResult::NoMatch
        }
    }

    /// Classifies a tracked interval against the remote worklogs.
    ///
    /// Short intervals return [`MatchResult::NoMatch`] without looking at
    /// `remotes`; an empty `remotes` list does the same.
    pub fn classify(&self, interval: &Interval, remotes: &[RemoteWorklog]) -> MatchResult {
        if !self.is_eligible(interval) {
            return MatchResult::NoMatch;
        }
        scan(remotes.iter().map(|worklog| self.pair(interval, worklog)))
    }

    /// Classifies a remote worklog against the tracked intervals.
    ///
    /// Same rule with roles swapped; intervals below the minimum duration are
    /// skipped. The duration tolerance still comes from the interval, not
    /// from the worklog's time spent as the dashboard did, so this direction
    /// agrees with [`classify`](Self::classify) on every exact match.
    pub fn classify_worklog(&self, worklog: &RemoteWorklog, intervals: &[Interval]) -> MatchResult {
        scan(
            intervals
                .iter()
                .filter(|interval| self.is_eligible(interval))
                .map(|interval| self.pair(interval, worklog)),
        )
    }

    /// Finds the remote worklog nearest in start time within the window.
    ///
    /// Unlike [`classify`](Self::classify) this does not depend on the order
    /// of `remotes`. Ties on time difference keep the earlier index.
    pub fn closest(&self, interval: &Interval, remotes: &[RemoteWorklog]) -> Option<(usize, MatchResult)> {
        if !self.is_eligible(interval) {
            return None;
        }
        remotes
            .iter()
            .enumerate()
            .map(|(index, worklog)| (index, time_diff_ms(interval.start, worklog.started), self.pair(interval, worklog)))
            .filter(|(_, _, result)| *result != MatchResult::NoMatch)
            .min_by_key(|(index, diff, _)| (*diff, *index))
            .map(|(index, _, result)| (index, result))
    }

    /// Classifies every interval against `remotes`, preserving order.
    pub fn classify_all(&self, intervals: &[Interval], remotes: &[RemoteWorklog]) -> Vec<MatchResult> {
        intervals.iter().map(|interval| self.classify(interval, remotes)).collect()
    }

    /// Classifies every worklog against `intervals`, preserving order.
    pub fn classify_all_worklogs(&self, worklogs: &[RemoteWorklog], intervals: &[Interval]) -> Vec<MatchResult> {
        worklogs.iter().map(|worklog| self.classify_worklog(worklog, intervals)).collect()
    }
}

/// Classifies an interval with the default ten-minute window.
pub fn classify(interval: &Interval, remotes: &[RemoteWorklog]) -> MatchResult {
    IntervalMatcher::default().classify(interval, remotes)
}

fn scan(results: impl Iterator<Item = MatchResult>) -> MatchResult {
    let mut best = MatchResult::NoMatch;
    for result in results {
        match result {
            MatchResult::ExactMatch => return result,
            MatchResult::CloseMatch => best = result,
            MatchResult::NoMatch => {}
        }
    }
    best
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn time_diff_ms(a: DateTime<FixedOffset>, b: DateTime<FixedOffset>) -> i64 {
    a.signed_duration_since(b).num_milliseconds().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_prefers_exact_over_earlier_close() {
        let results = [MatchResult::NoMatch, MatchResult::CloseMatch, MatchResult::ExactMatch];
        assert_eq!(scan(results.into_iter()), MatchResult::ExactMatch);
    }

    #[test]
    fn scan_of_nothing_is_no_match() {
        assert_eq!(scan(std::iter::empty()), MatchResult::NoMatch);
    }

    #[test]
    fn display_uses_kebab_labels() {
        assert_eq!(MatchResult::CloseMatch.to_string(), "close-match");
        assert_eq!(serde_json::to_string(&MatchResult::ExactMatch).unwrap(), "\"exact-match\"");
    }
}
