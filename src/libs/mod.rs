//! Core library modules for the timegrid application.
//!
//! Everything here is independent of the command line: pure data
//! transformation from backend JSON to presentation structures, plus the
//! configuration and messaging infrastructure shared by the commands.
//!
//! ## Features
//!
//! - **Calendar**: Sunday-aligned grid bucketing, heat levels, weekly and
//!   monthly statistics
//! - **Time Sync**: interval/worklog matching, per-ticket summaries, sync
//!   candidates
//! - **Time Editor**: duration formatting and timeline rows
//! - **Infrastructure**: configuration, data storage, messages, tables
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{DateTime, Duration};
//! use timegrid::libs::interval::{Interval, RemoteWorklog};
//! use timegrid::libs::matcher::{classify, MatchResult};
//!
//! let start = DateTime::parse_from_rfc3339("2024-06-03T09:00:00Z")?;
//! let interval = Interval::new(start, 3600);
//! let worklog = RemoteWorklog::new(start + Duration::minutes(2), 3660);
//! assert_eq!(classify(&interval, &[worklog]), MatchResult::ExactMatch);
//! # Ok::<(), chrono::ParseError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod interval;
pub mod matcher;
pub mod messages;
pub mod stats;
pub mod ticket;
pub mod timestamp;
pub mod view;
