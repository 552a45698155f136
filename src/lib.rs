//! # Timegrid - calendar heatmaps and worklog sync for a time tracker
//!
//! A command-line companion for a personal time-tracking backend. It reads
//! the backend's JSON (or the same JSON from files) and renders it in the
//! terminal.
//!
//! ## Features
//!
//! - **Calendar Grids**: Sunday-aligned heatmaps of task switches, tracked
//!   hours and active hours, with weekly totals and monthly goal progress
//! - **Time Sync**: match Timewarrior intervals against JIRA worklogs, list
//!   what still needs to be logged and push it through the backend
//! - **Time Editor**: task switches with computed durations, and deletion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timegrid::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
