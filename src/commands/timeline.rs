//! Time editor listing command.
//!
//! Lists task switches with their computed durations. An entry without an
//! end lasts until the next switch; the last open entry is `ongoing`.
//! `--delete ID` removes one switch through the backend instead.

use super::{backend, read_json};
use crate::libs::config::Config;
use crate::libs::formatter::format_timeline;
use crate::libs::interval::{TimeEntry, TimeEntryRecord};
use crate::libs::messages::Message;
use crate::libs::timestamp::local_offset;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TimelineArgs {
    /// Read entries from a JSON file instead of the backend
    #[arg(long, short, conflicts_with_all = ["from", "to"])]
    file: Option<PathBuf>,

    /// First day to list (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// Last day to list, inclusive (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// Print the rows as JSON
    #[arg(long)]
    json: bool,

    /// Delete the entry with this id instead of listing
    #[arg(long, value_name = "ID", conflicts_with_all = ["file", "from", "to", "json"])]
    delete: Option<i64>,
}

pub async fn cmd(args: TimelineArgs) -> Result<()> {
    if let Some(id) = args.delete {
        return delete(id).await;
    }

    let offset = local_offset();

    let entries = match (&args.file, args.from, args.to) {
        (Some(path), _, _) => TimeEntry::parse_batch(&read_json::<Vec<TimeEntryRecord>>(path)?)?,
        (None, Some(from), Some(to)) => backend(&Config::read()?)?.switches(from, to).await?,
        _ => msg_bail_anyhow!(Message::TimelineSourceRequired),
    };

    let rows = format_timeline(&entries, &offset);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        msg_info!(Message::TimelineEmpty);
        return Ok(());
    };

    let from = args.from.unwrap_or_else(|| first.interval.start.with_timezone(&offset).date_naive());
    let to = args.to.unwrap_or_else(|| last.interval.start.with_timezone(&offset).date_naive());
    msg_print!(Message::TimelineHeader(from.to_string(), to.to_string()), true);
    View::timeline(&rows)?;

    Ok(())
}

async fn delete(id: i64) -> Result<()> {
    let backend = backend(&Config::read()?)?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteEntry(id).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    backend.delete_switch(id).await?;
    msg_success!(Message::EntryDeleted(id));
    Ok(())
}
