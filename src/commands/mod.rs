pub mod duration;
pub mod grid;
pub mod init;
pub mod sync;
pub mod timeline;

use crate::api::Backend;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show a calendar heatmap of switches or hours")]
    Grid(grid::GridArgs),
    #[command(about = "Compare tracked intervals with JIRA worklogs")]
    Sync(sync::SyncArgs),
    #[command(about = "List time editor entries with durations")]
    Timeline(timeline::TimelineArgs),
    #[command(about = "Format a number of seconds", arg_required_else_help = true)]
    Duration(duration::DurationArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Grid(args) => grid::cmd(args).await,
            Commands::Sync(args) => sync::cmd(args).await,
            Commands::Timeline(args) => timeline::cmd(args).await,
            Commands::Duration(args) => duration::cmd(args),
        }
    }
}

/// Reads a JSON document in the backend's wire format from disk.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| Message::FileReadFailed(path.display().to_string()))?;
    let value = serde_json::from_str(&text).with_context(|| Message::InvalidInput(path.display().to_string()))?;
    Ok(value)
}

/// Backend client for the configured server.
pub(crate) fn backend(config: &Config) -> Result<Backend> {
    let server = config
        .resolved_server()
        .ok_or_else(|| msg_error_anyhow!(Message::NoServerConfigured))?;
    Backend::new(&server)
}
