//! Configuration management for timegrid.
//!
//! Settings live in a single `config.json` in the per-user data directory.
//! Every section is optional; a missing section falls back to its defaults,
//! so the tool works with no configuration at all when input comes from
//! files.
//!
//! ## Configuration Structure
//!
//! - **Server**: base URL and request timeout of the tracker backend
//! - **Matching**: tolerances for the interval/worklog heuristic
//! - **Calendar**: daily hour goals used by the monthly statistics
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\timegrid\timegrid\config.json`
//! - **macOS**: `~/Library/Application Support/timegrid/timegrid/config.json`
//! - **Linux**: `~/.local/share/timegrid/timegrid/config.json`
//!
//! The `TIMEGRID_API_URL` environment variable (also read from a `.env`
//! file by the binary) overrides the configured server URL.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use timegrid::libs::config::Config;
//!
//! let config = Config::read()?;
//! let matching = config.matching.clone().unwrap_or_default();
//! println!("window: {} min", matching.window_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding [`ServerConfig::api_url`].
pub const API_URL_ENV: &str = "TIMEGRID_API_URL";

/// A configurable section shown in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Tracker backend connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL, e.g. `http://localhost:5000`.
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Tolerances for matching tracked intervals against worklogs.
///
/// ## Defaults
///
/// - **10 minute window**: close matches start within ten minutes, exact
///   matches within five
/// - **60 second minimum**: shorter intervals are accidental start/stops
/// - **30 seconds or 20%**: duration tolerance for exact matches, whichever
///   is larger
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchConfig {
    pub window_minutes: u64,
    pub min_interval_seconds: u64,
    pub duration_floor_seconds: u64,
    pub duration_ratio: f64,
}

/// Daily hour goals for the monthly hours statistics.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    /// Target hours per weekday.
    pub goal_hours_per_day: f64,
    /// Averages below this are flagged as low.
    pub low_hours_per_day: f64,
    /// Most hours a remaining weekday can realistically absorb.
    pub max_hours_per_day: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching: Option<MatchConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            window_minutes: 10,
            min_interval_seconds: 60,
            duration_floor_seconds: 30,
            duration_ratio: 0.2,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            goal_hours_per_day: 6.5,
            low_hours_per_day: 5.0,
            max_hours_per_day: 8.0,
        }
    }
}

impl Config {
    /// Reads configuration, returning defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| format!("reading {}", config_file_path.display()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError.to_string())?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Server settings after applying the `TIMEGRID_API_URL` override.
    ///
    /// Returns `None` only when neither the file nor the environment names a
    /// server.
    pub fn resolved_server(&self) -> Option<ServerConfig> {
        match (env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty()), &self.server) {
            (Some(api_url), Some(server)) => Some(ServerConfig {
                api_url,
                timeout_secs: server.timeout_secs,
            }),
            (Some(api_url), None) => Some(ServerConfig {
                api_url,
                ..ServerConfig::default()
            }),
            (None, server) => server.clone(),
        }
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: Message::ConfigModuleServer.to_string(),
            },
            ConfigModule {
                key: "matching".to_string(),
                name: Message::ConfigModuleMatching.to_string(),
            },
            ConfigModule {
                key: "calendar".to_string(),
                name: Message::ConfigModuleCalendar.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        timeout_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerTimeout.to_string())
                            .default(default.timeout_secs)
                            .interact_text()?,
                    });
                }
                "matching" => {
                    let default = config.matching.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMatching);
                    config.matching = Some(MatchConfig {
                        window_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMatchWindow.to_string())
                            .default(default.window_minutes)
                            .interact_text()?,
                        min_interval_seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMinIntervalSeconds.to_string())
                            .default(default.min_interval_seconds)
                            .interact_text()?,
                        duration_floor_seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDurationFloor.to_string())
                            .default(default.duration_floor_seconds)
                            .interact_text()?,
                        duration_ratio: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDurationRatio.to_string())
                            .default(default.duration_ratio)
                            .interact_text()?,
                    });
                }
                "calendar" => {
                    let default = config.calendar.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleCalendar);
                    config.calendar = Some(CalendarConfig {
                        goal_hours_per_day: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptGoalHours.to_string())
                            .default(default.goal_hours_per_day)
                            .interact_text()?,
                        low_hours_per_day: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLowHours.to_string())
                            .default(default.low_hours_per_day)
                            .interact_text()?,
                        max_hours_per_day: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxHours.to_string())
                            .default(default.max_hours_per_day)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
