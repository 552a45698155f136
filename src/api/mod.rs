//! API client for the tracker backend.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timegrid::api::Backend;
//! use timegrid::libs::calendar::ViewMode;
//! use timegrid::libs::config::ServerConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let backend = Backend::new(&ServerConfig::default())?;
//! let days = backend.hours(ViewMode::Month).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;

pub use backend::Backend;
