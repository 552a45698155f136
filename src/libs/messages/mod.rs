//! User-facing messages.
//!
//! [`Message`] holds every text the commands print, [`display`] renders it
//! and the `msg_*!` macros in [`macros`] choose between stdout and `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
