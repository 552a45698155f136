use crate::libs::formatter::{format_duration, format_hours};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct DurationArgs {
    /// Duration in seconds; negative values are formatted on their magnitude
    #[arg(allow_negative_numbers = true)]
    seconds: f64,

    /// Use the worklog style, `{h}h {m}m`
    #[arg(long)]
    hours: bool,
}

pub fn cmd(args: DurationArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

/// Formats the magnitude of the input. Values past the range of a duration
/// saturate; NaN and infinities are rejected.
fn render(args: &DurationArgs) -> Result<String> {
    if !args.seconds.is_finite() {
        msg_bail_anyhow!(Message::InvalidInput(args.seconds.to_string()));
    }
    let magnitude = args.seconds.abs();

    if args.hours {
        return Ok(format_hours(magnitude.floor() as i64));
    }
    // `as` saturates at i64::MAX, which is still a valid millisecond count.
    match Duration::try_milliseconds((magnitude * 1000.0).round() as i64) {
        Some(duration) => Ok(format_duration(&duration)),
        None => msg_bail_anyhow!(Message::InvalidInput(args.seconds.to_string())),
    }
}
