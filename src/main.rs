use timegrid::commands::Cli;
use timegrid::libs::messages::macros::is_debug_mode;
use timegrid::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timegrid=debug")))
            .with_target(false)
            .init();
    }

    if let Err(e) = Cli::menu().await {
        let message = format!("{:#}", e);
        msg_error!(message.trim_start_matches("❌ "));
        std::process::exit(1);
    }
}
