//! Sentiment Analyzer CLI - main entry point.
//!
//! Starts the interactive TUI by default; `exec` runs a single analysis for
//! scripting. Logging goes to a file in debug mode so it never corrupts the
//! TUI's terminal output.

use anyhow::Result;
use clap::Parser;

use sentiment_cli::{Cli, Commands, exec_cmd};
use sentiment_client::SentimentClient;

/// Guard that keeps the debug log writer alive (and flushing) for the whole
/// process lifetime.
struct DebugLogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Write ALL trace-level logs to ./sentiment-debug.txt.
fn setup_debug_file_logging() -> Result<DebugLogGuard> {
    use std::fs::File;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let path = std::env::current_dir()?.join("sentiment-debug.txt");
    let file = File::create(&path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("trace"))
        .with(file_layer)
        .init();

    eprintln!("Debug mode enabled: logging to {}", path.display());
    Ok(DebugLogGuard { _guard: guard })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Debug mode logs to a file; otherwise non-interactive commands log to
    // stderr and the TUI stays silent.
    let _debug_guard = if cli.debug {
        Some(setup_debug_file_logging()?)
    } else {
        if cli.command.is_some() {
            let filter = std::env::var("RUST_LOG")
                .unwrap_or_else(|_| cli.log_level.as_filter_str().to_owned());
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
        None
    };

    let client = SentimentClient::new(cli.api_url);
    match cli.command {
        Some(Commands::Exec(args)) => exec_cmd::run(&client, &args.text).await,
        None => sentiment_tui::run(client).await,
    }
}
