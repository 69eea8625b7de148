//! Command-line argument structures.

use clap::{Args, Parser, Subcommand};

use sentiment_client::DEFAULT_API_URL;

/// Log verbosity level for non-interactive output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Sentiment Analyzer - categorize the emotional tone of text.
///
/// If no subcommand is specified, starts the interactive TUI.
#[derive(Debug, Parser)]
#[command(name = "sentiment", version, about)]
pub struct Cli {
    /// Base URL of the sentiment analysis service.
    #[arg(long, env = "SENTIMENT_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Write trace-level logs to ./sentiment-debug.txt.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log verbosity for non-interactive commands.
    #[arg(long, value_enum, default_value_t = LogLevel::default(), global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a single text and print the result to stdout.
    Exec(ExecArgs),
}

#[derive(Debug, Args)]
pub struct ExecArgs {
    /// The text to analyze.
    pub text: String,
}
