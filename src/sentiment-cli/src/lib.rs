//! Command-line entry point for the sentiment analyzer.
//!
//! - `sentiment` - interactive TUI (default)
//! - `sentiment exec <TEXT>` - one-shot analysis for scripting

pub mod cli;
pub mod exec_cmd;

pub use cli::{Cli, Commands, LogLevel};
