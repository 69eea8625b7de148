//! Application events delivered back to the UI loop from spawned tasks.

use sentiment_core::AnalysisError;

/// Messages from background tasks to the main loop.
///
/// Terminal input and ticks are consumed directly in the loop's `select!`;
/// this channel only carries results of the async work.
#[derive(Debug)]
pub enum AppEvent {
    /// The analysis request identified by `request_id` finished.
    AnalysisCompleted {
        request_id: u64,
        outcome: Result<String, AnalysisError>,
    },
    /// Result of the startup health probe against the backend.
    HealthChecked(bool),
}
