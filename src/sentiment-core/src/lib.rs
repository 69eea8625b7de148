//! Core domain logic for the sentiment analyzer.
//!
//! This crate owns the request lifecycle: the [`AnalysisSession`] state
//! machine that takes a submission from raw text through validation into a
//! pending request and on to a terminal success or error, plus the pure
//! mapping from a sentiment label to its display attributes. It performs no
//! I/O; issuing the actual network call is the caller's job.

mod display;
mod state;

pub use display::{DisplayAttributes, SentimentLabel, display_of};
pub use state::{AnalysisEvent, AnalysisSession, AnalysisState, Submission};

/// User-facing failures of a single submission.
///
/// The `Display` messages are the exact strings surfaced in the UI. Richer
/// transport detail is kept (and logged) by the client layer; it is
/// deliberately not echoed to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The input was empty or whitespace-only; no request was issued.
    #[error("Please enter some text to analyze")]
    Validation,

    /// The service answered with a non-success status or an unusable body.
    #[error("Failed to analyze sentiment")]
    Request,

    /// The service could not be reached at all.
    #[error("Failed to connect to the sentiment API. Make sure the backend is running.")]
    Transport,
}
