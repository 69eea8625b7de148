//! HTTP client for the remote sentiment analysis service.
//!
//! The service is an opaque oracle: this crate only knows how to carry text
//! to it and bring a raw label back. Transport detail stays in [`ApiError`]
//! (and in the logs); the fixed user-facing messages live in
//! [`sentiment_core::AnalysisError`], which [`ApiError::to_analysis_error`]
//! classifies into.

mod client;
mod models;

pub use client::SentimentClient;
pub use models::{AnalyzeRequest, AnalyzeResponse};

use sentiment_core::AnalysisError;

/// Default base URL of the sentiment analysis service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Errors from talking to the sentiment service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service could not be reached (DNS failure, refused connection,
    /// any transport-level error while sending).
    #[error("failed to reach the sentiment endpoint")]
    Connection(#[source] reqwest::Error),

    /// The service answered with a non-success status. The status is kept
    /// for logging; the user only ever sees the generic request message.
    #[error("sentiment endpoint returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The service answered 2xx but the body did not match the expected
    /// `{"sentiment": string}` shape.
    #[error("sentiment endpoint returned a malformed body")]
    Malformed(#[source] reqwest::Error),
}

impl ApiError {
    /// Classify into the user-facing taxonomy. Only the reachability split
    /// survives; status and body detail are deliberately discarded.
    pub fn to_analysis_error(&self) -> AnalysisError {
        match self {
            ApiError::Connection(_) => AnalysisError::Transport,
            ApiError::Status { .. } | ApiError::Malformed(_) => AnalysisError::Request,
        }
    }
}

/// Result type for sentiment service operations.
pub type Result<T> = std::result::Result<T, ApiError>;
