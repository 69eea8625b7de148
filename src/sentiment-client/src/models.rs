//! Wire types for the sentiment service API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /sentiment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to analyze, snapshotted at submission time.
    pub text: String,
}

/// Response body of `POST /sentiment`.
///
/// Deserialization enforces the shape at the boundary; the label *value* is
/// intentionally left unvalidated and flows through to display fail-open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Raw sentiment label as produced by the service.
    pub sentiment: String,
}
