//! The analysis lifecycle state machine.
//!
//! One tagged union holds the entire submission lifecycle, so invalid
//! combinations (a result and an error at the same time, an error while a
//! request is in flight) are not representable. State only changes through
//! [`AnalysisSession::apply`], reducer style.

use crate::AnalysisError;

/// Lifecycle state of the current submission. Exactly one holds at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Transient, synchronous: a submission attempt is being validated.
    Validating,
    /// A request is in flight. `request_id` identifies it so a completion
    /// from a superseded request can be dropped.
    Pending { request_id: u64 },
    /// Terminal: the service answered with a raw sentiment label. The value
    /// is kept verbatim; display styling is derived fail-open at render time.
    Success { label: String },
    /// Terminal: validation failed or the request failed.
    Error { message: String },
}

impl AnalysisState {
    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisState::Pending { .. })
    }
}

/// A validated submission handed to the caller to send over the wire.
///
/// `text` is a trimmed snapshot of the input at submission time, not a live
/// reference; later edits do not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub request_id: u64,
    pub text: String,
}

/// Events that drive the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisEvent {
    /// The user edited the input. Replaces the text unconditionally; no
    /// validation happens until submission.
    TextChanged(String),
    /// The user triggered an analysis.
    Submitted,
    /// The request identified by `request_id` finished.
    Completed {
        request_id: u64,
        outcome: Result<String, AnalysisError>,
    },
}

/// Owns the input text and the lifecycle state for one analysis surface.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    input: String,
    state: AnalysisState,
    next_request_id: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw input text as last edited.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Whether the submit trigger should be enabled: no request in flight
    /// and the trimmed input is non-empty.
    pub fn can_submit(&self) -> bool {
        !self.state.is_pending() && !self.input.trim().is_empty()
    }

    /// Apply an event, returning a [`Submission`] when a valid submission
    /// was accepted and the caller should issue the network request.
    pub fn apply(&mut self, event: AnalysisEvent) -> Option<Submission> {
        match event {
            AnalysisEvent::TextChanged(value) => {
                self.input = value;
                None
            }
            AnalysisEvent::Submitted => self.submit(),
            AnalysisEvent::Completed {
                request_id,
                outcome,
            } => {
                self.complete(request_id, outcome);
                None
            }
        }
    }

    /// Validate the current input and move into `Pending` if it passes.
    ///
    /// A no-op while a request is already in flight: at most one request is
    /// ever outstanding.
    fn submit(&mut self) -> Option<Submission> {
        if self.state.is_pending() {
            return None;
        }

        // Every attempt passes through Validating, clearing any prior
        // Success or Error before the outcome is known.
        self.state = AnalysisState::Validating;

        let text = self.input.trim();
        if text.is_empty() {
            self.state = AnalysisState::Error {
                message: AnalysisError::Validation.to_string(),
            };
            return None;
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.state = AnalysisState::Pending { request_id };
        Some(Submission {
            request_id,
            text: text.to_owned(),
        })
    }

    /// Resolve the in-flight request to its terminal state.
    ///
    /// Completions whose `request_id` does not match the in-flight request
    /// are dropped; a stale response can never clobber a newer submission.
    fn complete(&mut self, request_id: u64, outcome: Result<String, AnalysisError>) {
        match self.state {
            AnalysisState::Pending {
                request_id: in_flight,
            } if in_flight == request_id => {}
            _ => {
                tracing::debug!(request_id, "dropping completion for superseded request");
                return;
            }
        }

        self.state = match outcome {
            Ok(label) => AnalysisState::Success { label },
            Err(error) => AnalysisState::Error {
                message: error.to_string(),
            },
        };
    }
}
