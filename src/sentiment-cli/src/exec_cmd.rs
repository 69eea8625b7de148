//! One-shot, non-interactive analysis for scripting.

use anyhow::Result;

use sentiment_client::SentimentClient;
use sentiment_core::{AnalysisEvent, AnalysisSession, AnalysisState, display_of};

/// Analyze `text` once and print the result, driving the same state machine
/// as the TUI so validation and error classification behave identically.
pub async fn run(client: &SentimentClient, text: &str) -> Result<()> {
    let mut session = AnalysisSession::new();
    session.apply(AnalysisEvent::TextChanged(text.to_owned()));

    if let Some(submission) = session.apply(AnalysisEvent::Submitted) {
        let outcome = client
            .analyze(&submission.text)
            .await
            .map_err(|error| error.to_analysis_error());
        session.apply(AnalysisEvent::Completed {
            request_id: submission.request_id,
            outcome,
        });
    }

    match session.state() {
        AnalysisState::Success { label } => {
            println!("{}", format_result(label));
            Ok(())
        }
        AnalysisState::Error { message } => anyhow::bail!("{message}"),
        // submit() always leaves a terminal state behind
        other => anyhow::bail!("analysis did not complete: {other:?}"),
    }
}

/// Render a raw label the way the TUI's result panel does, one line.
fn format_result(label: &str) -> String {
    let display = display_of(label);
    let mut chars = label.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{} {} - {}", display.emoji, capitalized, display.caption)
}
