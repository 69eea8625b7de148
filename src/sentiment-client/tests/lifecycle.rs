//! End-to-end lifecycle: drive the analysis state machine against a mocked
//! sentiment service, the same way the TUI does, and assert the terminal
//! states and derived display attributes.

use pretty_assertions::assert_eq;
use sentiment_client::SentimentClient;
use sentiment_core::{
    AnalysisEvent, AnalysisSession, AnalysisState, SentimentLabel, display_of,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Submit the session's current input and resolve it through the client.
async fn submit_and_resolve(session: &mut AnalysisSession, client: &SentimentClient) {
    let Some(submission) = session.apply(AnalysisEvent::Submitted) else {
        return;
    };
    assert!(session.state().is_pending());

    let outcome = client
        .analyze(&submission.text)
        .await
        .map_err(|error| error.to_analysis_error());
    session.apply(AnalysisEvent::Completed {
        request_id: submission.request_id,
        outcome,
    });
}

#[tokio::test]
async fn positive_text_reaches_success_with_positive_display() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"sentiment": "positive"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri());
    let mut session = AnalysisSession::new();
    session.apply(AnalysisEvent::TextChanged("I love this!".to_owned()));
    submit_and_resolve(&mut session, &client).await;

    let AnalysisState::Success { label } = session.state() else {
        panic!("expected success, got {:?}", session.state());
    };
    assert_eq!(label, "positive");
    let display = display_of(label);
    assert_eq!(display.label, SentimentLabel::Positive);
    assert_eq!(display.emoji, "😊");
    assert_eq!(display.caption, "This text expresses positive emotions");
}

#[tokio::test]
async fn whitespace_input_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri());
    let mut session = AnalysisSession::new();
    session.apply(AnalysisEvent::TextChanged("   ".to_owned()));
    submit_and_resolve(&mut session, &client).await;

    assert_eq!(
        session.state(),
        &AnalysisState::Error {
            message: "Please enter some text to analyze".to_owned()
        }
    );
    server.verify().await;
}

#[tokio::test]
async fn server_error_reaches_the_generic_request_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri());
    let mut session = AnalysisSession::new();
    session.apply(AnalysisEvent::TextChanged("hello".to_owned()));
    submit_and_resolve(&mut session, &client).await;

    assert_eq!(
        session.state(),
        &AnalysisState::Error {
            message: "Failed to analyze sentiment".to_owned()
        }
    );
}

#[tokio::test]
async fn unreachable_service_reaches_the_transport_message() {
    let client = SentimentClient::new("http://127.0.0.1:9");
    let mut session = AnalysisSession::new();
    session.apply(AnalysisEvent::TextChanged("hello".to_owned()));
    submit_and_resolve(&mut session, &client).await;

    assert_eq!(
        session.state(),
        &AnalysisState::Error {
            message:
                "Failed to connect to the sentiment API. Make sure the backend is running."
                    .to_owned()
        }
    );
}

#[tokio::test]
async fn unexpected_label_succeeds_and_displays_as_neutral() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"sentiment": "sarcastic"})),
        )
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri());
    let mut session = AnalysisSession::new();
    session.apply(AnalysisEvent::TextChanged("how wonderful".to_owned()));
    submit_and_resolve(&mut session, &client).await;

    let AnalysisState::Success { label } = session.state() else {
        panic!("expected success, got {:?}", session.state());
    };
    assert_eq!(label, "sarcastic");
    let display = display_of(label);
    assert_eq!(display.label, SentimentLabel::Neutral);
    assert_eq!(display.emoji, "😐");
    assert_eq!(display.caption, "This text has a neutral tone");
}
