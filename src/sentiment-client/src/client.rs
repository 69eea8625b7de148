//! Sentiment service client implementation.

use crate::models::{AnalyzeRequest, AnalyzeResponse};
use crate::{ApiError, DEFAULT_API_URL, Result};

/// Client for the remote sentiment analysis service.
///
/// Deliberately thin: one request per call, no retries, and no client-side
/// timeout. How long a request may stay in flight is governed by the
/// transport's defaults, matching the single-suspension-point lifecycle the
/// state machine expects.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    client: reqwest::Client,
    base_url: String,
}

impl SentimentClient {
    /// Create a client for the given base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client for the default local service URL.
    pub fn new_default() -> Self {
        Self::new(DEFAULT_API_URL)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Submit text for analysis and return the raw sentiment label.
    ///
    /// Exactly one `POST /sentiment` is issued per call. Any non-success
    /// status is a failure regardless of body content.
    pub async fn analyze(&self, text: &str) -> Result<String> {
        let request = AnalyzeRequest {
            text: text.to_owned(),
        };

        let response = self
            .client
            .post(self.endpoint("sentiment"))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Connection)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "sentiment endpoint rejected the request");
            return Err(ApiError::Status { status });
        }

        let body: AnalyzeResponse = response.json().await.map_err(ApiError::Malformed)?;
        tracing::debug!(sentiment = %body.sentiment, "analysis completed");
        Ok(body.sentiment)
    }

    /// Check whether the service is reachable via `GET /health`.
    ///
    /// Purely informational; analysis may still be attempted after a failed
    /// check.
    pub async fn check_health(&self) -> Result<()> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(ApiError::Connection)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use sentiment_core::AnalysisError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_sentiment(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn analyze_sends_the_text_as_json_and_returns_the_label() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sentiment"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"text": "I love this!"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"sentiment": "positive"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SentimentClient::new(server.uri());
        let label = client.analyze("I love this!").await.expect("analysis");
        assert_eq!(label, "positive");
    }

    #[tokio::test]
    async fn analyze_passes_unrecognized_labels_through_unchanged() {
        let server = MockServer::start().await;
        mock_sentiment(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"sentiment": "sarcastic"})),
        )
        .await;

        let client = SentimentClient::new(server.uri());
        let label = client.analyze("well then").await.expect("analysis");
        assert_eq!(label, "sarcastic");
    }

    #[tokio::test]
    async fn non_success_status_is_a_request_failure() {
        let server = MockServer::start().await;
        mock_sentiment(&server, ResponseTemplate::new(500)).await;

        let client = SentimentClient::new(server.uri());
        let error = client.analyze("hello").await.unwrap_err();
        assert_matches!(error, ApiError::Status { status } if status.as_u16() == 500);
        assert_eq!(error.to_analysis_error(), AnalysisError::Request);
        assert_eq!(
            error.to_analysis_error().to_string(),
            "Failed to analyze sentiment"
        );
    }

    #[tokio::test]
    async fn malformed_body_is_a_request_failure() {
        let server = MockServer::start().await;
        mock_sentiment(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"mood": "happy"})),
        )
        .await;

        let client = SentimentClient::new(server.uri());
        let error = client.analyze("hello").await.unwrap_err();
        assert_matches!(error, ApiError::Malformed(_));
        assert_eq!(error.to_analysis_error(), AnalysisError::Request);
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_failure() {
        // Port 9 (discard) is never listening locally.
        let client = SentimentClient::new("http://127.0.0.1:9");
        let error = client.analyze("hello").await.unwrap_err();
        assert_matches!(error, ApiError::Connection(_));
        assert_eq!(error.to_analysis_error(), AnalysisError::Transport);
        assert_eq!(
            error.to_analysis_error().to_string(),
            "Failed to connect to the sentiment API. Make sure the backend is running."
        );
    }

    #[tokio::test]
    async fn health_check_reports_reachability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "healthy"})),
            )
            .mount(&server)
            .await;

        let client = SentimentClient::new(server.uri());
        client.check_health().await.expect("healthy");

        let client = SentimentClient::new("http://127.0.0.1:9");
        assert_matches!(
            client.check_health().await.unwrap_err(),
            ApiError::Connection(_)
        );
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let client = SentimentClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint("sentiment"), "http://localhost:8000/sentiment");
        assert_eq!(client.base_url(), "http://localhost:8000/");
    }
}
