//! Reqwest-backed chat-completion generator.
//!
//! Sends the prompt turns verbatim as `messages` and relays the first choice.
//! A missing API key fails before any request is made.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{ChatRequestDto, ChatResponseDto};
use crate::domain::SummaryPrompt;
use crate::domain::ports::{SummaryGenerator, SummaryGeneratorError};
use crate::outbound::http_support::{body_preview, with_trailing_slash};

const COMPLETIONS_PATH: &str = "chat/completions";

/// Summary generator posting to `{base}/chat/completions` with bearer auth.
pub struct ChatCompletionGenerator {
    client: Client,
    base_url: Url,
    api_key: Option<Zeroizing<String>>,
}

impl ChatCompletionGenerator {
    /// Build a generator using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: Option<Zeroizing<String>>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
            api_key,
        })
    }
}

#[async_trait]
impl SummaryGenerator for ChatCompletionGenerator {
    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<String, SummaryGeneratorError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(SummaryGeneratorError::not_configured)?;
        let endpoint = self.base_url.join(COMPLETIONS_PATH).map_err(|error| {
            SummaryGeneratorError::transport(format!("invalid completion endpoint: {error}"))
        })?;

        debug!(model = %prompt.model, turns = prompt.turns.len(), "requesting completion");
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(api_key.as_str())
            .json(&ChatRequestDto::from(prompt))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_completion(body.as_ref())
    }
}

fn parse_completion(body: &[u8]) -> Result<String, SummaryGeneratorError> {
    let decoded: ChatResponseDto = serde_json::from_slice(body).map_err(|error| {
        SummaryGeneratorError::decode(format!("invalid completion payload: {error}"))
    })?;
    decoded
        .into_first_content()
        .ok_or_else(SummaryGeneratorError::empty_completion)
}

fn map_transport_error(error: reqwest::Error) -> SummaryGeneratorError {
    if error.is_timeout() {
        SummaryGeneratorError::timeout(error.to_string())
    } else {
        SummaryGeneratorError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SummaryGeneratorError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        preview
    };
    SummaryGeneratorError::status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommitMessage, SummaryModel};
    use rstest::rstest;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prompt() -> SummaryPrompt {
        SummaryPrompt::from_commits(
            SummaryModel::Grok2,
            vec![CommitMessage::new("Fix login"), CommitMessage::new("Add signup")],
        )
    }

    fn generator(
        server: &MockServer,
        key: Option<&str>,
        timeout: Duration,
    ) -> ChatCompletionGenerator {
        let base = Url::parse(&server.uri()).expect("mock server url");
        ChatCompletionGenerator::new(base, key.map(|k| Zeroizing::new(k.to_owned())), timeout)
            .expect("client builds")
    }

    #[tokio::test]
    async fn posts_one_user_message_per_turn_and_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer xai-test"))
            .and(body_json(json!({
                "model": "grok-2-1212",
                "messages": [
                    {"role": "user", "content": "Fix login"},
                    {"role": "user", "content": "Add signup"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "Two fixes"}},
                    {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = generator(&server, Some("xai-test"), Duration::from_secs(5))
            .summarize(&prompt())
            .await
            .expect("summary");

        assert_eq!(summary, "Two fixes");
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let error = generator(&server, None, Duration::from_secs(5))
            .summarize(&prompt())
            .await
            .expect_err("unconfigured generator must fail");

        assert_eq!(error, SummaryGeneratorError::not_configured());
    }

    #[tokio::test]
    async fn error_statuses_carry_the_upstream_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Incorrect API key"})),
            )
            .mount(&server)
            .await;

        let error = generator(&server, Some("bad"), Duration::from_secs(5))
            .summarize(&prompt())
            .await
            .expect_err("401 must fail");

        assert!(matches!(error, SummaryGeneratorError::Status { status: 401, .. }));
        assert!(error.to_string().contains("Incorrect API key"));
    }

    #[tokio::test]
    async fn slow_completions_time_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let error = generator(&server, Some("xai-test"), Duration::from_millis(50))
            .summarize(&prompt())
            .await
            .expect_err("slow upstream must fail");

        assert!(matches!(error, SummaryGeneratorError::Timeout { .. }));
    }

    #[rstest]
    #[case(json!({"choices": []}))]
    #[case(json!({}))]
    #[case(json!({"choices": [{"message": {"role": "assistant"}}]}))]
    #[case(json!({"choices": [{"finish_reason": "length"}]}))]
    fn responses_without_content_are_empty_completions(#[case] body: serde_json::Value) {
        let bytes = serde_json::to_vec(&body).expect("serialise");
        assert_eq!(
            parse_completion(&bytes),
            Err(SummaryGeneratorError::empty_completion())
        );
    }

    #[test]
    fn non_json_bodies_are_decode_errors() {
        assert!(matches!(
            parse_completion(b"<html>"),
            Err(SummaryGeneratorError::Decode { .. })
        ));
    }
}
