// src/services/openrouter.rs
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{self, Config};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("response was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
    /// The upstream answered with JSON that has no usable `choices` entry.
    /// Carries the raw payload for the caller's diagnostics.
    #[error("model response had no choices")]
    Shape(Value),
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [OutboundMessage<'a>; 1],
    http_referer: &'a str,
    http_user_agent: &'a str,
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Thin client for the OpenRouter chat-completion endpoint. One POST per
/// call, fixed timeout, no retries.
#[derive(Clone, Debug)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_url(config, config::UPSTREAM_URL)
    }

    /// Same client pointed at a different completion URL. Tests use this to
    /// swap in a local mock server.
    pub fn with_url(config: &Config, url: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_timeout(config, url, config::UPSTREAM_TIMEOUT)
    }

    /// Client with an explicit request timeout. Production uses the fixed
    /// default; tests shorten it to exercise the timeout path.
    pub fn with_timeout(
        config: &Config,
        url: impl Into<String>,
        timeout: std::time::Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            url: url.into(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Send one prompt as a single-message conversation and return the text
    /// of the first choice.
    pub async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        let payload = CompletionRequest {
            model: &self.model,
            messages: [OutboundMessage {
                role: "user",
                content: prompt,
            }],
            http_referer: config::REFERER,
            http_user_agent: config::USER_AGENT,
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", config::REFERER)
            .header("X-Title", config::APP_TITLE)
            .header("OR-PROMPT-TRAINING", "allow")
            .json(&payload)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let output: Value = response.json().await.map_err(UpstreamError::Decode)?;
        tracing::debug!(raw = %output, "OpenRouter raw response");

        match output
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.pointer("/message/content"))
            .and_then(Value::as_str)
        {
            Some(content) => Ok(content.to_string()),
            None => Err(UpstreamError::Shape(output)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> Config {
        Config {
            api_key: "test-key".to_string(),
            model: config::MODEL.to_string(),
            codebase_file: "codebase.txt".to_string(),
            static_dir: "static".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }

    #[tokio::test]
    async fn extracts_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(header("OR-PROMPT-TRAINING", "allow"))
            .and(body_string_contains("what is a tick"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "A tick is a simulation step."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            OpenRouterClient::with_url(&test_config(), format!("{}/chat/completions", server.uri()))
                .unwrap();
        let reply = client.complete("what is a tick").await.unwrap();
        assert_eq!(reply, "A tick is a simulation step.");
    }

    #[tokio::test]
    async fn empty_choices_is_a_shape_error_with_raw_payload() {
        let server = MockServer::start().await;
        let body = json!({"choices": [], "id": "gen-123"});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_url(&test_config(), server.uri()).unwrap();
        match client.complete("hello").await {
            Err(UpstreamError::Shape(raw)) => assert_eq!(raw, body),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_url(&test_config(), server.uri()).unwrap();
        assert!(matches!(
            client.complete("hello").await,
            Err(UpstreamError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "choices": [{"message": {"content": "too late"}}]
                    }))
                    .set_delay(std::time::Duration::from_millis(250)),
            )
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_timeout(
            &test_config(),
            server.uri(),
            std::time::Duration::from_millis(50),
        )
        .unwrap();
        assert!(matches!(
            client.complete("hello").await,
            Err(UpstreamError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_transport_error() {
        // A non-pooled server: pooled servers (`MockServer::start`) keep
        // listening after drop, so the port would still answer with a 404.
        let server = MockServer::builder().start().await;
        let url = server.uri();
        drop(server);

        let client = OpenRouterClient::with_url(&test_config(), url).unwrap();
        assert!(matches!(
            client.complete("hello").await,
            Err(UpstreamError::Transport(_))
        ));
    }
}
