use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use super::types::{CompletionRequest, CompletionResponse, ProviderAdapter, ProviderError};

pub const DEFAULT_ENDPOINT: &str = "https://aipipe.org/openai/v1/chat/completions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct OpenAIConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Chat-completions client for the OpenAI-compatible proxy. One attempt per
/// call, bounded by the configured timeout.
pub struct OpenAIAdapter {
    cfg: OpenAIConfig,
    client: Client,
}

impl OpenAIAdapter {
    pub fn new(cfg: OpenAIConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|err| ProviderError::Network(err.to_string()))?;
        Ok(Self { cfg, client })
    }
}

#[async_trait]
impl ProviderAdapter for OpenAIAdapter {
    async fn send(&self, api_key: &str, request: &CompletionRequest) -> Result<String, ProviderError> {
        debug!(endpoint = %self.cfg.endpoint, model = %request.model, "sending chat completion");
        let resp = self
            .client
            .post(&self.cfg.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "upstream returned an error status");
            return Err(ProviderError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let parsed = resp.json::<CompletionResponse>().await?;
        parse_response(parsed)
    }
}

fn parse_response(parsed: CompletionResponse) -> Result<String, ProviderError> {
    let first = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Decode("response contained no choices".to_string()))?;
    Ok(first.message.content.trim().to_string())
}
