//! Text Generation Client
//!
//! Thin client over an external text generation endpoint. The trait
//! seam exists so the chat flow can be tested without the network.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Generation error, the caller decides how to degrade
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerateError>;
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

/// HTTP-backed generator
pub struct HttpTextGenerator {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpTextGenerator {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerateError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({
                "prompt": prompt,
                "max_tokens": max_tokens,
            }))
            .timeout(Duration::from_secs(30));
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status.as_u16()));
        }

        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| GenerateError::Malformed(e.to_string()))?;
        Ok(body.text)
    }
}
