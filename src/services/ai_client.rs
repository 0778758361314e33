use async_trait::async_trait;
use thiserror::Error;

use crate::models::dto::{request::ProxyRequest, response::ProxyResponse};

/// Relative path of the completion proxy endpoint.
pub const PROXY_PATH: &str = "/api/deepseek";

/// Errors raised by a single completion request.
#[derive(Debug, Error)]
pub enum AiClientError {
    /// Transport failure before any status was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote side answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the remote side.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// No upstream API key is configured.
    #[error("DEEPSEEK_API_KEY not set on server.")]
    MissingCredential,

    /// The response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Sends one prompt to a text-generation backend and returns the raw text.
/// Implementations make exactly one attempt per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn request_completion(&self, prompt: &str) -> Result<String, AiClientError>;
}

/// Calls the completion proxy over HTTP: `{"prompt"}` in, `{"output"}` out.
pub struct ProxyCompletionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProxyCompletionClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PROXY_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for ProxyCompletionClient {
    async fn request_completion(&self, prompt: &str) -> Result<String, AiClientError> {
        let body = ProxyRequest {
            prompt: Some(prompt.to_string()),
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::warn!("Completion proxy returned {}: {}", status, message);
            return Err(AiClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let parsed: ProxyResponse = serde_json::from_str(&text)
            .map_err(|e| AiClientError::Parse(format!("{} | Response: {}", e, text)))?;

        Ok(parsed.output)
    }
}
