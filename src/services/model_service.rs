use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    services::ai_client::{AiClientError, CompletionClient},
};

/// Calls the upstream chat-completion provider on behalf of the proxy.
pub struct ModelService {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    api_url: String,
    model: String,
    max_tokens: u32,
}

impl ModelService {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.deepseek_api_key.clone(),
            api_url: config.deepseek_api_url.clone(),
            model: config.deepseek_model.clone(),
            max_tokens: config.deepseek_max_tokens,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": self.max_tokens,
        })
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, AiClientError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(AiClientError::MissingCredential)?;

        log::info!(
            "Requesting completion from {} (model {}, prompt {} chars)",
            self.api_url,
            self.model,
            prompt.len()
        );

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key.expose_secret())
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach upstream model provider: {}", e);
                AiClientError::Http(e)
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read response body".to_string());

        if !status.is_success() {
            log::warn!("Upstream model provider returned {}: {}", status, response_text);
            return Err(AiClientError::Api {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let data = serde_json::from_str::<Value>(&response_text).map_err(|e| {
            log::error!("Failed to parse upstream response: {}", e);
            AiClientError::Parse(format!("{} | Response: {}", e, response_text))
        })?;

        Ok(extract_output(&data))
    }
}

#[async_trait]
impl CompletionClient for ModelService {
    async fn request_completion(&self, prompt: &str) -> Result<String, AiClientError> {
        self.complete(prompt).await
    }
}

/// Flattens a provider response into plain text. Tries the chat-style
/// `choices[0].message.content`, then completion-style `choices[0].text`, then
/// a top-level `output`, and finally dumps the whole document.
pub fn extract_output(data: &Value) -> String {
    let first_choice = data.get("choices").and_then(|c| c.get(0));

    let candidates = [
        first_choice
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content")),
        first_choice.and_then(|c| c.get("text")),
        data.get("output"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| data.to_string())
}
