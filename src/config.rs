use std::{env, path::PathBuf};

use secrecy::SecretString;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

#[derive(Clone, Debug)]
pub struct Config {
    pub deepseek_api_key: Option<SecretString>,
    pub deepseek_api_url: String,
    pub deepseek_model: String,
    pub deepseek_max_tokens: u32,
    pub web_server_host: String,
    pub web_server_port: u16,
    /// When set, the assembler reaches the model through this proxy over HTTP
    /// instead of calling the upstream service in-process.
    pub proxy_url: Option<String>,
    /// When set, modules are persisted as JSON files under this directory.
    pub storage_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            deepseek_api_key: env::var("DEEPSEEK_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            deepseek_api_url: env::var("DEEPSEEK_API_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
            deepseek_model: env::var("DEEPSEEK_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            deepseek_max_tokens: env::var("DEEPSEEK_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            proxy_url: env::var("QUIZHUB_PROXY_URL")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            storage_dir: env::var("QUIZHUB_STORAGE_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// A missing key is a per-request failure on the proxy, so this only warns.
    pub fn warn_if_unconfigured(&self) {
        if self.deepseek_api_key.is_none() {
            log::warn!(
                "DEEPSEEK_API_KEY is not set; AI requests will be rejected with 500 and modules fall back to placeholders"
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            deepseek_api_key: None,
            deepseek_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            deepseek_model: DEFAULT_MODEL.to_string(),
            deepseek_max_tokens: DEFAULT_MAX_TOKENS,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            proxy_url: None,
            storage_dir: None,
        }
    }
}
