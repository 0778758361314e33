use serde::{Deserialize, Serialize};

/// Successful proxy reply: `{"output": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProxyResponse {
    #[serde(default)]
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<&'static str>,
    pub default_topic: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveModuleResponse {
    pub message: String,
    pub history_len: usize,
}
