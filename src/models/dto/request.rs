use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::topic_bank::DEFAULT_TOPIC;

/// Body accepted by the proxy endpoint. `prompt` is optional at the type level
/// so that a missing prompt becomes a 400 instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProxyRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Local,
    #[serde(alias = "deepseek")]
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct GenerationRequest {
    #[serde(default = "default_topic")]
    #[validate(length(min = 1, max = 100))]
    pub topic: String,

    #[serde(default)]
    pub mode: GenerationMode,

    #[serde(default = "default_essay_count")]
    #[validate(range(min = 1, max = 10))]
    pub essay_count: usize,

    #[serde(default = "default_comprehension_count")]
    #[validate(range(max = 50))]
    pub comprehension_count: usize,

    #[serde(default = "default_mcq_count")]
    #[validate(range(max = 50))]
    pub mcq_count: usize,
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

fn default_essay_count() -> usize {
    1
}

fn default_comprehension_count() -> usize {
    10
}

fn default_mcq_count() -> usize {
    2
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            mode: GenerationMode::default(),
            essay_count: default_essay_count(),
            comprehension_count: default_comprehension_count(),
            mcq_count: default_mcq_count(),
        }
    }
}

impl GenerationRequest {
    pub fn new(
        topic: &str,
        mode: GenerationMode,
        essay_count: usize,
        comprehension_count: usize,
        mcq_count: usize,
    ) -> Self {
        Self {
            topic: topic.to_string(),
            mode,
            essay_count,
            comprehension_count,
            mcq_count,
        }
    }
}
