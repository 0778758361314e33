use serde::Serialize;

/// A candidate essay topic from the built-in bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicEntry {
    pub title: &'static str,
    pub prompt_topic: &'static str,
}
