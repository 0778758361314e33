use serde::{Deserialize, Serialize};

/// A short-answer question with its model answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ComprehensionItem {
    #[serde(alias = "q")]
    pub question: String,
    pub answer: String,
}

/// A multiple-choice question. `answer` holds the text of the correct option,
/// not its index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct McqItem {
    #[serde(alias = "q")]
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EssayUnit {
    pub title: String,
    #[serde(rename = "essay", alias = "essayText")]
    pub essay_text: String,
    #[serde(default)]
    pub comprehension: Vec<ComprehensionItem>,
    #[serde(default)]
    pub mcq: Vec<McqItem>,
}

/// One complete generated study set. Never mutated after assembly; a
/// regeneration produces a new value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyModule {
    pub date: String, // YYYY-MM-DD
    pub seed: u64,
    pub topic: String,
    pub essays: Vec<EssayUnit>,
}
