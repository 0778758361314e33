use crate::models::domain::{ComprehensionItem, McqItem, TopicEntry};

pub fn placeholder_essay(topic: &TopicEntry) -> String {
    format!(
        "[Local placeholder] {}\n\n(Enable AI mode for AI-generated output.)",
        topic.prompt_topic
    )
}

pub fn comprehension_placeholders(count: usize) -> Vec<ComprehensionItem> {
    (1..=count)
        .map(|i| ComprehensionItem {
            question: format!("Comprehension Q{i}?"),
            answer: "[Answer]".to_string(),
        })
        .collect()
}

pub fn mcq_placeholders(count: usize) -> Vec<McqItem> {
    (1..=count)
        .map(|i| McqItem {
            question: format!("MCQ {i}?"),
            options: ["A", "B", "C", "D"].map(String::from).to_vec(),
            answer: "A".to_string(),
        })
        .collect()
}
