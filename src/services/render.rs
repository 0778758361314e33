use crate::models::domain::{EssayUnit, StudyModule};

/// Plain-text rendering of a module for terminals and the status panel.
pub fn render_text(module: &StudyModule) -> String {
    let mut out = format!(
        "Study set for {} (seed {}, topic {})\n",
        module.date, module.seed, module.topic
    );

    for (idx, essay) in module.essays.iter().enumerate() {
        out.push_str(&render_essay(idx + 1, essay));
    }

    out
}

fn render_essay(number: usize, essay: &EssayUnit) -> String {
    let mut out = format!("\n{}. {}\n\n{}\n", number, essay.title, essay.essay_text);

    out.push_str("\nComprehension Questions\n");
    for (n, item) in essay.comprehension.iter().enumerate() {
        let line = if item.answer.is_empty() {
            format!("{}. {}\n", n + 1, item.question)
        } else {
            format!("{}. {} — {}\n", n + 1, item.question, item.answer)
        };
        out.push_str(&line);
    }

    out.push_str("\nMCQs\n");
    for mcq in &essay.mcq {
        let options = mcq
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}) {}", option_label(i), option))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&format!(
            "Q: {}\n   {}\n   Answer: {}\n",
            mcq.question, options, mcq.answer
        ));
    }

    out
}

fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{ComprehensionItem, McqItem};

    fn module() -> StudyModule {
        StudyModule {
            date: "2024-01-01".to_string(),
            seed: 42,
            topic: "history".to_string(),
            essays: vec![EssayUnit {
                title: "Ashoka and Dhamma".to_string(),
                essay_text: "Essay body.".to_string(),
                comprehension: vec![
                    ComprehensionItem {
                        question: "What is Dhamma?".to_string(),
                        answer: "A moral code.".to_string(),
                    },
                    ComprehensionItem {
                        question: "Unanswered?".to_string(),
                        answer: String::new(),
                    },
                ],
                mcq: vec![McqItem {
                    question: "Ashoka ruled which empire?".to_string(),
                    options: vec!["Maurya".into(), "Gupta".into(), "Chola".into(), "Kushan".into()],
                    answer: "Maurya".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn renders_numbered_essays_and_questions() {
        let text = render_text(&module());

        assert!(text.contains("1. Ashoka and Dhamma"));
        assert!(text.contains("Essay body."));
        assert!(text.contains("1. What is Dhamma? — A moral code."));
        assert!(text.contains("2. Unanswered?\n"));
        assert!(text.contains("A) Maurya  B) Gupta  C) Chola  D) Kushan"));
        assert!(text.contains("Answer: Maurya"));
    }

    #[test]
    fn layout_matches_line_by_line() {
        let text = render_text(&module());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Study set for 2024-01-01 (seed 42, topic history)");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "1. Ashoka and Dhamma");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Essay body.");
        assert_eq!(lines[6], "Comprehension Questions");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "MCQs");
        assert_eq!(lines[11], "Q: Ashoka ruled which empire?");
        assert_eq!(lines[13], "   Answer: Maurya");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn option_labels_run_through_alphabet() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(3), 'D');
        assert_eq!(option_label(1000), '?');
    }
}
