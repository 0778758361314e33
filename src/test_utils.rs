#[cfg(test)]
pub mod fixtures {
    use crate::{
        models::domain::{ComprehensionItem, EssayUnit, McqItem, StudyModule},
        services::seed::seed,
    };

    /// A module shaped like model output, with `essays` distinct essay units.
    pub fn sample_module(date: &str, essays: usize) -> StudyModule {
        StudyModule {
            date: date.to_string(),
            seed: seed(date),
            topic: "political_science".to_string(),
            essays: (1..=essays).map(sample_essay).collect(),
        }
    }

    pub fn sample_essay(n: usize) -> EssayUnit {
        EssayUnit {
            title: format!("Essay {n}"),
            essay_text: format!("Body of essay {n}.\n\nSecond paragraph with \"quotes\"."),
            comprehension: vec![ComprehensionItem {
                question: format!("What does essay {n} argue?"),
                answer: "That order matters.".to_string(),
            }],
            mcq: vec![McqItem {
                question: format!("Which number is essay {n}?"),
                options: vec![n.to_string(), "x".into(), "y".into(), "z".into()],
                answer: n.to_string(),
            }],
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_module() {
        let module = sample_module("2024-02-03", 2);
        assert_eq!(module.essays.len(), 2);
        assert_eq!(module.essays[1].title, "Essay 2");
        assert_eq!(module.seed, crate::services::seed::seed("2024-02-03"));
    }

    #[test]
    fn test_fixtures_sample_essay_answer_is_an_option() {
        let essay = sample_essay(4);
        assert!(essay.mcq[0].options.contains(&essay.mcq[0].answer));
    }
}
