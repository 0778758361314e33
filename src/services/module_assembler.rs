use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    constants::prompts::module_prompt,
    models::{
        domain::{EssayUnit, StudyModule},
        dto::request::{GenerationMode, GenerationRequest},
    },
    services::{
        ai_client::CompletionClient,
        normalizer::normalize,
        placeholders::{comprehension_placeholders, mcq_placeholders, placeholder_essay},
        seed::{format_date, seed},
        topic_bank::pick,
    },
};

/// Builds study modules from the topic bank, optionally enriched by a model.
pub struct ModuleAssembler {
    client: Arc<dyn CompletionClient>,
}

impl ModuleAssembler {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Assembles one module. Never fails: a slot whose AI call errors keeps
    /// its placeholder content and the remaining slots are still attempted.
    pub async fn assemble(&self, request: &GenerationRequest, date: NaiveDate) -> StudyModule {
        let date = format_date(date);
        let seed = seed(&date);
        let base = pick(&request.topic, seed);
        log::info!("Picked base topic '{}' for {} (seed {})", base.title, date, seed);

        let mut essays = Vec::with_capacity(request.essay_count);

        for slot in 0..request.essay_count {
            let mut essay_text = placeholder_essay(base);
            let mut comprehension = comprehension_placeholders(request.comprehension_count);
            let mut mcq = mcq_placeholders(request.mcq_count);

            if request.mode == GenerationMode::Ai {
                let prompt = module_prompt(
                    base.prompt_topic,
                    request.comprehension_count,
                    request.mcq_count,
                );

                match self.client.request_completion(&prompt).await {
                    Ok(output) => {
                        let content = normalize(&output, &essay_text, comprehension, mcq);
                        log::info!("Essay slot {} normalized via {:?}", slot + 1, content.tier);
                        essay_text = content.essay;
                        comprehension = content.comprehension;
                        mcq = content.mcq;
                    }
                    Err(e) => {
                        log::warn!(
                            "AI generation failed for essay slot {}; using local placeholders: {}",
                            slot + 1,
                            e
                        );
                    }
                }
            }

            essays.push(EssayUnit {
                title: base.title.to_string(),
                essay_text,
                comprehension,
                mcq,
            });
        }

        StudyModule {
            date,
            seed,
            topic: request.topic.clone(),
            essays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ai_client::{AiClientError, MockCompletionClient};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn network_error() -> AiClientError {
        AiClientError::Api {
            status: 502,
            message: "simulated network failure".to_string(),
        }
    }

    #[actix_web::test]
    async fn local_mode_never_calls_the_client() {
        let mut client = MockCompletionClient::new();
        client.expect_request_completion().never();

        let assembler = ModuleAssembler::new(Arc::new(client));
        let request = GenerationRequest::new("history", GenerationMode::Local, 2, 3, 4);
        let module = assembler.assemble(&request, date()).await;

        assert_eq!(module.date, "2024-01-01");
        assert_eq!(module.seed, seed("2024-01-01"));
        assert_eq!(module.topic, "history");
        assert_eq!(module.essays.len(), 2);
        for essay in &module.essays {
            assert_eq!(essay.title, "Ashoka and Dhamma");
            assert!(essay.essay_text.starts_with("[Local placeholder]"));
            assert_eq!(essay.comprehension.len(), 3);
            assert_eq!(essay.mcq.len(), 4);
        }
    }

    #[actix_web::test]
    async fn failing_client_still_yields_full_module() {
        let mut client = MockCompletionClient::new();
        client
            .expect_request_completion()
            .times(3)
            .returning(|_| Err(network_error()));

        let assembler = ModuleAssembler::new(Arc::new(client));
        let request = GenerationRequest::new("mixed", GenerationMode::Ai, 3, 2, 2);
        let module = assembler.assemble(&request, date()).await;

        assert_eq!(module.essays.len(), 3);
        for essay in &module.essays {
            assert!(essay.essay_text.starts_with("[Local placeholder]"));
            assert_eq!(essay.comprehension, comprehension_placeholders(2));
            assert_eq!(essay.mcq, mcq_placeholders(2));
        }
    }

    #[actix_web::test]
    async fn slot_failures_are_isolated() {
        let mut client = MockCompletionClient::new();
        let mut seq = mockall::Sequence::new();
        client
            .expect_request_completion()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(r#"{"essay":"First AI essay"}"#.to_string()));
        client
            .expect_request_completion()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(network_error()));
        client
            .expect_request_completion()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("Third essay as prose".to_string()));

        let assembler = ModuleAssembler::new(Arc::new(client));
        let request = GenerationRequest::new("languages", GenerationMode::Ai, 3, 1, 1);
        let module = assembler.assemble(&request, date()).await;

        assert_eq!(module.essays[0].essay_text, "First AI essay");
        assert!(module.essays[1].essay_text.starts_with("[Local placeholder]"));
        assert_eq!(module.essays[2].essay_text, "Third essay as prose");
        assert!(module.essays.iter().all(|e| e.title == "Kumaran Asan"));
    }

    #[actix_web::test]
    async fn ai_prompt_names_topic_and_requested_counts() {
        let mut client = MockCompletionClient::new();
        client
            .expect_request_completion()
            .withf(|prompt| {
                prompt.starts_with("Discuss causes and consequences of the Revolt of 1857.")
                    && prompt.contains("Provide 5 comprehension Q&As and 6 MCQs")
            })
            .times(1)
            .returning(|_| {
                Ok(r#"{"essay":"E","comprehension":[{"question":"q","answer":"a"}],"mcq":[]}"#
                    .to_string())
            });

        let assembler = ModuleAssembler::new(Arc::new(client));
        let request = GenerationRequest::new("ssc_history", GenerationMode::Ai, 1, 5, 6);
        let module = assembler.assemble(&request, date()).await;

        let essay = &module.essays[0];
        assert_eq!(essay.essay_text, "E");
        // Model-supplied arrays are kept verbatim even when shorter than asked.
        assert_eq!(essay.comprehension.len(), 1);
        assert!(essay.mcq.is_empty());
    }

    #[actix_web::test]
    async fn unknown_topic_uses_default_group_but_keeps_requested_id() {
        let client = MockCompletionClient::new();
        let assembler = ModuleAssembler::new(Arc::new(client));
        let request = GenerationRequest::new("astrophysics", GenerationMode::Local, 1, 0, 0);
        let module = assembler.assemble(&request, date()).await;

        assert_eq!(module.topic, "astrophysics");
        assert_eq!(module.essays[0].title, "Comparative Politics");
    }
}
