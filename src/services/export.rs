use serde::Serialize;

use crate::{errors::AppResult, models::domain::StudyModule};

/// A downloadable module document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedModule {
    pub file_name: String,
    pub contents: String,
}

pub fn file_name(module: &StudyModule) -> String {
    format!("ai_quiz_module_{}.json", module.date)
}

pub fn to_export_json(module: &StudyModule) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(module)?)
}

pub fn from_export_json(contents: &str) -> AppResult<StudyModule> {
    Ok(serde_json::from_str(contents)?)
}

pub fn export(module: &StudyModule) -> AppResult<ExportedModule> {
    Ok(ExportedModule {
        file_name: file_name(module),
        contents: to_export_json(module)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_module;

    #[test]
    fn export_round_trip_preserves_module() {
        let module = sample_module("2024-05-06", 3);

        let exported = export(&module).unwrap();
        let parsed = from_export_json(&exported.contents).unwrap();

        assert_eq!(parsed, module);
        assert_eq!(parsed.essays[2].title, module.essays[2].title);
    }

    #[test]
    fn export_is_pretty_printed_and_named_by_date() {
        let module = sample_module("2024-05-06", 1);
        let exported = export(&module).unwrap();

        assert_eq!(exported.file_name, "ai_quiz_module_2024-05-06.json");
        assert!(exported.contents.contains("\n  \"date\": \"2024-05-06\""));
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(from_export_json("{not json").is_err());
    }
}
