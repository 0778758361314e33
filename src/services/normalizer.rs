//! Turns free-form model output into essay content.
//!
//! Three tiers are tried in order and each one falls through on failure:
//! the whole text as JSON, a JSON object embedded in surrounding prose, and
//! finally the raw text as the essay body.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::domain::{ComprehensionItem, McqItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeTier {
    WholeJson,
    EmbeddedJson,
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContent {
    pub essay: String,
    pub comprehension: Vec<ComprehensionItem>,
    pub mcq: Vec<McqItem>,
    pub tier: NormalizeTier,
}

pub fn normalize(
    raw: &str,
    fallback_essay: &str,
    fallback_comprehension: Vec<ComprehensionItem>,
    fallback_mcq: Vec<McqItem>,
) -> NormalizedContent {
    let (tier, object) = match parse_essay_object(raw) {
        Some(object) => (NormalizeTier::WholeJson, Some(object)),
        None => (NormalizeTier::EmbeddedJson, embedded_essay_object(raw)),
    };

    let content = match object {
        Some(object) => {
            let essay = essay_field(&object).unwrap_or(fallback_essay).to_string();
            NormalizedContent {
                essay,
                comprehension: array_field(&object, "comprehension", comprehension_item)
                    .unwrap_or(fallback_comprehension),
                mcq: array_field(&object, "mcq", mcq_item).unwrap_or(fallback_mcq),
                tier,
            }
        }
        None => {
            let essay = if raw.is_empty() {
                fallback_essay.to_string()
            } else {
                raw.to_string()
            };
            NormalizedContent {
                essay,
                comprehension: fallback_comprehension,
                mcq: fallback_mcq,
                tier: NormalizeTier::PlainText,
            }
        }
    };

    log::debug!("Normalized model output via {:?}", content.tier);
    content
}

fn essay_field(object: &Map<String, Value>) -> Option<&str> {
    object
        .get("essay")
        .and_then(Value::as_str)
        .filter(|essay| !essay.is_empty())
}

/// Parses `text` as a JSON object that carries a usable `essay`.
fn parse_essay_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) if essay_field(&object).is_some() => Some(object),
        _ => None,
    }
}

/// Looks for an essay object inside surrounding prose. The span from the first
/// `{` to the last `}` is tried first; when that fails (for example because
/// the prose after the object contains a stray brace) each balanced top-level
/// object is tried in order.
fn embedded_essay_object(raw: &str) -> Option<Map<String, Value>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }

    parse_essay_object(&raw[start..=end])
        .or_else(|| balanced_objects(raw).find_map(parse_essay_object))
}

/// Yields each top-level `{...}` span, skipping braces inside string literals.
fn balanced_objects(raw: &str) -> impl Iterator<Item = &str> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in raw.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    spans.push(&raw[start..=i]);
                }
            }
            _ => {}
        }
    }

    spans.into_iter()
}

/// Takes `object[key]` whenever it is an array, converting every element
/// leniently so one oddly typed field never discards the model's questions.
fn array_field<T>(
    object: &Map<String, Value>,
    key: &str,
    item: fn(&Value) -> T,
) -> Option<Vec<T>> {
    let items = object.get(key)?.as_array()?;
    Some(items.iter().map(item).collect())
}

/// Renders a scalar as text. Numbers and booleans keep their JSON spelling;
/// null is empty.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn text_field(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| value.get(key))
        .map(text)
        .unwrap_or_default()
}

fn comprehension_item(value: &Value) -> ComprehensionItem {
    if !value.is_object() {
        return ComprehensionItem {
            question: text(value),
            answer: String::new(),
        };
    }

    ComprehensionItem {
        question: text_field(value, &["question", "q"]),
        answer: text_field(value, &["answer"]),
    }
}

fn mcq_item(value: &Value) -> McqItem {
    if !value.is_object() {
        return McqItem {
            question: text(value),
            ..McqItem::default()
        };
    }

    McqItem {
        question: text_field(value, &["question", "q"]),
        options: value
            .get("options")
            .and_then(Value::as_array)
            .map(|options| options.iter().map(text).collect())
            .unwrap_or_default(),
        answer: text_field(value, &["answer"]),
    }
}
