//! Lenient parsing of the structured feedback report.
//!
//! The upstream generator is asked for strictly-JSON output but is not
//! contract-bound to deliver it. Parsing is best-effort: a non-JSON payload
//! means no report, a malformed field degrades to its default, and a score
//! that will not coerce to an integer becomes `None`. The raw text is always
//! preserved by the caller for storage, whatever happens here.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The filler tokens the feedback prompt asks the model to count.
pub const FILLER_TOKENS: [&str; 4] = ["uh", "um", "like", "you know"];

/// One grammar correction in the feedback report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarFix {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub correction: String,
}

/// One vocabulary suggestion in the feedback report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularySuggestion {
    #[serde(default)]
    pub original_word: String,
    #[serde(default)]
    pub suggested_word: String,
    #[serde(default)]
    pub context: String,
}

/// The structured coaching report requested in feedback mode.
///
/// Field names match the keys the feedback template asks the model to emit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReport {
    #[serde(default)]
    pub grammar_and_sentence_structure: Vec<GrammarFix>,
    #[serde(default)]
    pub vocabulary_suggestions: Vec<VocabularySuggestion>,
    #[serde(default)]
    pub filler_words_count: BTreeMap<String, i64>,
    #[serde(default)]
    pub tone_and_energy: String,
    #[serde(default)]
    pub overall_fluency_score: Option<i64>,
}

/// Result of parsing a raw feedback payload.
///
/// `report` is `None` when the payload is not a JSON object; `score` is
/// `None` whenever `overall_fluency_score` is missing or will not coerce to
/// an integer. Neither case blocks persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeedback {
    pub report: Option<FeedbackReport>,
    pub score: Option<i64>,
}

/// Parse raw generator output into a feedback report and fluency score.
pub fn parse_feedback(raw: &str) -> ParsedFeedback {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return ParsedFeedback::default(),
    };

    let score = coerce_score(value.get("overall_fluency_score"));

    let report = value.as_object().map(|object| FeedbackReport {
        grammar_and_sentence_structure: element_wise(object.get("grammar_and_sentence_structure")),
        vocabulary_suggestions: element_wise(object.get("vocabulary_suggestions")),
        filler_words_count: filler_counts(object.get("filler_words_count")),
        tone_and_energy: object
            .get("tone_and_energy")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        overall_fluency_score: score,
    });

    ParsedFeedback { report, score }
}

/// Coerce a score value to an integer.
///
/// Accepts integers, floats (truncated), and numeric strings. Anything else
/// yields `None` rather than an error.
fn coerce_score(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        return Some(f.trunc() as i64);
    }
    value.as_str()?.trim().parse().ok()
}

/// Deserialize array elements one at a time, skipping malformed entries.
fn element_wise<T: DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Extract integer filler-word counts, skipping non-integer values.
fn filler_counts(value: Option<&Value>) -> BTreeMap<String, i64> {
    value
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(token, count)| count.as_i64().map(|n| (token.clone(), n)))
                .collect()
        })
        .unwrap_or_default()
}
