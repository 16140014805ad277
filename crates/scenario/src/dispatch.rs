//! Scenario dispatch: template selection and expected response shape.

use generator_core::OutputFormat;

use crate::mode::ScenarioMode;
use crate::templates::build_prompt;

/// Label stored with a session when the caller did not say which scenario the
/// transcript came from.
pub const DEFAULT_SCENARIO_LABEL: &str = "unknown";

/// The outcome of dispatching a request: a prompt plus the response shape the
/// upstream model is expected to return.
///
/// `Json` additionally carries the scenario label for downstream persistence;
/// only feedback results are ever persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The model should speak the next line as a persona.
    Text { prompt: String },
    /// The model should emit a strictly-JSON feedback report.
    Json {
        prompt: String,
        scenario_label: String,
    },
}

impl Dispatch {
    /// The assembled prompt text.
    pub fn prompt(&self) -> &str {
        match self {
            Dispatch::Text { prompt } => prompt,
            Dispatch::Json { prompt, .. } => prompt,
        }
    }

    /// The output format to request from the generator.
    pub fn format(&self) -> OutputFormat {
        match self {
            Dispatch::Text { .. } => OutputFormat::Text,
            Dispatch::Json { .. } => OutputFormat::Json,
        }
    }
}

/// Select the template for a mode, assemble the prompt, and classify the
/// expected response shape.
///
/// Performs no I/O; the caller invokes the generator and, for feedback
/// results, routes the response through the feedback parser and the session
/// store. Unrecognized modes never reach this function: parsing the mode tag
/// rejects them first.
pub fn dispatch(mode: ScenarioMode, history: &str, scenario_label: Option<&str>) -> Dispatch {
    let prompt = build_prompt(mode, history);

    match mode {
        ScenarioMode::Interview | ScenarioMode::FreeTopic | ScenarioMode::GroupDiscussion => {
            Dispatch::Text { prompt }
        }
        ScenarioMode::Feedback => Dispatch::Json {
            prompt,
            scenario_label: scenario_label
                .filter(|label| !label.is_empty())
                .unwrap_or(DEFAULT_SCENARIO_LABEL)
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_modes_dispatch_as_text() {
        for mode in [
            ScenarioMode::Interview,
            ScenarioMode::FreeTopic,
            ScenarioMode::GroupDiscussion,
        ] {
            let result = dispatch(mode, "User: hello", None);
            assert_eq!(result.format(), OutputFormat::Text);
            assert!(result.prompt().contains("User: hello"));
        }
    }

    #[test]
    fn test_feedback_dispatches_as_json_with_label() {
        let result = dispatch(ScenarioMode::Feedback, "User: hello", Some("interview"));
        assert_eq!(result.format(), OutputFormat::Json);
        match result {
            Dispatch::Json { scenario_label, .. } => assert_eq!(scenario_label, "interview"),
            other => panic!("expected Json dispatch, got {other:?}"),
        }
    }

    #[test]
    fn test_feedback_label_defaults_to_unknown() {
        let missing = dispatch(ScenarioMode::Feedback, "t", None);
        let empty = dispatch(ScenarioMode::Feedback, "t", Some(""));

        for result in [missing, empty] {
            match result {
                Dispatch::Json { scenario_label, .. } => {
                    assert_eq!(scenario_label, DEFAULT_SCENARIO_LABEL)
                }
                other => panic!("expected Json dispatch, got {other:?}"),
            }
        }
    }
}
