//! Scenario logic for the Parley speaking-practice backend.
//!
//! This crate holds the branching logic and data contracts of the system:
//!
//! - [`ScenarioMode`] - the enumerated practice-session type
//! - [`templates`] - fixed prompt templates and their assembly rules
//! - [`dispatch`] - selects a template and the expected response shape
//! - [`feedback`] - lenient parsing of the structured feedback report
//!
//! Everything here is pure: no I/O, no shared mutable state. Templates are
//! static constants defined once at compile time.

pub mod dispatch;
pub mod feedback;
pub mod mode;
pub mod templates;

pub use dispatch::{dispatch, Dispatch, DEFAULT_SCENARIO_LABEL};
pub use feedback::{parse_feedback, FeedbackReport, GrammarFix, ParsedFeedback, VocabularySuggestion};
pub use mode::{ScenarioMode, UnrecognizedMode};
pub use templates::{build_prompt, next_group_speaker, template_fingerprint, GroupSpeaker};
