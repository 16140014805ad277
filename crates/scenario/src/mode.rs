//! Scenario mode tags.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four practice-session types the backend knows how to prompt for.
///
/// The inbound request carries the mode as a plain string; parsing it up
/// front means an unrecognized tag is rejected with a clear error instead of
/// silently producing no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioMode {
    /// Mock job interview with the "Zara" persona.
    Interview,
    /// Free-topic monologue prompted by the "Kai" persona.
    FreeTopic,
    /// Group discussion role-play with "Ben" and "Chloe".
    GroupDiscussion,
    /// Post-session feedback report (strict JSON output).
    Feedback,
}

impl ScenarioMode {
    /// All modes, in a fixed order. Useful for startup logging and tests.
    pub const ALL: [ScenarioMode; 4] = [
        ScenarioMode::Interview,
        ScenarioMode::FreeTopic,
        ScenarioMode::GroupDiscussion,
        ScenarioMode::Feedback,
    ];

    /// The wire tag for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioMode::Interview => "interview",
            ScenarioMode::FreeTopic => "free_topic",
            ScenarioMode::GroupDiscussion => "group_discussion",
            ScenarioMode::Feedback => "feedback",
        }
    }
}

impl fmt::Display for ScenarioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode tag is not one of the four known values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized mode: {0:?}")]
pub struct UnrecognizedMode(pub String);

impl FromStr for ScenarioMode {
    type Err = UnrecognizedMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interview" => Ok(ScenarioMode::Interview),
            "free_topic" => Ok(ScenarioMode::FreeTopic),
            "group_discussion" => Ok(ScenarioMode::GroupDiscussion),
            "feedback" => Ok(ScenarioMode::Feedback),
            other => Err(UnrecognizedMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("interview".parse(), Ok(ScenarioMode::Interview));
        assert_eq!("free_topic".parse(), Ok(ScenarioMode::FreeTopic));
        assert_eq!("group_discussion".parse(), Ok(ScenarioMode::GroupDiscussion));
        assert_eq!("feedback".parse(), Ok(ScenarioMode::Feedback));
    }

    #[test]
    fn test_parse_unrecognized_mode() {
        let err = "debate".parse::<ScenarioMode>().unwrap_err();
        assert_eq!(err, UnrecognizedMode("debate".to_string()));
        assert!(err.to_string().contains("debate"));
    }

    #[test]
    fn test_round_trip_tags() {
        for mode in ScenarioMode::ALL {
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
    }
}
