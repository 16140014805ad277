//! Fixed prompt templates and their assembly rules.
//!
//! Each scenario mode has one static instruction block. Assembly concatenates
//! the block, the conversation history between literal `---` delimiters, and
//! a role-cue suffix naming the persona expected to speak next. The feedback
//! template has no role cue; it asks for a JSON object instead of a spoken
//! line.

use sha2::{Digest, Sha256};

use crate::mode::ScenarioMode;

/// Instruction block for the mock interview scenario.
pub const INTERVIEW_INSTRUCTIONS: &str = "\
You are an expert HR interviewer named Zara. You are conducting a realistic, \
helpful, and friendly mock job interview. Your task is to engage in a \
back-and-forth conversation based on the provided transcript. The last message \
is from the user. Your response should be the next logical thing an \
interviewer would say.
RULES:
1. If the transcript is empty or just says \"start\", begin the interview with a friendly greeting and your first question (e.g., \"Walk me through your resume...\").
2. For all other turns, continue the conversation naturally based on the user's last response. Ask follow-up questions or move to a new topic.
3. NEVER include stage directions like (smiles) in your response. Your response should ONLY be the words you would speak out loud.
4. Keep your responses concise and focused. Ask one primary question at a time.";

/// Instruction block for the free-topic monologue scenario.
pub const FREE_TOPIC_INSTRUCTIONS: &str = "\
You are an AI speaking evaluator named Kai. Your goal is to provide a starting \
prompt for a user's free-topic speech and then remain silent to allow them to \
speak uninterrupted.

Your task:
1. If the conversation history is empty, respond with the exact welcoming instruction below. This is the only time you will speak.
2. For any other turn (if the history has content), you must respond with an empty string (\"\") to avoid interrupting the user.

Here is the welcoming instruction for the first turn:
\"Welcome to the Free Topic evaluation. My name is Kai, and I'll be your \
speaking evaluator. This session is designed to help you understand your \
strengths when speaking spontaneously. Please choose any topic you are \
comfortable with. When you're ready, you can begin. I'll be listening quietly.\"";

/// Instruction block for the group discussion scenario.
pub const GROUP_DISCUSSION_INSTRUCTIONS: &str = "\
You are an AI moderator for a group discussion. You will also play two \
distinct characters: Ben and Chloe. The user is the third participant.

Your Personas:
- Ben: He is analytical and tends to play devil's advocate. He likes to question assumptions.
- Chloe: She is creative and focuses on possibilities and positive outcomes. She likes to build on ideas.
- Moderator: You (as the AI) will only act as the Moderator on the very first turn to set up the topic.

Your Task:
Read the conversation history. Based on the last speaker's point, generate a \
response from the next logical speaker. Your response MUST start with the \
persona's name followed by a colon.

RULES:
1. Turn 1 (History is empty): Act as the Moderator. Your response must be only: \"Moderator: Welcome to the group discussion. To start, what topic would you like to introduce for us to discuss?\"
2. Turn 2 (User has introduced a topic): Have Chloe respond first with an enthusiastic or supportive opening thought on the user's topic. Her response must start with \"Chloe:\".
3. Subsequent Turns: Read the last speaker's point. Generate a response from the *other* persona (if Chloe spoke last, Ben speaks now; if Ben spoke last, Chloe speaks now).
4. Your response must only be from ONE persona per turn.
5. Keep your points concise to encourage back-and-forth.";

/// Instruction block for the feedback report scenario.
pub const FEEDBACK_INSTRUCTIONS: &str = "\
You are an expert English language coach. Analyze the complete conversation \
transcript provided below to provide a detailed, constructive feedback report.
The report must be in a valid JSON format only, with no other text before or \
after the JSON object.
The JSON object must have the following keys:
- \"grammar_and_sentence_structure\": An array of objects. Each object should have \"error\" and \"correction\".
- \"vocabulary_suggestions\": An array of objects. Each object should have \"original_word\", \"suggested_word\", and \"context\".
- \"filler_words_count\": An object counting occurrences of \"uh\", \"um\", \"like\", \"you know\".
- \"tone_and_energy\": A brief, one-sentence analysis.
- \"overall_fluency_score\": A single integer score from 0 to 10.";

/// The persona expected to speak next in a group discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSpeaker {
    Moderator,
    Ben,
    Chloe,
}

impl GroupSpeaker {
    /// The role-cue suffix appended to the assembled group prompt.
    pub fn cue(&self) -> &'static str {
        match self {
            GroupSpeaker::Moderator => "Moderator:",
            GroupSpeaker::Ben => "Ben:",
            GroupSpeaker::Chloe => "Chloe:",
        }
    }
}

/// Infer the next group-discussion speaker from the conversation text.
///
/// Empty history means the moderator opens. Once the user has introduced a
/// topic but no persona has spoken, Chloe goes first. After that, the turn
/// alternates away from whichever persona has the last attributed line.
pub fn next_group_speaker(history: &str) -> GroupSpeaker {
    if history.trim().is_empty() {
        return GroupSpeaker::Moderator;
    }

    let mut last_persona = None;
    for line in history.lines() {
        let line = line.trim_start();
        if line.starts_with("Ben:") {
            last_persona = Some(GroupSpeaker::Ben);
        } else if line.starts_with("Chloe:") {
            last_persona = Some(GroupSpeaker::Chloe);
        }
    }

    match last_persona {
        Some(GroupSpeaker::Chloe) => GroupSpeaker::Ben,
        Some(GroupSpeaker::Ben) => GroupSpeaker::Chloe,
        _ => GroupSpeaker::Chloe,
    }
}

/// Assemble the final prompt for a scenario mode and conversation history.
///
/// The history text is substituted verbatim; it is never truncated or
/// reformatted.
pub fn build_prompt(mode: ScenarioMode, history: &str) -> String {
    match mode {
        ScenarioMode::Interview => format!(
            "{INTERVIEW_INSTRUCTIONS}\n\nCONVERSATION HISTORY:\n---\n{history}\n---\nZara:"
        ),
        ScenarioMode::FreeTopic => format!(
            "{FREE_TOPIC_INSTRUCTIONS}\n\nCONVERSATION HISTORY:\n---\n{history}\n---\nKai:"
        ),
        ScenarioMode::GroupDiscussion => {
            let cue = next_group_speaker(history).cue();
            format!(
                "{GROUP_DISCUSSION_INSTRUCTIONS}\n\nCONVERSATION HISTORY:\n---\n{history}\n---\n{cue}"
            )
        }
        ScenarioMode::Feedback => format!(
            "{FEEDBACK_INSTRUCTIONS}\n\nHere is the transcript:\n---\n{history}\n---\nNow, generate the JSON feedback report."
        ),
    }
}

/// The instruction block for a mode, before assembly.
pub fn instructions(mode: ScenarioMode) -> &'static str {
    match mode {
        ScenarioMode::Interview => INTERVIEW_INSTRUCTIONS,
        ScenarioMode::FreeTopic => FREE_TOPIC_INSTRUCTIONS,
        ScenarioMode::GroupDiscussion => GROUP_DISCUSSION_INSTRUCTIONS,
        ScenarioMode::Feedback => FEEDBACK_INSTRUCTIONS,
    }
}

/// Compute a stable SHA-256 fingerprint for a mode's template.
///
/// Logged at startup so prompt revisions are visible across deployments.
pub fn template_fingerprint(mode: ScenarioMode) -> String {
    let mut hasher = Sha256::new();
    hasher.update(instructions(mode).as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}
