use crate::constants::quiz_prompt::QUIZ_PROMPT_INSTRUCTIONS;

/// Builds the quiz instruction for the given notes.
///
/// Callers reject blank notes before getting here.
pub fn build_quiz_prompt(notes: &str) -> String {
    format!("{}\n\nText:\n{}", QUIZ_PROMPT_INSTRUCTIONS, notes)
}
