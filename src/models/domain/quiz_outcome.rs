use crate::models::domain::RenderedQuestion;

/// Result of one pipeline run that did not fail outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Notes were blank; the model was never called.
    Warning { message: String },
    Complete { questions: Vec<RenderedQuestion> },
    /// Fewer unique questions than required. The raw output is kept for inspection
    /// and no quiz is shown.
    Incomplete { message: String, raw_output: String },
}
