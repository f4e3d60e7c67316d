use serde::Serialize;

use crate::{
    constants::QUIZ_TITLE,
    models::domain::{QuizOutcome, RenderedQuestion},
};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateQuizResponse {
    Warning {
        message: String,
    },
    Complete {
        title: String,
        questions: Vec<RenderedQuestion>,
    },
    Incomplete {
        message: String,
        raw_output: String,
    },
}

impl From<QuizOutcome> for GenerateQuizResponse {
    fn from(outcome: QuizOutcome) -> Self {
        match outcome {
            QuizOutcome::Warning { message } => GenerateQuizResponse::Warning { message },
            QuizOutcome::Complete { questions } => GenerateQuizResponse::Complete {
                title: QUIZ_TITLE.to_string(),
                questions,
            },
            QuizOutcome::Incomplete {
                message,
                raw_output,
            } => GenerateQuizResponse::Incomplete {
                message,
                raw_output,
            },
        }
    }
}
