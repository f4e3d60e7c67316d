use std::sync::Arc;

use crate::{
    constants::{EMPTY_NOTES_WARNING, INCOMPLETE_QUIZ_MESSAGE, QUESTION_COUNT},
    errors::AppResult,
    models::domain::QuizOutcome,
    services::{
        model_service::ModelService,
        prompt_builder::build_quiz_prompt,
        quiz_parser::{split_blocks, unique_questions},
        quiz_renderer::render_block,
    },
};

pub struct QuizService {
    model_service: Arc<dyn ModelService>,
}

impl QuizService {
    pub fn new(model_service: Arc<dyn ModelService>) -> Self {
        Self { model_service }
    }

    /// Runs the whole pipeline once for the given notes.
    ///
    /// Model failures are returned as errors. A short or duplicated quiz is not an
    /// error: it comes back as [`QuizOutcome::Incomplete`] with the raw output.
    pub async fn generate_quiz(&self, notes: &str) -> AppResult<QuizOutcome> {
        if notes.trim().is_empty() {
            return Ok(QuizOutcome::Warning {
                message: EMPTY_NOTES_WARNING.to_string(),
            });
        }

        let prompt = build_quiz_prompt(notes);
        let generated_text = self
            .model_service
            .generate(&prompt)
            .await
            .inspect_err(|e| log::error!("Quiz generation failed: {}", e))?
            .into_text();

        let blocks = unique_questions(split_blocks(&generated_text));
        if blocks.len() < QUESTION_COUNT {
            log::warn!(
                "Model returned {} unique questions, {} required",
                blocks.len(),
                QUESTION_COUNT
            );
            return Ok(QuizOutcome::Incomplete {
                message: INCOMPLETE_QUIZ_MESSAGE.to_string(),
                raw_output: generated_text,
            });
        }

        log::info!("Generated quiz with {} questions", blocks.len());
        Ok(QuizOutcome::Complete {
            questions: blocks.iter().map(render_block).collect(),
        })
    }
}
