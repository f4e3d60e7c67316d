pub mod question_block;
pub mod quiz_outcome;
pub mod rendered_question;

pub use question_block::QuestionBlock;
pub use quiz_outcome::QuizOutcome;
pub use rendered_question::{BodyLine, RenderedQuestion};
