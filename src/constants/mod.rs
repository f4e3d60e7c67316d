pub mod quiz_prompt;

pub use quiz_prompt::{
    ANSWER_COLOR, EMPTY_NOTES_WARNING, INCOMPLETE_QUIZ_MESSAGE, QUESTION_COUNT, QUIZ_TITLE,
};
