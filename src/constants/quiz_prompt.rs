/// Number of unique questions a quiz must contain before it is shown.
pub const QUESTION_COUNT: usize = 5;

pub const QUIZ_PROMPT_INSTRUCTIONS: &str = "Generate 5 unique multiple-choice questions from the text below. \
Each question must have 4 options (A-D) with only one correct answer. \
Provide the correct answer immediately after each question, starting with 'Answer:'. \
Format questions as Q1:, Q2:, etc., with each option on its own line.";

pub const EMPTY_NOTES_WARNING: &str = "📋 Please paste some notes first!";

pub const INCOMPLETE_QUIZ_MESSAGE: &str =
    "The model did not generate 5 unique questions. Try providing more detailed notes.";

pub const QUIZ_TITLE: &str = "📝 Here's Your Quiz!";

pub const ANSWER_COLOR: &str = "#28a745";
