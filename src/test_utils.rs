#[cfg(test)]
pub mod fixtures {
    pub const PHOTOSYNTHESIS_NOTES: &str =
        "Photosynthesis converts light into chemical energy in plants.";

    const STEMS: [&str; 8] = [
        "What does photosynthesis convert light into?",
        "Which organisms perform photosynthesis?",
        "Which pigment absorbs light?",
        "Where does photosynthesis take place?",
        "Which gas is released?",
        "Which gas is absorbed?",
        "What sugar is produced?",
        "Which energy source drives the process?",
    ];

    /// A single question block with four options and an answer line.
    pub fn question(number: usize, stem: &str) -> String {
        format!(
            "Q{}: {}\nA: Chemical energy\nB: Sound\nC: Heat only\nD: Nothing\nAnswer: A",
            number, stem
        )
    }

    /// `count` well-formed, uniquely worded questions (at most 8).
    pub fn quiz_with_questions(count: usize) -> String {
        STEMS
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, stem)| question(i + 1, stem))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn well_formed_quiz() -> String {
        quiz_with_questions(5)
    }

    /// Five blocks where the fourth repeats the second one's first line.
    pub fn quiz_with_duplicate_question() -> String {
        [
            question(1, STEMS[0]),
            question(2, STEMS[1]),
            question(3, STEMS[2]),
            question(2, STEMS[1]),
            question(5, STEMS[4]),
        ]
        .join("\n\n")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_has_requested_question_count() {
        let quiz = quiz_with_questions(3);
        assert_eq!(quiz.matches("Answer: A").count(), 3);
        assert!(quiz.starts_with("Q1: "));
    }

    #[test]
    fn test_fixtures_duplicate_repeats_second_question() {
        let quiz = quiz_with_duplicate_question();
        assert_eq!(quiz.matches("Q2: Which organisms perform photosynthesis?").count(), 2);
    }
}
