use serde::Deserialize;
use validator::Validate;

/// Longest notes accepted, in characters. `validator` reads length bounds as `u64`.
pub const MAX_NOTES_LENGTH: u64 = 20_000;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    // Blank notes are rejected later as a warning, not here.
    #[serde(default)]
    #[validate(length(max = MAX_NOTES_LENGTH, message = "Notes are too long"))]
    pub notes: String,
}
