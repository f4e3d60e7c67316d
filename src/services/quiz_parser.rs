use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{constants::QUESTION_COUNT, models::domain::QuestionBlock};

// Leading `**` / `#` markdown stays with the marker it decorates.
static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[*#]*[ \t]*\bQ\s*\d+[:\-]").expect("QUESTION_MARKER is a valid regex pattern")
});

/// Splits raw model output in front of every `Q<n>:` or `Q<n>-` marker, wherever it
/// appears. A marker glued to a preceding word (`FAQ1:`) is not a boundary.
///
/// Segments are trimmed and empty ones dropped. Text before the first marker is kept as
/// its own segment, so output without any marker comes back as a single block.
pub fn split_blocks(raw: &str) -> Vec<QuestionBlock> {
    let mut boundaries: Vec<usize> = QUESTION_MARKER.find_iter(raw).map(|m| m.start()).collect();
    if boundaries.first() != Some(&0) {
        boundaries.insert(0, 0);
    }
    boundaries.push(raw.len());

    boundaries
        .windows(2)
        .map(|w| raw[w[0]..w[1]].trim())
        .filter(|segment| !segment.is_empty())
        .map(QuestionBlock::from)
        .collect()
}

/// Drops every block whose first line was already seen, keeping first-seen order.
pub fn dedupe_blocks(blocks: Vec<QuestionBlock>) -> Vec<QuestionBlock> {
    let mut seen = HashSet::new();
    blocks
        .into_iter()
        .filter(|block| seen.insert(block.first_line().to_string()))
        .collect()
}

/// Dedupes, then keeps at most [`QUESTION_COUNT`] blocks. Extra blocks are silently cut.
pub fn unique_questions(blocks: Vec<QuestionBlock>) -> Vec<QuestionBlock> {
    let mut unique = dedupe_blocks(blocks);
    unique.truncate(QUESTION_COUNT);
    unique
}
