use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyLine {
    /// An `A:`..`D:` option line, letter and text kept apart for emphasis.
    Option { letter: char, text: String },
    /// Anything else, including the question stem.
    Text { text: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedQuestion {
    pub body: Vec<BodyLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub html: String,
}

impl RenderedQuestion {
    pub fn options(&self) -> impl Iterator<Item = (char, &str)> {
        self.body.iter().filter_map(|line| match line {
            BodyLine::Option { letter, text } => Some((*letter, text.as_str())),
            BodyLine::Text { .. } => None,
        })
    }
}
