/// One segment of model output, starting at a `Q<n>:` / `Q<n>-` marker.
///
/// The content is not validated: a block may lack options or an answer line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBlock(String);

impl QuestionBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// The question line, used as the uniqueness key.
    pub fn first_line(&self) -> &str {
        self.0.lines().next().unwrap_or_default().trim()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl From<&str> for QuestionBlock {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
