use serde::{Deserialize, Serialize};

/// Content of the single modal surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Body lines are joined with `\n`; the view keeps the line breaks.
    pub fn from_lines(title: impl Into<String>, lines: &[String]) -> Self {
        Self::new(title, lines.join("\n"))
    }
}
