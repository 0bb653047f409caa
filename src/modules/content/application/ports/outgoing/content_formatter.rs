use serde::Serialize;

/// Sanitized HTML fragment produced from a post's markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormattedContent(String);

impl FormattedContent {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }
}

/// Formatting collaborator for blog post bodies.
///
/// Contract: raw markdown text in, sanitized HTML out. Raw HTML embedded in the
/// source must never reach the output.
pub trait ContentFormatter: Send + Sync {
    fn format(&self, raw: &str) -> FormattedContent;
}
