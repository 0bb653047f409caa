use comrak::{markdown_to_html, Options};

use crate::modules::content::application::ports::outgoing::{ContentFormatter, FormattedContent};

/// `ContentFormatter` backed by `comrak` (CommonMark + GFM).
///
/// Raw HTML rendering stays disabled, comrak replaces it with a placeholder
/// comment, which is what keeps the output sanitized.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakFormatter;

impl ComrakFormatter {
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options<'static> {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;

        options.render.unsafe_ = false;

        options
    }
}

impl ContentFormatter for ComrakFormatter {
    fn format(&self, raw: &str) -> FormattedContent {
        FormattedContent::new(markdown_to_html(raw, &Self::options()))
    }
}
