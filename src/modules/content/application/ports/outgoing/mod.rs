pub mod content_formatter;

pub use content_formatter::{ContentFormatter, FormattedContent};
