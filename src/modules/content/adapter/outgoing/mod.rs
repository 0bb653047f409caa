pub mod comrak_formatter;

pub use comrak_formatter::ComrakFormatter;
