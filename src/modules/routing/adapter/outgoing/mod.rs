pub mod headless_document;

pub use headless_document::HeadlessDocument;
