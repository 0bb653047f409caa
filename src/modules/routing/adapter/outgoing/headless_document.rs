use std::collections::BTreeSet;

use crate::modules::routing::application::ports::outgoing::Document;

/// In-process `Document` used by the host binary and tests.
///
/// It keeps the head metadata, the element ids of whatever page was mounted
/// last, and every scroll request that hit an existing element.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    title: String,
    meta_description: Option<String>,
    elements: BTreeSet<String>,
    scrolled_to: Vec<String>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mounted element ids with those of a freshly rendered page.
    pub fn mount<I, S>(&mut self, element_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements = element_ids.into_iter().map(Into::into).collect();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    pub fn scrolled_to(&self) -> &[String] {
        &self.scrolled_to
    }
}

impl Document for HeadlessDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_meta_description(&mut self, description: &str) {
        self.meta_description = Some(description.to_string());
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scrolled_to.push(id.to_string());
    }
}
