use crate::modules::routing::application::domain::DocumentMeta;

/// The hosting document: its head metadata and the elements of the page
/// currently rendered into it.
pub trait Document: Send + Sync {
    fn set_title(&mut self, title: &str);

    fn set_meta_description(&mut self, description: &str);

    fn has_element(&self, id: &str) -> bool;

    /// Smooth-scroll the element with `id` into view.
    fn scroll_into_view(&mut self, id: &str);

    fn apply_meta(&mut self, meta: &DocumentMeta) {
        self.set_title(&meta.title);
        self.set_meta_description(&meta.description);
    }
}
