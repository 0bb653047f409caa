use tracing::debug;

use crate::modules::routing::application::domain::{Fragment, Page, RouteTable};
use crate::modules::routing::application::ports::outgoing::Document;

/// What a fragment change did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteChange {
    /// A page was selected (possibly the one already active).
    Navigated(Page),
    /// The fragment named an element; the page stayed as it was and a scroll is
    /// pending until the next render completes.
    Anchor(String),
}

/// Derives the active page from the location fragment.
///
/// ## Per fragment change
/// 1. classify the fragment (route or anchor)
/// 2. route: select the page, then apply static metadata if the route owns any
/// 3. anchor: keep the page, remember the target for [`after_render`]
///
/// The first load goes through the same [`handle_fragment_change`], so a deep
/// link and a live navigation land on the same page and metadata.
///
/// [`after_render`]: HashRouter::after_render
/// [`handle_fragment_change`]: HashRouter::handle_fragment_change
#[derive(Debug, Clone)]
pub struct HashRouter {
    table: RouteTable,
    current: Page,
    pending_scroll: Option<String>,
}

impl HashRouter {
    pub fn new(table: RouteTable) -> Self {
        let current = table.home().page.clone();
        Self {
            table,
            current,
            pending_scroll: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    pub fn pending_scroll(&self) -> Option<&str> {
        self.pending_scroll.as_deref()
    }

    pub fn handle_fragment_change<D>(&mut self, raw: &str, document: &mut D) -> RouteChange
    where
        D: Document + ?Sized,
    {
        match Fragment::parse(raw) {
            Fragment::Route(path) => {
                let resolved = self.table.resolve(&path);
                debug!(fragment = raw, page = ?resolved.page, "Route resolved");

                // A page switch supersedes any scroll still waiting for a render.
                self.pending_scroll = None;
                self.current = resolved.page;

                if let Some(meta) = resolved.meta {
                    document.apply_meta(&meta);
                }

                RouteChange::Navigated(self.current.clone())
            }
            Fragment::Anchor(id) => {
                debug!(fragment = raw, "Anchor scroll deferred");
                self.pending_scroll = Some(id.clone());
                RouteChange::Anchor(id)
            }
        }
    }

    /// Run work deferred until the current render pass is done.
    ///
    /// Returns the id scrolled to, if the pending target exists in the
    /// document. A missing target is dropped.
    pub fn after_render<D>(&mut self, document: &mut D) -> Option<String>
    where
        D: Document + ?Sized,
    {
        let id = self.pending_scroll.take()?;

        if document.has_element(&id) {
            document.scroll_into_view(&id);
            Some(id)
        } else {
            debug!(element = %id, "Anchor target not found after render");
            None
        }
    }
}
