use serde::Serialize;

use crate::modules::content::application::ports::outgoing::{ContentFormatter, FormattedContent};
use crate::modules::content::application::ContentStore;
use crate::modules::routing::application::domain::{DocumentMeta, Page};

pub const NOT_FOUND_HEADING: &str = "Artículo no encontrado";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub body: FormattedContent,
    pub back_href: String,
    pub meta: DocumentMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostNotFound {
    pub requested_id: String,
    pub heading: String,
    pub back_href: String,
}

/// The post detail page. Unlike the table routes it owns its metadata, which
/// only exists once the post has been found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BlogPostView {
    Found(PostDetail),
    NotFound(PostNotFound),
}

impl BlogPostView {
    pub fn render(
        store: &ContentStore,
        formatter: &dyn ContentFormatter,
        owner: &str,
        post_id: &str,
    ) -> Self {
        let Some(post) = store.find_post(post_id) else {
            return BlogPostView::NotFound(PostNotFound {
                requested_id: post_id.to_string(),
                heading: NOT_FOUND_HEADING.to_string(),
                back_href: Page::BlogIndex.href(),
            });
        };

        BlogPostView::Found(PostDetail {
            meta: DocumentMeta::new(format!("{} | {}", post.title, owner), post.excerpt.clone()),
            body: formatter.format(&post.content),
            back_href: Page::BlogIndex.href(),
            id: post.id,
            title: post.title,
            author: post.author,
            publish_date: post.publish_date,
        })
    }

    /// Metadata the page applies to the document; none when not found.
    pub fn meta(&self) -> Option<&DocumentMeta> {
        match self {
            BlogPostView::Found(detail) => Some(&detail.meta),
            BlogPostView::NotFound(_) => None,
        }
    }
}
