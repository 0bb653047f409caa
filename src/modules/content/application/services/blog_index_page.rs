use serde::Serialize;

use crate::modules::content::application::ContentStore;

use super::home_page::PostPreview;

pub const NO_POSTS: &str = "Aún no hay artículos en el blog.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogIndexView {
    pub heading: String,
    pub intro: String,
    pub posts: Vec<PostPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl BlogIndexView {
    /// Every post, in storage order.
    pub fn render(store: &ContentStore) -> Self {
        let posts: Vec<PostPreview> = store
            .blog_posts()
            .with(|posts| posts.iter().map(PostPreview::from).collect());

        let empty_message = posts.is_empty().then(|| NO_POSTS.to_string());

        Self {
            heading: "Blog".to_string(),
            intro: "Ideas y tutoriales sobre desarrollo web y tecnología.".to_string(),
            posts,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::modules::storage::adapter::outgoing::InMemoryStorage;
    use crate::modules::storage::application::ports::outgoing::KeyValueStorage;

    #[test]
    fn test_lists_posts_in_storage_order() {
        let store = ContentStore::open(Arc::new(InMemoryStorage::durable()));

        let view = BlogIndexView::render(&store);

        let ids: Vec<_> = view.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "dominando-react-hooks",
                "el-arte-del-diseno-responsivo",
                "typescript-para-principiantes"
            ]
        );
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn test_empty_collection_shows_message() {
        let storage = Arc::new(InMemoryStorage::durable());
        storage.set_item("blogPosts", "[]").unwrap();
        let store = ContentStore::open(storage);

        let view = BlogIndexView::render(&store);

        assert!(view.posts.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(NO_POSTS));
    }
}
