use std::sync::Arc;

use crate::modules::content::application::domain::{
    seed, BlogPost, Project, Record, Testimonial,
};
use crate::modules::storage::application::ports::outgoing::KeyValueStorage;
use crate::modules::storage::application::PersistedValue;

/// The three persisted collections of the site, opened against one durable
/// storage profile.
///
/// Every page reads through the same instance, so a change made by the admin
/// console is visible to the next render of any page. Content pages only read.
#[derive(Debug)]
pub struct ContentStore {
    projects: PersistedValue<Vec<Project>>,
    testimonials: PersistedValue<Vec<Testimonial>>,
    blog_posts: PersistedValue<Vec<BlogPost>>,
}

impl ContentStore {
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            projects: PersistedValue::open(
                Arc::clone(&storage),
                Project::COLLECTION_KEY,
                seed::initial_projects(),
            ),
            testimonials: PersistedValue::open(
                Arc::clone(&storage),
                Testimonial::COLLECTION_KEY,
                seed::initial_testimonials(),
            ),
            blog_posts: PersistedValue::open(
                storage,
                BlogPost::COLLECTION_KEY,
                seed::initial_blog_posts(),
            ),
        }
    }

    pub fn projects(&self) -> &PersistedValue<Vec<Project>> {
        &self.projects
    }

    pub fn testimonials(&self) -> &PersistedValue<Vec<Testimonial>> {
        &self.testimonials
    }

    pub fn blog_posts(&self) -> &PersistedValue<Vec<BlogPost>> {
        &self.blog_posts
    }

    pub fn find_post(&self, id: &str) -> Option<BlogPost> {
        self.blog_posts
            .with(|posts| posts.iter().find(|p| p.id == id).cloned())
    }

    /// True when at least one collection holds changes storage refused.
    pub fn has_unsaved_changes(&self) -> bool {
        self.projects.has_unsaved_changes()
            || self.testimonials.has_unsaved_changes()
            || self.blog_posts.has_unsaved_changes()
    }
}

/// Typed access to the collection holding `R`.
pub trait CollectionOf<R: Record> {
    fn collection(&self) -> &PersistedValue<Vec<R>>;
}

impl CollectionOf<Project> for ContentStore {
    fn collection(&self) -> &PersistedValue<Vec<Project>> {
        &self.projects
    }
}

impl CollectionOf<Testimonial> for ContentStore {
    fn collection(&self) -> &PersistedValue<Vec<Testimonial>> {
        &self.testimonials
    }
}

impl CollectionOf<BlogPost> for ContentStore {
    fn collection(&self) -> &PersistedValue<Vec<BlogPost>> {
        &self.blog_posts
    }
}
