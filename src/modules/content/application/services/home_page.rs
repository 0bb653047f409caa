use serde::Serialize;

use crate::modules::content::application::domain::{BlogPost, Project, Testimonial};
use crate::modules::content::application::ContentStore;
use crate::modules::routing::application::domain::Page;

use super::contact_form::ContactForm;

/// Cards shown in the portfolio and blog preview sections.
const PREVIEW_LIMIT: usize = 3;

/// Element ids of the home page sections, in page order.
pub const SECTION_IDS: [&str; 5] = ["about", "portfolio", "testimonials", "blog", "contact"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    /// In-page anchor of the contact call to action.
    pub cta_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPreview {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub excerpt: String,
    pub href: String,
}

impl From<&BlogPost> for PostPreview {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            publish_date: post.publish_date.clone(),
            excerpt: post.excerpt.clone(),
            href: Page::BlogPost {
                id: post.id.clone(),
            }
            .href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub hero: Hero,
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub latest_posts: Vec<PostPreview>,
    pub all_posts_href: String,
    pub contact: ContactForm,
}

impl HomeView {
    /// Snapshot of the store as the home page shows it.
    pub fn render(store: &ContentStore, owner: &str) -> Self {
        Self {
            hero: Hero {
                name: owner.to_string(),
                tagline: "Desarrollador Web Creativo y Solucionador de Problemas".to_string(),
                cta_href: "#contact".to_string(),
            },
            about: vec![
                "Soy un apasionado desarrollador web con un don para construir sitios y aplicaciones hermosos, funcionales y centrados en el usuario. Con una base sólida en los frameworks modernos de JavaScript y un buen ojo para el diseño, me encanta convertir problemas complejos en soluciones digitales elegantes.".to_string(),
                "Cuando no estoy programando, me encontrarás explorando nuevas tecnologías, contribuyendo a proyectos de código abierto o disfrutando de una buena taza de café.".to_string(),
            ],
            projects: store
                .projects()
                .with(|projects| projects.iter().take(PREVIEW_LIMIT).cloned().collect()),
            testimonials: store.testimonials().get(),
            latest_posts: store
                .blog_posts()
                .with(|posts| posts.iter().take(PREVIEW_LIMIT).map(PostPreview::from).collect()),
            all_posts_href: Page::BlogIndex.href(),
            contact: ContactForm::default(),
        }
    }

    pub fn element_ids(&self) -> Vec<String> {
        SECTION_IDS.iter().map(|id| id.to_string()).collect()
    }
}
