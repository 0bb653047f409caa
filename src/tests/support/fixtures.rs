use crate::modules::content::application::domain::{BlogPost, Project};

pub fn sample_project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Descripción de {}", title),
        image_url: format!("https://picsum.photos/seed/{}/600/400", id),
        live_url: Some("https://example.com".to_string()),
        repo_url: None,
        tags: vec!["Rust".to_string()],
    }
}

pub fn sample_post(id: &str, title: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        author: "Tu Nombre".to_string(),
        publish_date: "2024-01-15".to_string(),
        excerpt: format!("Resumen de {}", title),
        content: format!("# {}\n\nContenido.", title),
    }
}
