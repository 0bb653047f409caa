use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A record kept in one of the site's persisted collections.
///
/// `COLLECTION_KEY` is the durable storage key of the collection and doubles as
/// its name. `id` is unique within the collection.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION_KEY: &'static str;

    fn id(&self) -> &str;

    /// Text shown for the record in the admin list.
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for Project {
    const COLLECTION_KEY: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub comment: String,
}

impl Record for Testimonial {
    const COLLECTION_KEY: &'static str = "testimonials";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Slug derived from the title at creation time.
    pub id: String,
    pub title: String,
    pub author: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub publish_date: String,
    pub excerpt: String,
    /// Markdown source.
    pub content: String,
}

impl Record for BlogPost {
    const COLLECTION_KEY: &'static str = "blogPosts";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_uses_camel_case_and_omits_missing_urls() {
        let project = Project {
            id: "1".to_string(),
            title: "Site".to_string(),
            description: "Desc".to_string(),
            image_url: "img.png".to_string(),
            live_url: None,
            repo_url: Some("#".to_string()),
            tags: vec!["Rust".to_string()],
        };

        let value = serde_json::to_value(&project).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "1",
                "title": "Site",
                "description": "Desc",
                "imageUrl": "img.png",
                "repoUrl": "#",
                "tags": ["Rust"]
            })
        );
    }

    #[test]
    fn test_blog_post_reads_publish_date_field() {
        let raw = r#"{
            "id": "hola",
            "title": "Hola",
            "author": "Tu Nombre",
            "publishDate": "2024-01-02",
            "excerpt": "e",
            "content": "c"
        }"#;

        let post: BlogPost = serde_json::from_str(raw).unwrap();

        assert_eq!(post.publish_date, "2024-01-02");
        assert_eq!(post.label(), "Hola");
        assert_eq!(BlogPost::COLLECTION_KEY, "blogPosts");
    }
}
