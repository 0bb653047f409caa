// src/modules/admin/application/domain/forms.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::admin::application::domain::record_kind::RecordKind;
use crate::modules::admin::application::domain::tags::{join_tags, parse_tags};
use crate::modules::content::application::domain::{BlogPost, Project, Testimonial};
use crate::shared::validation::ValidationErrors;

pub const DEFAULT_PROJECT_IMAGE: &str = "https://picsum.photos/seed/new/600/400";
pub const PUBLISH_DATE_FORMAT: &str = "%Y-%m-%d";

const REQUIRED: &str = "Este campo es obligatorio.";
const INVALID_DATE: &str = "La fecha debe tener el formato AAAA-MM-DD.";

fn optional_url(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub live_url: String,
    pub repo_url: String,
    /// Comma-separated, see `tags::parse_tags`.
    pub tags: String,
}

impl ProjectForm {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: DEFAULT_PROJECT_IMAGE.to_string(),
            live_url: String::new(),
            repo_url: String::new(),
            tags: String::new(),
        }
    }

    pub fn from_record(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            live_url: project.live_url.clone().unwrap_or_default(),
            repo_url: project.repo_url.clone().unwrap_or_default(),
            tags: join_tags(&project.tags),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, REQUIRED);
        errors.require("description", &self.description, REQUIRED);
        errors.require("image_url", &self.image_url, REQUIRED);
        errors.into_result(())
    }

    pub fn build(&self, id: String) -> Project {
        Project {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            live_url: optional_url(&self.live_url),
            repo_url: optional_url(&self.repo_url),
            tags: parse_tags(&self.tags),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Testimonial
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialForm {
    pub name: String,
    pub role: String,
    pub comment: String,
}

impl TestimonialForm {
    pub fn from_record(testimonial: &Testimonial) -> Self {
        Self {
            name: testimonial.name.clone(),
            role: testimonial.role.clone(),
            comment: testimonial.comment.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, REQUIRED);
        errors.require("role", &self.role, REQUIRED);
        errors.require("comment", &self.comment, REQUIRED);
        errors.into_result(())
    }

    pub fn build(&self, id: String) -> Testimonial {
        Testimonial {
            id,
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            comment: self.comment.trim().to_string(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Blog post
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostForm {
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub excerpt: String,
    pub content: String,
}

impl BlogPostForm {
    pub fn blank(author: &str, today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            author: author.to_string(),
            publish_date: today.format(PUBLISH_DATE_FORMAT).to_string(),
            excerpt: String::new(),
            content: String::new(),
        }
    }

    pub fn from_record(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            publish_date: post.publish_date.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title, REQUIRED);
        errors.require("author", &self.author, REQUIRED);

        let date = self.publish_date.trim();
        if date.is_empty() {
            errors.add("publish_date", REQUIRED);
        } else if NaiveDate::parse_from_str(date, PUBLISH_DATE_FORMAT).is_err() {
            errors.add("publish_date", INVALID_DATE);
        }

        errors.require("excerpt", &self.excerpt, REQUIRED);
        errors.require("content", &self.content, REQUIRED);
        errors.into_result(())
    }

    /// Markdown content is kept verbatim; only the single-line fields are trimmed.
    pub fn build(&self, id: String) -> BlogPost {
        BlogPost {
            id,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            publish_date: self.publish_date.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// RecordDraft
// ──────────────────────────────────────────────────────────
//

/// The form currently open in the admin editor, one variant per record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordDraft {
    Project(ProjectForm),
    Testimonial(TestimonialForm),
    BlogPost(BlogPostForm),
}

impl RecordDraft {
    pub fn blank(kind: RecordKind, author: &str, today: NaiveDate) -> Self {
        match kind {
            RecordKind::Projects => RecordDraft::Project(ProjectForm::blank()),
            RecordKind::Testimonials => RecordDraft::Testimonial(TestimonialForm::default()),
            RecordKind::Blog => RecordDraft::BlogPost(BlogPostForm::blank(author, today)),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            RecordDraft::Project(_) => RecordKind::Projects,
            RecordDraft::Testimonial(_) => RecordKind::Testimonials,
            RecordDraft::BlogPost(_) => RecordKind::Blog,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            RecordDraft::Project(form) => form.validate(),
            RecordDraft::Testimonial(form) => form.validate(),
            RecordDraft::BlogPost(form) => form.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::sample_project;

    #[test]
    fn test_project_form_round_trips_tags() {
        let mut project = sample_project("1", "Web");
        project.tags = vec!["React".to_string(), "Node.js".to_string()];

        let form = ProjectForm::from_record(&project);
        assert_eq!(form.tags, "React, Node.js");

        let rebuilt = form.build(project.id.clone());
        assert_eq!(rebuilt, project);
    }

    #[test]
    fn test_project_form_empty_urls_become_absent() {
        let mut form = ProjectForm::blank();
        form.title = "T".into();
        form.description = "D".into();
        form.live_url = "   ".into();
        form.repo_url = " https://github.com/x/y ".into();

        let project = form.build("id".into());

        assert_eq!(project.live_url, None);
        assert_eq!(project.repo_url.as_deref(), Some("https://github.com/x/y"));
        assert_eq!(project.image_url, DEFAULT_PROJECT_IMAGE);
    }

    #[test]
    fn test_project_form_requires_title_description_image() {
        let mut form = ProjectForm::blank();
        form.image_url.clear();

        let errors = form.validate().unwrap_err();

        assert!(errors.contains("title"));
        assert!(errors.contains("description"));
        assert!(errors.contains("image_url"));
        assert!(!errors.contains("tags"));
    }

    #[test]
    fn test_testimonial_form_requires_every_field() {
        let errors = TestimonialForm::default().validate().unwrap_err();

        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_blog_form_blank_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let form = BlogPostForm::blank("Tu Nombre", today);

        assert_eq!(form.author, "Tu Nombre");
        assert_eq!(form.publish_date, "2024-03-09");
    }

    #[test]
    fn test_blog_form_rejects_bad_date() {
        let form = BlogPostForm {
            title: "T".into(),
            author: "A".into(),
            publish_date: "2024-02-30".into(),
            excerpt: "E".into(),
            content: "C".into(),
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.get("publish_date"), Some(INVALID_DATE));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_draft_kind_matches_blank_kind() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        for kind in RecordKind::ALL {
            assert_eq!(RecordDraft::blank(kind, "A", today).kind(), kind);
        }
    }
}
