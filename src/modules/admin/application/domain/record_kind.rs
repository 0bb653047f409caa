use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of record kinds the admin console manages, one tab each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Projects,
    Testimonials,
    Blog,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Projects,
        RecordKind::Testimonials,
        RecordKind::Blog,
    ];

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            RecordKind::Projects => "Proyectos",
            RecordKind::Testimonials => "Testimonios",
            RecordKind::Blog => "Artículos del Blog",
        }
    }

    /// Name of a single record, used in the editor heading.
    pub fn singular(self) -> &'static str {
        match self {
            RecordKind::Projects => "Proyecto",
            RecordKind::Testimonials => "Testimonio",
            RecordKind::Blog => "Artículo del Blog",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Projects => "projects",
            RecordKind::Testimonials => "testimonials",
            RecordKind::Blog => "blog",
        };
        f.write_str(name)
    }
}
