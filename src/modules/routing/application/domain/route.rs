use serde::Serialize;

use super::fragment::ROUTING_PREFIX;

const BLOG_SEGMENT: &str = "blog";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Home,
    BlogIndex,
    BlogPost { id: String },
    Admin,
}

impl Page {
    /// Fragment that navigates to this page.
    pub fn href(&self) -> String {
        match self {
            Page::Home => ROUTING_PREFIX.to_string(),
            Page::BlogIndex => format!("{ROUTING_PREFIX}{BLOG_SEGMENT}"),
            Page::BlogPost { id } => format!("{ROUTING_PREFIX}{BLOG_SEGMENT}/{id}"),
            Page::Admin => format!("{ROUTING_PREFIX}admin"),
        }
    }
}

/// Document title and meta description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
}

impl DocumentMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// First path segment after the routing prefix; empty for home.
    pub path: &'static str,
    pub page: Page,
    pub meta: DocumentMeta,
}

/// Outcome of resolving a route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub page: Page,
    /// Static metadata, `None` when the page sets its own.
    pub meta: Option<DocumentMeta>,
}

/// Ordered, fixed route table. The home entry always exists and is the
/// fallback for any unknown segment.
#[derive(Debug, Clone)]
pub struct RouteTable {
    home: RouteEntry,
    others: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(home: RouteEntry, others: Vec<RouteEntry>) -> Self {
        Self { home, others }
    }

    /// The site's routes, titled for `owner`.
    pub fn portfolio(owner: &str) -> Self {
        Self::new(
            RouteEntry {
                path: "",
                page: Page::Home,
                meta: DocumentMeta::new(
                    format!("Inicio | {owner}"),
                    "Bienvenido a mi portafolio personal.",
                ),
            },
            vec![
                RouteEntry {
                    path: BLOG_SEGMENT,
                    page: Page::BlogIndex,
                    meta: DocumentMeta::new(
                        format!("Blog | {owner}"),
                        "Lee mis artículos sobre desarrollo web.",
                    ),
                },
                RouteEntry {
                    path: "admin",
                    page: Page::Admin,
                    meta: DocumentMeta::new(
                        format!("Admin | {owner}"),
                        "Panel de administración de contenido.",
                    ),
                },
            ],
        )
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        std::iter::once(&self.home).chain(self.others.iter())
    }

    pub fn home(&self) -> &RouteEntry {
        &self.home
    }

    /// Entry for `segment`, or home when nothing matches.
    pub fn lookup(&self, segment: &str) -> &RouteEntry {
        self.entries()
            .find(|entry| entry.path == segment)
            .unwrap_or(&self.home)
    }

    /// Resolve the path that followed the routing prefix.
    ///
    /// `blog/<rest>` with a non-empty rest is a post page whose id is the whole
    /// rest, slashes included. Anything else goes through the table, so
    /// `blog/` with nothing after it is the index rather than a missing post.
    pub fn resolve(&self, path: &str) -> ResolvedRoute {
        if let Some(id) = path
            .strip_prefix(BLOG_SEGMENT)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|id| !id.is_empty())
        {
            return ResolvedRoute {
                page: Page::BlogPost { id: id.to_string() },
                meta: None,
            };
        }

        let first = path.split('/').next().unwrap_or_default();
        let entry = self.lookup(first);

        ResolvedRoute {
            page: entry.page.clone(),
            meta: Some(entry.meta.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::portfolio("Tu Nombre")
    }

    #[test]
    fn test_table_order_and_titles() {
        let paths: Vec<_> = table().entries().map(|e| e.path).collect();

        assert_eq!(paths, vec!["", "blog", "admin"]);
        assert_eq!(table().home().meta.title, "Inicio | Tu Nombre");
    }

    #[test]
    fn test_resolve_static_routes() {
        let t = table();

        assert_eq!(t.resolve("").page, Page::Home);
        assert_eq!(t.resolve("blog").page, Page::BlogIndex);
        assert_eq!(t.resolve("admin").page, Page::Admin);
        assert_eq!(
            t.resolve("blog").meta.unwrap().description,
            "Lee mis artículos sobre desarrollo web."
        );
    }

    #[test]
    fn test_resolve_post_keeps_full_remainder() {
        let t = table();

        let resolved = t.resolve("blog/typescript-para-principiantes");
        assert_eq!(
            resolved.page,
            Page::BlogPost {
                id: "typescript-para-principiantes".into()
            }
        );
        assert_eq!(resolved.meta, None);

        assert_eq!(
            t.resolve("blog/2024/intro").page,
            Page::BlogPost {
                id: "2024/intro".into()
            }
        );
    }

    #[test]
    fn test_blog_with_empty_remainder_is_index() {
        assert_eq!(table().resolve("blog/").page, Page::BlogIndex);
    }

    #[test]
    fn test_unknown_segments_fall_back_to_home() {
        let t = table();

        assert_eq!(t.resolve("unknown").page, Page::Home);
        assert_eq!(t.resolve("admin/extra").page, Page::Admin);
        assert_eq!(t.resolve("blogs/x").page, Page::Home);
        assert_eq!(
            t.resolve("unknown").meta.unwrap().title,
            "Inicio | Tu Nombre"
        );
    }

    #[test]
    fn test_page_hrefs() {
        assert_eq!(Page::Home.href(), "#!/");
        assert_eq!(Page::BlogIndex.href(), "#!/blog");
        assert_eq!(Page::Admin.href(), "#!/admin");
        assert_eq!(Page::BlogPost { id: "x".into() }.href(), "#!/blog/x");
    }
}
