/// Fragment prefix marking a page route rather than an in-page anchor.
pub const ROUTING_PREFIX: &str = "#!/";

/// `ROUTING_PREFIX` once the `#` is gone.
const ROUTE_MARKER: &str = "!/";

/// A location fragment, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `#!/<path>`: the path after the prefix, possibly empty.
    Route(String),
    /// `#<id>`: an element of the current page.
    Anchor(String),
}

impl Fragment {
    /// Classify a raw fragment. The leading `#` is optional. An empty fragment
    /// (or a bare `#`) is the home route.
    pub fn parse(raw: &str) -> Self {
        let body = raw.strip_prefix('#').unwrap_or(raw);

        if body.is_empty() {
            return Fragment::Route(String::new());
        }

        match body.strip_prefix(ROUTE_MARKER) {
            Some(path) => Fragment::Route(path.to_string()),
            None => Fragment::Anchor(body.to_string()),
        }
    }
}
