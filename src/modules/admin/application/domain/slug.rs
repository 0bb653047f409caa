//! URL-safe identifiers derived from titles.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Base used when a title has no letters or digits to slug.
pub const FALLBACK_SLUG: &str = "post";

/// Fold accents to ASCII, lowercase, and collapse every run of characters
/// outside `[a-z0-9]` into a single `-`, trimmed at both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.nfd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// `slugify(title)`, suffixed with `-2`, `-3`, ... until it is not `taken`.
/// Never empty: a title without sluggable characters starts from
/// [`FALLBACK_SLUG`].
pub fn unique_slug(title: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut base = slugify(title);
    if base.is_empty() {
        base = FALLBACK_SLUG.to_string();
    }
    if !taken(&base) {
        return base;
    }

    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}
