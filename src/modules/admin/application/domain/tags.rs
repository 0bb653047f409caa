//! Project tags are edited as one comma-separated string.

pub const TAG_DELIMITER: char = ',';

/// Split on commas, trim each tag, drop empty ones. Order is preserved.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_tags`] for tags that hold no commas.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
