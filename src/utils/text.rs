//! Text helpers for turning URL segments into human-readable names.

// ============================================================================
// Capitalization
// ============================================================================

/// Uppercase only the first character of the text.
///
/// `"about us"` → `"About us"`. Later words keep their case.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Turn a URL slug into a title-cased name.
///
/// Replaces `-` with a space and uppercases the first letter of each word:
/// `"city-council-meeting"` → `"City Council Meeting"`.
pub fn humanize_slug(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================
