//! Request-path classification and breadcrumb derivation.
//!
//! Both halves of this module are pure functions of the request path and
//! run before any metadata lookup:
//!
//! | Input path                  | PageKind                        |
//! |-----------------------------|---------------------------------|
//! | `/news/local/city-hall`     | `Article{local, city-hall}`     |
//! | `/news/local`               | `Category{local}`               |
//! | `/about-us`                 | `Page{/about-us}`               |
//! | `/news/a/b/c`               | `Page{/news/a/b/c}`             |
//!
//! Classification counts the elements of a full `/`-split, including the
//! leading empty segment before the first slash. `/news/<category>/<slug>`
//! therefore splits into exactly 4 parts. Deeper or shallower news paths
//! fall through to the generic `Page` kind; no path shape is an error.

use crate::utils::text::{capitalize_first, humanize_slug};

// ============================================================================
// Page Kinds
// ============================================================================

/// Classification of a request URL, derived once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// A single news article: `/news/<category>/<slug>`
    Article { category: String, slug: String },
    /// A news category index: `/news/<category>`
    Category { category: String },
    /// Any other path, served with generic page metadata
    Page { path: String },
}

impl PageKind {
    /// True for article pages. Drives the `og:type` decision in the
    /// document assembler so the segment rule is never re-derived there.
    pub const fn is_article(&self) -> bool {
        matches!(self, Self::Article { .. })
    }
}

/// Classify a request path into a [`PageKind`].
///
/// The query string (anything from the first `?`) is stripped before
/// splitting. The split keeps empty segments, so the leading `/` always
/// contributes one empty element to the count.
pub fn classify(path: &str) -> PageKind {
    let path = path.split('?').next().unwrap_or(path);
    let parts: Vec<&str> = path.split('/').collect();
    let is_news = parts.iter().any(|part| *part == "news");

    match (is_news, parts.len()) {
        (true, 4) => PageKind::Article {
            category: parts[2].to_owned(),
            slug: parts[3].to_owned(),
        },
        (true, 3) => PageKind::Category {
            category: parts[2].to_owned(),
        },
        _ => PageKind::Page {
            path: path.to_owned(),
        },
    }
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// One entry of the navigational breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Derive the breadcrumb trail from a request path.
///
/// The trail always starts with `{Home, /}`. News paths get a fixed
/// `News` crumb, then the category, then the humanized slug. All other
/// paths get one crumb per cumulative path prefix.
///
/// Naming is intentionally asymmetric: the news slug crumb capitalizes
/// every word (`city-council-meeting` → `City Council Meeting`), while
/// non-news crumbs capitalize only the first letter (`about-us` →
/// `About us`).
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb::new("Home", "/")];

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some(first) = segments.first() else {
        return crumbs;
    };

    if *first == "news" {
        crumbs.push(Breadcrumb::new("News", "/news"));

        if let Some(category) = segments.get(1) {
            crumbs.push(Breadcrumb::new(
                capitalize_first(category),
                format!("/news/{category}"),
            ));
        }
        if let Some(slug) = segments.get(2) {
            crumbs.push(Breadcrumb::new(
                humanize_slug(slug),
                format!("/news/{}/{slug}", segments[1]),
            ));
        }
    } else {
        let mut prefix = String::new();
        for segment in &segments {
            prefix.push('/');
            prefix.push_str(segment);
            crumbs.push(Breadcrumb::new(
                capitalize_first(&segment.replace('-', " ")),
                prefix.clone(),
            ));
        }
    }

    crumbs
}

// ============================================================================
// Tests
// ============================================================================
