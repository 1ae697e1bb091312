//! Page metadata records and the metadata collaborator seam.
//!
//! `MetadataRecord` is the **primary metadata structure** for a rendered
//! shell: everything the document assembler interpolates into `<head>`
//! comes from one record, produced exactly once per request.
//!
//! # Architecture
//!
//! ```text
//! classify() ──► PageKind ──► resolve() ──► MetadataRecord
//!                                │
//!                                ▼
//!                        MetadataService
//!              (article / category / page lookup,
//!               Organization + Article JSON-LD)
//! ```
//!
//! The service is an explicit dependency passed into the request handler
//! rather than process-wide state, so tests can substitute a stub.

mod site;

pub use site::SiteMetadata;

use crate::page::{Breadcrumb, PageKind};
use anyhow::{Context, Result};
use serde_json::{Value, json};

// ============================================================================
// Metadata Records
// ============================================================================

/// Article sub-record carried by [`MetadataRecord`] on article pages.
///
/// Field values are emitted as `article:*` meta tags; empty fields are
/// skipped individually, and a `None` sub-record skips the whole block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMeta {
    /// ISO 8601 publication timestamp
    pub published_time: String,
    /// ISO 8601 last-modification timestamp
    pub modified_time: String,
    pub author: String,
    /// Section name, e.g. the humanized category
    pub section: String,
    /// Ordered tag list; one `article:tag` meta tag each
    pub tags: Vec<String>,
}

/// Resolved metadata for one request. Read-only after resolution and
/// never cached across requests by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword list
    pub keywords: String,
    /// Absolute canonical URL
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    /// Twitter card kind, e.g. `summary_large_image`
    pub twitter_card: String,
    /// Present only for article pages
    pub article: Option<ArticleMeta>,
}

// ============================================================================
// Collaborator Interface
// ============================================================================

/// The metadata collaborator consumed by the render pipeline.
///
/// Every operation may fail; failures propagate to the request handler
/// as a 500 and are never substituted with defaults by the caller.
pub trait MetadataService {
    /// Metadata for `/news/<category>/<slug>`.
    fn article_metadata(&self, category: &str, slug: &str) -> Result<MetadataRecord>;

    /// Metadata for `/news/<category>`.
    fn category_metadata(&self, category: &str) -> Result<MetadataRecord>;

    /// Metadata for any other path.
    fn page_metadata(&self, path: &str) -> Result<MetadataRecord>;

    /// schema.org `Organization` object, emitted on every page.
    fn organization_structured_data(&self) -> Result<Value>;

    /// schema.org article object for `/news/<category>/<slug>`.
    ///
    /// `detail` carries optional article fields (headline, timestamps,
    /// author); the render pipeline passes an empty object.
    fn article_structured_data(
        &self,
        detail: &Value,
        category: &str,
        slug: &str,
    ) -> Result<Value>;

    /// schema.org `BreadcrumbList` object built from the trail.
    ///
    /// Provided: the derivation is owned by this crate and only the
    /// inclusion decision varies per page. Implementations may override.
    fn breadcrumb_structured_data(&self, crumbs: &[Breadcrumb]) -> Result<Value> {
        let items: Vec<Value> = crumbs
            .iter()
            .enumerate()
            .map(|(index, crumb)| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": crumb.name,
                    "item": crumb.url,
                })
            })
            .collect();

        Ok(json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": items,
        }))
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the metadata record for a classified page.
///
/// Dispatches to exactly one collaborator operation per request.
pub fn resolve(service: &dyn MetadataService, kind: &PageKind) -> Result<MetadataRecord> {
    match kind {
        PageKind::Article { category, slug } => service
            .article_metadata(category, slug)
            .with_context(|| format!("article metadata lookup failed for {category}/{slug}")),
        PageKind::Category { category } => service
            .category_metadata(category)
            .with_context(|| format!("category metadata lookup failed for {category}")),
        PageKind::Page { path } => service
            .page_metadata(path)
            .with_context(|| format!("page metadata lookup failed for {path}")),
    }
}

// ============================================================================
// Tests
// ============================================================================
