//! Structured-data (JSON-LD) assembly.
//!
//! Decides **which** schema.org objects a page carries and in what
//! order; the objects themselves come from the metadata service:
//!
//! 1. Organization, on every page
//! 2. NewsArticle, on article pages only
//! 3. BreadcrumbList, when the trail has more than one crumb
//!
//! The homepage therefore carries 1 object, a category page 2, and an
//! article page 3.

use crate::{
    metadata::MetadataService,
    page::{Breadcrumb, PageKind},
};
use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Collect the structured-data objects for a page, in emission order.
pub fn collect(
    service: &dyn MetadataService,
    kind: &PageKind,
    crumbs: &[Breadcrumb],
) -> Result<Vec<Value>> {
    let mut objects = vec![
        service
            .organization_structured_data()
            .context("organization structured data failed")?,
    ];

    if let PageKind::Article { category, slug } = kind {
        // Article detail is resolved by the collaborator; this pipeline
        // passes an empty object and lets it fill what it knows.
        let detail = Value::Object(Map::new());
        objects.push(
            service
                .article_structured_data(&detail, category, slug)
                .with_context(|| format!("article structured data failed for {category}/{slug}"))?,
        );
    }

    if crumbs.len() > 1 {
        objects.push(
            service
                .breadcrumb_structured_data(crumbs)
                .context("breadcrumb structured data failed")?,
        );
    }

    Ok(objects)
}

/// Serialize objects for the `application/ld+json` script tag.
///
/// A single object is emitted bare, multiple objects as a JSON array;
/// consumers rely on either shape. A `</` inside a JSON string would
/// close the script tag early, so it is emitted as the equivalent
/// escape `<\/`.
pub fn to_script_json(objects: &[Value]) -> Result<String> {
    let json = match objects {
        [single] => serde_json::to_string(single),
        many => serde_json::to_string(many),
    }
    .context("structured data serialization failed")?;

    Ok(json.replace("</", "<\\/"))
}

// ============================================================================
// Tests
// ============================================================================
