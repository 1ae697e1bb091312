//! Per-request render pipeline.
//!
//! Drives the full URL-to-document sequence for one request:
//!
//! ```text
//! raw url ──► classify ──► resolve metadata ──► collect structured data
//!                │              (once)                   │
//!                └──► breadcrumbs ───────────────────────┘
//!                                      │
//!                                      ▼
//!                               assemble document
//! ```
//!
//! The path is classified once and the result threaded through; the
//! metadata lookup runs exactly once. Any failure aborts the request
//! and surfaces as a 500 at the handler, there is no fallback document.

use crate::{
    config::SiteConfig,
    document,
    metadata::{self, MetadataService},
    page::{breadcrumbs, classify},
    structured,
};
use anyhow::Result;

/// Render the complete HTML shell for a request path.
///
/// `raw_url` is the request URL as received; the query string is
/// stripped before classification and breadcrumb derivation.
pub fn render_page(
    raw_url: &str,
    service: &dyn MetadataService,
    config: &SiteConfig,
) -> Result<String> {
    let path = raw_url.split('?').next().unwrap_or(raw_url);

    let kind = classify(path);
    let meta = metadata::resolve(service, &kind)?;
    let crumbs = breadcrumbs(path);

    let objects = structured::collect(service, &kind, &crumbs)?;
    let script_json = structured::to_script_json(&objects)?;

    Ok(document::assemble(&kind, &meta, &script_json, config))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{MetadataRecord, SiteMetadata};
    use anyhow::bail;
    use serde_json::Value;

    fn test_config() -> &'static SiteConfig {
        let config: SiteConfig = toml::from_str(
            r#"
                [base]
                title = "The Daily Ledger"
                description = "Independent local news"
                url = "https://dailyledger.example"

                [organization]
                name = "Daily Ledger Media"
            "#,
        )
        .unwrap();
        Box::leak(Box::new(config))
    }

    fn render(path: &str) -> String {
        let config = test_config();
        let service = SiteMetadata::new(config);
        render_page(path, &service, config).unwrap()
    }

    #[test]
    fn test_render_article_page() {
        let html = render("/news/local/city-council-meeting");

        assert!(html.contains(r#"<meta property="og:type" content="article"/>"#));
        assert!(html.contains("<title>City Council Meeting | The Daily Ledger</title>"));
        // Organization + NewsArticle + BreadcrumbList
        assert_eq!(html.matches(r#""@type":"Organization""#).count(), 2); // top-level + publisher
        assert_eq!(html.matches(r#""@type":"NewsArticle""#).count(), 1);
        assert_eq!(html.matches(r#""@type":"BreadcrumbList""#).count(), 1);
    }

    #[test]
    fn test_render_category_page() {
        let html = render("/news/sports");

        assert!(html.contains(r#"<meta property="og:type" content="website"/>"#));
        assert_eq!(html.matches(r#""@type":"NewsArticle""#).count(), 0);
        assert_eq!(html.matches(r#""@type":"BreadcrumbList""#).count(), 1);
    }

    #[test]
    fn test_render_homepage_single_bare_object() {
        let html = render("/");

        // One crumb, not an article: only the Organization object,
        // serialized bare rather than as an array
        assert!(html.contains(r#"<script type="application/ld+json">{"#));
        assert_eq!(html.matches(r#""@type":"BreadcrumbList""#).count(), 0);
    }

    #[test]
    fn test_render_query_string_ignored() {
        let html = render("/news/local/story?utm_source=feed");

        assert!(html.contains(r#"<meta property="og:type" content="article"/>"#));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://dailyledger.example/news/local/story"/>"#
        ));
    }

    #[test]
    fn test_render_deep_news_path_is_generic() {
        let html = render("/news/local/story/extra");
        assert!(html.contains(r#"<meta property="og:type" content="website"/>"#));
    }

    /// Service whose metadata carries hostile markup.
    struct Hostile;

    impl MetadataService for Hostile {
        fn article_metadata(&self, _c: &str, _s: &str) -> Result<MetadataRecord> {
            self.page_metadata("/")
        }

        fn category_metadata(&self, _c: &str) -> Result<MetadataRecord> {
            self.page_metadata("/")
        }

        fn page_metadata(&self, _p: &str) -> Result<MetadataRecord> {
            Ok(MetadataRecord {
                title: r#"<script>alert("pwn")</script>"#.into(),
                description: r#""><meta http-equiv=refresh>"#.into(),
                ..Default::default()
            })
        }

        fn organization_structured_data(&self) -> Result<Value> {
            Ok(serde_json::json!({"@type": "Organization"}))
        }

        fn article_structured_data(&self, _d: &Value, _c: &str, _s: &str) -> Result<Value> {
            Ok(serde_json::json!({"@type": "NewsArticle"}))
        }
    }

    #[test]
    fn test_render_escapes_hostile_metadata() {
        let config = test_config();
        let html = render_page("/about-us", &Hostile, config).unwrap();

        assert!(!html.contains("<script>alert"));
        assert!(!html.contains(r#""><meta http-equiv"#));
        assert!(html.contains("&lt;script&gt;alert(&quot;pwn&quot;)&lt;/script&gt;"));
    }

    /// Service that always fails lookups.
    struct Failing;

    impl MetadataService for Failing {
        fn article_metadata(&self, _c: &str, _s: &str) -> Result<MetadataRecord> {
            bail!("metadata backend unavailable")
        }

        fn category_metadata(&self, _c: &str) -> Result<MetadataRecord> {
            bail!("metadata backend unavailable")
        }

        fn page_metadata(&self, _p: &str) -> Result<MetadataRecord> {
            bail!("metadata backend unavailable")
        }

        fn organization_structured_data(&self) -> Result<Value> {
            bail!("metadata backend unavailable")
        }

        fn article_structured_data(&self, _d: &Value, _c: &str, _s: &str) -> Result<Value> {
            bail!("metadata backend unavailable")
        }
    }

    #[test]
    fn test_render_propagates_resolution_failure() {
        let config = test_config();
        let err = render_page("/news/local/story", &Failing, config).unwrap_err();
        assert!(format!("{err:#}").contains("metadata backend unavailable"));
    }
}
