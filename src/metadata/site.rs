//! Config-backed metadata service.
//!
//! `SiteMetadata` is the production [`MetadataService`]: titles and
//! descriptions are derived from the site configuration plus humanized
//! URL segments, canonical URLs from `[base].url`, and the JSON-LD
//! objects from the `[organization]` section. A deployment with a
//! content backend swaps this for its own implementation; nothing else
//! in the pipeline changes.

use super::{ArticleMeta, MetadataRecord, MetadataService};
use crate::{
    config::SiteConfig,
    utils::text::{capitalize_first, humanize_slug},
};
use anyhow::Result;
use serde_json::{Value, json};

/// Twitter card kind for article pages.
const CARD_ARTICLE: &str = "summary_large_image";
/// Twitter card kind for everything else.
const CARD_DEFAULT: &str = "summary";

/// Metadata service backed by `masthead.toml`.
pub struct SiteMetadata {
    config: &'static SiteConfig,
}

impl SiteMetadata {
    pub const fn new(config: &'static SiteConfig) -> Self {
        Self { config }
    }

    /// `"<name> | <site title>"`, degrading gracefully when either is empty.
    fn titled(&self, name: &str) -> String {
        let site = &self.config.base.title;
        match (name.is_empty(), site.is_empty()) {
            (true, _) => site.clone(),
            (_, true) => name.to_owned(),
            _ => format!("{name} | {site}"),
        }
    }

    /// Join keyword parts with the configured site keywords, skipping empties.
    fn keywords(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .copied()
            .chain([self.config.base.keywords.as_str()])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Fill the shared og/twitter fields from the primary fields.
    fn record(
        &self,
        title: String,
        description: String,
        keywords: String,
        canonical: String,
        twitter_card: &str,
    ) -> MetadataRecord {
        MetadataRecord {
            og_title: title.clone(),
            og_description: description.clone(),
            og_image: self.config.absolute_url(&self.config.assets.og_image),
            og_url: canonical.clone(),
            twitter_card: twitter_card.to_owned(),
            title,
            description,
            keywords,
            canonical,
            article: None,
        }
    }
}

impl MetadataService for SiteMetadata {
    fn article_metadata(&self, category: &str, slug: &str) -> Result<MetadataRecord> {
        let headline = humanize_slug(slug);
        let section = capitalize_first(category);
        let canonical = self.config.absolute_url(&format!("/news/{category}/{slug}"));

        let mut record = self.record(
            self.titled(&headline),
            format!("{section} news: {headline}."),
            self.keywords(&[category]),
            canonical,
            CARD_ARTICLE,
        );
        record.article = Some(ArticleMeta {
            published_time: String::new(),
            modified_time: String::new(),
            author: self.config.publisher_name().to_owned(),
            section,
            tags: vec![category.to_owned()],
        });
        Ok(record)
    }

    fn category_metadata(&self, category: &str) -> Result<MetadataRecord> {
        let name = format!("{} News", capitalize_first(category));
        let canonical = self.config.absolute_url(&format!("/news/{category}"));

        Ok(self.record(
            self.titled(&name),
            format!(
                "The latest {category} stories from {}.",
                self.config.publisher_name()
            ),
            self.keywords(&[category]),
            canonical,
            CARD_DEFAULT,
        ))
    }

    fn page_metadata(&self, path: &str) -> Result<MetadataRecord> {
        let name = path
            .split('/')
            .rfind(|segment| !segment.is_empty())
            .map(|segment| capitalize_first(&segment.replace('-', " ")))
            .unwrap_or_default();

        Ok(self.record(
            self.titled(&name),
            self.config.base.description.clone(),
            self.keywords(&[]),
            self.config.absolute_url(path),
            CARD_DEFAULT,
        ))
    }

    fn organization_structured_data(&self) -> Result<Value> {
        let config = self.config;
        let mut organization = json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": config.publisher_name(),
            "url": config.absolute_url("/"),
            "logo": config.absolute_url(&config.organization.logo),
            "sameAs": config.organization.same_as,
        });
        if !config.organization.legal_name.is_empty() {
            organization["legalName"] = json!(config.organization.legal_name);
        }
        Ok(organization)
    }

    fn article_structured_data(
        &self,
        detail: &Value,
        category: &str,
        slug: &str,
    ) -> Result<Value> {
        let config = self.config;
        let canonical = config.absolute_url(&format!("/news/{category}/{slug}"));
        let headline = detail
            .get("headline")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| humanize_slug(slug));

        let mut article = json!({
            "@context": "https://schema.org",
            "@type": "NewsArticle",
            "headline": headline,
            "articleSection": capitalize_first(category),
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": canonical,
            },
            "url": canonical,
            "image": [config.absolute_url(&config.assets.og_image)],
            "publisher": {
                "@type": "Organization",
                "name": config.publisher_name(),
                "logo": {
                    "@type": "ImageObject",
                    "url": config.absolute_url(&config.organization.logo),
                },
            },
        });

        // Optional detail fields pass through when the caller has them
        for key in ["datePublished", "dateModified"] {
            if let Some(value) = detail.get(key).and_then(Value::as_str) {
                article[key] = json!(value);
            }
        }
        if let Some(author) = detail.get("author").and_then(Value::as_str) {
            article["author"] = json!({ "@type": "Person", "name": author });
        }

        Ok(article)
    }
}

// ============================================================================
// Tests
// ============================================================================
