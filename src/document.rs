//! HTML shell document assembly.
//!
//! Builds the complete response document for one request: `<head>`
//! metadata, the structured-data script, the theme bootstrap, and an
//! empty root mount the client bundle hydrates into. The structure is
//! fixed and small, so the document is plain string composition; every
//! metadata-derived value goes through [`escape_html`] first.
//!
//! # Document Layout
//!
//! ```text
//! <!doctype html>
//! <html lang>
//!   <head>
//!     charset / viewport
//!     title / description / keywords / canonical
//!     og:* / twitter:*          (og:type from the classifier result)
//!     article:*                 (article pages only)
//!     favicons / manifest / bundle preloads / stylesheet
//!     theme bootstrap script
//!     application/ld+json script
//!   </head>
//!   <body>
//!     <div id="root"></div>    (always empty; no SSR of the app tree)
//!     module script
//!   </body>
//! </html>
//! ```

use crate::{
    config::SiteConfig,
    metadata::{ArticleMeta, MetadataRecord},
    page::PageKind,
};
use std::fmt::Write;

// ============================================================================
// Escaping
// ============================================================================

/// Escape a value for HTML attribute and text contexts.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Assembly
// ============================================================================

/// Assemble the full HTML document for one request.
///
/// `og:type` comes from the already-classified [`PageKind`] so the
/// article rule lives in exactly one place.
pub fn assemble(
    kind: &PageKind,
    meta: &MetadataRecord,
    structured_json: &str,
    config: &SiteConfig,
) -> String {
    let assets = &config.assets;
    let og_type = if kind.is_article() { "article" } else { "website" };

    let mut html = String::with_capacity(4096);
    html.push_str("<!doctype html>\n");
    let _ = writeln!(html, r#"<html lang="{}">"#, escape_html(&config.base.language));
    html.push_str("  <head>\n");
    html.push_str("    <meta charset=\"utf-8\"/>\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>\n",
    );

    let _ = writeln!(html, "    <title>{}</title>", escape_html(&meta.title));
    push_meta_name(&mut html, "description", &meta.description);
    push_meta_name(&mut html, "keywords", &meta.keywords);
    let _ = writeln!(
        html,
        r#"    <link rel="canonical" href="{}"/>"#,
        escape_html(&meta.canonical)
    );

    // Open Graph / Twitter cards
    push_meta_property(&mut html, "og:type", og_type);
    push_meta_property(&mut html, "og:site_name", &config.base.title);
    push_meta_property(&mut html, "og:title", &meta.og_title);
    push_meta_property(&mut html, "og:description", &meta.og_description);
    push_meta_property(&mut html, "og:image", &meta.og_image);
    push_meta_property(&mut html, "og:url", &meta.og_url);
    push_meta_name(&mut html, "twitter:card", &meta.twitter_card);
    push_meta_name(&mut html, "twitter:title", &meta.og_title);
    push_meta_name(&mut html, "twitter:description", &meta.og_description);
    push_meta_name(&mut html, "twitter:image", &meta.og_image);

    if let Some(article) = &meta.article {
        push_article_block(&mut html, article);
    }

    // Fixed asset references
    let _ = writeln!(html, r#"    <link rel="icon" href="{}"/>"#, assets.favicon);
    let _ = writeln!(
        html,
        r#"    <link rel="apple-touch-icon" href="{}"/>"#,
        assets.apple_touch_icon
    );
    let _ = writeln!(html, r#"    <link rel="manifest" href="{}"/>"#, assets.manifest);
    let _ = writeln!(
        html,
        r#"    <link rel="modulepreload" href="{}"/>"#,
        assets.script
    );
    let _ = writeln!(
        html,
        r#"    <link rel="preload" href="{}" as="style"/>"#,
        assets.style
    );
    let _ = writeln!(html, r#"    <link rel="stylesheet" href="{}"/>"#, assets.style);

    push_theme_bootstrap(&mut html, &assets.theme_key);

    if !structured_json.is_empty() {
        let _ = writeln!(
            html,
            r#"    <script type="application/ld+json">{structured_json}</script>"#
        );
    }

    html.push_str("  </head>\n");
    html.push_str("  <body>\n");
    html.push_str("    <div id=\"root\"></div>\n");
    let _ = writeln!(
        html,
        r#"    <script type="module" src="{}"></script>"#,
        assets.script
    );
    html.push_str("  </body>\n");
    html.push_str("</html>\n");

    html
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Emit `<meta name=... content=...>` unless the value is empty.
fn push_meta_name(html: &mut String, name: &str, content: &str) {
    if !content.is_empty() {
        let _ = writeln!(
            html,
            r#"    <meta name="{name}" content="{}"/>"#,
            escape_html(content)
        );
    }
}

/// Emit `<meta property=... content=...>` unless the value is empty.
fn push_meta_property(html: &mut String, property: &str, content: &str) {
    if !content.is_empty() {
        let _ = writeln!(
            html,
            r#"    <meta property="{property}" content="{}"/>"#,
            escape_html(content)
        );
    }
}

/// Emit the `article:*` meta block, one `article:tag` per tag in order.
fn push_article_block(html: &mut String, article: &ArticleMeta) {
    push_meta_property(html, "article:published_time", &article.published_time);
    push_meta_property(html, "article:modified_time", &article.modified_time);
    push_meta_property(html, "article:author", &article.author);
    push_meta_property(html, "article:section", &article.section);
    for tag in &article.tags {
        push_meta_property(html, "article:tag", tag);
    }
}

/// Emit the theme bootstrap script.
///
/// Runs before paint: reads the persisted preference from the
/// configured storage key, defaults to `light`, resolves `system` via
/// a media query, and applies the theme as a class on `<html>`.
fn push_theme_bootstrap(html: &mut String, theme_key: &str) {
    let _ = writeln!(
        html,
        "    <script>(function(){{var theme=localStorage.getItem(\"{theme_key}\")||\"light\";\
         if(theme===\"system\"){{theme=window.matchMedia(\"(prefers-color-scheme: dark)\")\
         .matches?\"dark\":\"light\";}}document.documentElement.classList.add(theme);}})();</script>"
    );
}

// ============================================================================
// Tests
// ============================================================================
