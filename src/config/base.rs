//! `[base]` section configuration.
//!
//! Contains basic site information like title, description, url, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in masthead.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "The Daily Ledger"
/// description = "Independent local news"
/// keywords = "news, local, politics"
/// url = "https://dailyledger.example"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used as the title suffix and `og:site_name`.
    pub title: String,

    /// Site description for SEO meta tags on non-article pages.
    pub description: String,

    /// Comma-separated keyword list appended to page keywords.
    #[serde(default)]
    pub keywords: String,

    /// Base URL for canonical links and absolute asset URLs.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code for the `<html lang>` attribute.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
