//! Site configuration management for `masthead.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[base]`         | Site metadata (title, description, url)        |
//! | `[organization]` | Publisher identity for Organization JSON-LD    |
//! | `[assets]`       | Client bundle hrefs and static-file root       |
//! | `[serve]`        | HTTP server (port, interface)                  |
//! | `[extra]`        | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "The Daily Ledger"
//! description = "Independent local news"
//! url = "https://dailyledger.example"
//!
//! [organization]
//! name = "Daily Ledger Media"
//! same_as = ["https://twitter.com/dailyledger"]
//!
//! [assets]
//! root = "dist"
//!
//! [serve]
//! port = 4173
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod assets;
mod base;
pub mod defaults;
mod error;
mod organization;
mod serve;

// Internal imports used in this module
use assets::AssetsConfig;
use base::BaseConfig;
use error::ConfigError;
use organization::OrganizationConfig;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing masthead.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (set after loading)
    #[serde(skip)]
    root: Option<PathBuf>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Publishing organization identity
    #[serde(default)]
    pub organization: OrganizationConfig,

    /// Client bundle and static asset settings
    #[serde(default)]
    pub assets: AssetsConfig,

    /// HTTP server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// Base URL with any trailing slash removed. Empty when unset.
    pub fn base_url(&self) -> &str {
        self.base.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Absolutize a site-relative path against the base URL.
    ///
    /// Paths that are already absolute URLs pass through unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}{path}", self.base_url())
    }

    /// Publisher name, falling back to the site title.
    pub fn publisher_name(&self) -> &str {
        if self.organization.name.is_empty() {
            &self.base.title
        } else {
            &self.organization.name
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.assets.root = Self::normalize_path(&root.join(&self.assets.root));
        self.set_root(&root);

        if let Commands::Serve { interface, port } = &cli.command {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.assets.script.is_empty() || self.assets.style.is_empty() {
            bail!(ConfigError::Validation(
                "[assets.script] and [assets.style] must not be empty".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "The Daily Ledger"
            description = "Independent local news"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "The Daily Ledger");
        assert_eq!(config.base.description, "Independent local news");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "The Daily Ledger"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masthead.toml");
        fs::write(
            &path,
            r#"
                [base]
                title = "Test"
                description = "Test site"

                [serve]
                port = 9090
            "#,
        )
        .unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.base.title, "Test");
        assert_eq!(config.serve.port, 9090);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SiteConfig::from_path(Path::new("/nonexistent/masthead.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com/".into());
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    fn test_base_url_unset() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url(), "");
    }

    #[test]
    fn test_absolute_url() {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com".into());

        assert_eq!(
            config.absolute_url("/news/local"),
            "https://example.com/news/local"
        );
        // Already-absolute URLs pass through
        assert_eq!(
            config.absolute_url("https://cdn.example.com/logo.svg"),
            "https://cdn.example.com/logo.svg"
        );
    }

    #[test]
    fn test_publisher_name_fallback() {
        let mut config = SiteConfig::default();
        config.base.title = "The Daily Ledger".into();
        assert_eq!(config.publisher_name(), "The Daily Ledger");

        config.organization.name = "Daily Ledger Media".into();
        assert_eq!(config.publisher_name(), "Daily Ledger Media");
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = SiteConfig::default();
        config.base.url = Some("ftp://example.com".into());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masthead.toml");
        fs::write(&path, "").unwrap();
        config.config_path = path;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.url]"));
    }

    #[test]
    fn test_validate_missing_config_file() {
        let config = SiteConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [extra]
            custom_field = "custom_value"
            number_field = 42
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("custom_value")
        );
        assert_eq!(
            config.extra.get("number_field").and_then(|v| v.as_integer()),
            Some(42)
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "The Daily Ledger"
            description = "Independent local news"
            keywords = "news, local"
            url = "https://dailyledger.example"
            language = "en-US"

            [organization]
            name = "Daily Ledger Media"
            legal_name = "Daily Ledger Media LLC"
            logo = "/icons/logo.svg"
            same_as = ["https://twitter.com/dailyledger"]

            [assets]
            root = "dist"
            script = "/assets/index.js"
            style = "/assets/index.css"

            [serve]
            interface = "127.0.0.1"
            port = 4173

            [extra]
            analytics_id = "UA-12345"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "The Daily Ledger");
        assert_eq!(config.organization.name, "Daily Ledger Media");
        assert_eq!(config.assets.root, PathBuf::from("dist"));
        assert_eq!(config.serve.port, 4173);
        assert!(config.extra.contains_key("analytics_id"));
    }
}
