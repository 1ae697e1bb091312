//! `[serve]` section configuration.
//!
//! Contains HTTP server settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable that overrides every other port source.
const PORT_ENV_VAR: &str = "MASTHEAD_PORT";

/// `[serve]` section in masthead.toml - HTTP server settings.
///
/// # Example
/// ```toml
/// [serve]
/// interface = "0.0.0.0"  # Listen on all interfaces
/// port = 8080
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    #[serde(default = "defaults::serve::interface")]
    #[educe(Default = defaults::serve::interface())]
    pub interface: String,

    /// HTTP port number (default: 4173).
    #[serde(default = "defaults::serve::port")]
    #[educe(Default = defaults::serve::port())]
    pub port: u16,
}

impl ServeConfig {
    /// Resolve the listening port.
    ///
    /// Precedence: `MASTHEAD_PORT` env var, then the `--port` flag
    /// (already merged into `self.port` by `update_with_cli`), then the
    /// config/default value.
    pub fn resolve_port(&self) -> u16 {
        port_from(env::var(PORT_ENV_VAR).ok().as_deref(), self.port)
    }
}

/// Pick the port from an optional env value, falling back otherwise.
/// Unparseable values fall back rather than abort.
fn port_from(env_value: Option<&str>, fallback: u16) -> u16 {
    env_value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_serve_config() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [serve]
            interface = "0.0.0.0"
            port = 8080
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.serve.interface, "0.0.0.0");
        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_serve_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.serve.interface, "127.0.0.1");
        assert_eq!(config.serve.port, 4173);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [serve]
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_port_from_env_wins() {
        assert_eq!(port_from(Some("9000"), 4173), 9000);
    }

    #[test]
    fn test_port_from_env_with_whitespace() {
        assert_eq!(port_from(Some(" 9000 "), 4173), 9000);
    }

    #[test]
    fn test_port_from_unset_env_falls_back() {
        assert_eq!(port_from(None, 4173), 4173);
    }

    #[test]
    fn test_port_from_invalid_env_falls_back() {
        assert_eq!(port_from(Some("not-a-port"), 4173), 4173);
        assert_eq!(port_from(Some("99999"), 4173), 4173);
        assert_eq!(port_from(Some(""), 4173), 4173);
    }
}
