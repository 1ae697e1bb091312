//! `[organization]` section configuration.
//!
//! Identity of the publishing organization, emitted as schema.org
//! Organization structured data on every page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[organization]` section in masthead.toml.
///
/// # Example
/// ```toml
/// [organization]
/// name = "Daily Ledger Media"
/// legal_name = "Daily Ledger Media LLC"
/// logo = "/icons/logo.svg"
/// same_as = [
///     "https://twitter.com/dailyledger",
///     "https://facebook.com/dailyledger",
/// ]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OrganizationConfig {
    /// Publisher display name. Falls back to `[base].title` when empty.
    #[serde(default)]
    pub name: String,

    /// Registered legal name; omitted from structured data when empty.
    #[serde(default)]
    pub legal_name: String,

    /// Logo path or URL for the Organization and publisher objects.
    #[serde(default = "defaults::organization::logo")]
    #[educe(Default = defaults::organization::logo())]
    pub logo: String,

    /// Social profile URLs for the `sameAs` property.
    #[serde(default = "defaults::organization::same_as")]
    #[educe(Default = defaults::organization::same_as())]
    pub same_as: Vec<String>,
}
