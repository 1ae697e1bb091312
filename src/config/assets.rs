//! `[assets]` section configuration.
//!
//! Locations of the client bundle and fixed head resources. The hrefs
//! here are interpolated into every document; the `root` directory is
//! what the static-file route serves from.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[assets]` section in masthead.toml.
///
/// # Example
/// ```toml
/// [assets]
/// root = "dist"
/// script = "/assets/index.js"
/// style = "/assets/index.css"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directory served by the static-file route (the Vite build output).
    #[serde(default = "defaults::assets::root")]
    #[educe(Default = defaults::assets::root())]
    pub root: PathBuf,

    /// Main client bundle, referenced by the module script and preload.
    #[serde(default = "defaults::assets::script")]
    #[educe(Default = defaults::assets::script())]
    pub script: String,

    /// Main stylesheet, referenced by the stylesheet link and preload.
    #[serde(default = "defaults::assets::style")]
    #[educe(Default = defaults::assets::style())]
    pub style: String,

    /// Favicon href.
    #[serde(default = "defaults::assets::favicon")]
    #[educe(Default = defaults::assets::favicon())]
    pub favicon: String,

    /// Apple touch icon href.
    #[serde(default = "defaults::assets::apple_touch_icon")]
    #[educe(Default = defaults::assets::apple_touch_icon())]
    pub apple_touch_icon: String,

    /// Web app manifest href.
    #[serde(default = "defaults::assets::manifest")]
    #[educe(Default = defaults::assets::manifest())]
    pub manifest: String,

    /// Default Open Graph image path, used when metadata has none.
    #[serde(default = "defaults::assets::og_image")]
    #[educe(Default = defaults::assets::og_image())]
    pub og_image: String,

    /// localStorage key the theme-bootstrap script reads.
    #[serde(default = "defaults::assets::theme_key")]
    #[educe(Default = defaults::assets::theme_key())]
    pub theme_key: String,
}
