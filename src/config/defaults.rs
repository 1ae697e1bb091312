//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [organization] Section Defaults
// ============================================================================

pub mod organization {
    pub fn logo() -> String {
        "/icons/logo.svg".into()
    }

    pub fn same_as() -> Vec<String> {
        vec![]
    }
}

// ============================================================================
// [assets] Section Defaults
// ============================================================================

pub mod assets {
    use std::path::PathBuf;

    pub fn root() -> PathBuf {
        "dist".into()
    }

    pub fn script() -> String {
        "/assets/index.js".into()
    }

    pub fn style() -> String {
        "/assets/index.css".into()
    }

    pub fn favicon() -> String {
        "/favicon.ico".into()
    }

    pub fn apple_touch_icon() -> String {
        "/icons/apple-touch-icon.png".into()
    }

    pub fn manifest() -> String {
        "/manifest.webmanifest".into()
    }

    pub fn og_image() -> String {
        "/icons/og-image.png".into()
    }

    pub fn theme_key() -> String {
        "theme".into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        4173
    }
}
