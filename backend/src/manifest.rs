//! Web app manifest that lets visitors install the portal to their home screen.

use serde::Serialize;

use crate::brand::APP_NAME;
use crate::config::PortalConfig;

/// Page background behind the app, also used for the splash screen
pub const BACKGROUND_COLOR: &str = "#050505";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub scope: String,
    pub display: String,
    pub orientation: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl WebManifest {
    pub fn for_config(config: &PortalConfig) -> Self {
        let icon = |size: u32| ManifestIcon {
            src: config.asset_url(&format!("icon-{size}x{size}.png")),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
        };
        let start_url = format!("{}/", config.base_path);

        Self {
            name: APP_NAME.to_string(),
            short_name: APP_NAME.to_string(),
            description: format!("{} - Official App", APP_NAME),
            scope: start_url.clone(),
            start_url,
            display: "standalone".to_string(),
            orientation: "portrait".to_string(),
            theme_color: config.accent_color.clone(),
            background_color: BACKGROUND_COLOR.to_string(),
            icons: vec![icon(192), icon(512)],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A `<link>` or `<meta>` element the page head needs to be installable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub element: &'static str,
    pub attributes: Vec<(&'static str, String)>,
}

impl HeadTag {
    fn link(rel: &'static str, href: String) -> Self {
        Self {
            element: "link",
            attributes: vec![("rel", rel.to_string()), ("href", href)],
        }
    }

    fn meta(name: &'static str, content: String) -> Self {
        Self {
            element: "meta",
            attributes: vec![("name", name.to_string()), ("content", content)],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }
}

/// Manifest, icon and theme tags, all addressed from the deployment base path
pub fn head_tags(config: &PortalConfig) -> Vec<HeadTag> {
    vec![
        HeadTag::link("manifest", config.asset_url("manifest.json")),
        HeadTag::link("icon", config.asset_url("favicon.ico")),
        HeadTag::link("apple-touch-icon", config.asset_url("icon-192x192.png")),
        HeadTag::meta("theme-color", config.accent_color.clone()),
    ]
}
