//! # Brand Module
//!
//! Derives the business identity shown in the UI from the page URL and the
//! build configuration. Everything here is a pure function of its inputs, so
//! the UI can recompute it whenever it likes and always get the same answer.

use crate::config::PortalConfig;

/// Title template suffix used for the browser tab
pub const APP_NAME: &str = "Premium Client Portal";

/// Business name derived from the first non-empty path segment.
///
/// `"/west-ashley-paws"` becomes `"West Ashley Paws"`: the slug is split on
/// `-`, each token gets its first character uppercased and the rest left as
/// is, and the tokens are joined with single spaces. Paths with no segment
/// return `fallback`.
pub fn resolve_business_name(pathname: &str, fallback: &str) -> String {
    match pathname.split('/').find(|segment| !segment.is_empty()) {
        Some(slug) => title_case_slug(slug),
        None => fallback.to_string(),
    }
}

fn title_case_slug(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip a configured base path (e.g. `/repo`) from the front of a pathname
fn strip_base_path<'a>(pathname: &'a str, base_path: &str) -> &'a str {
    if base_path.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base_path) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => pathname,
    }
}

/// Display identity of the deployed business
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandContext {
    pub business_name: String,
    pub city: String,
    pub accent_color: String,
}

impl BrandContext {
    /// Identity used before the page knows its own URL
    pub fn placeholder(config: &PortalConfig) -> Self {
        Self {
            business_name: config.business_name.clone(),
            city: config.city.clone(),
            accent_color: config.accent_color.clone(),
        }
    }

    pub fn resolve(pathname: &str, config: &PortalConfig) -> Self {
        let path = strip_base_path(pathname, &config.base_path);
        Self {
            business_name: resolve_business_name(path, &config.business_name),
            ..Self::placeholder(config)
        }
    }

    /// Browser tab title, e.g. "West Ashley Paws | Premium Client Portal"
    pub fn document_title(&self) -> String {
        format!("{} | {}", self.business_name, APP_NAME)
    }

    /// Accent color with a two-digit hex alpha suffix, for translucent surfaces
    pub fn tint(&self, alpha: u8) -> String {
        format!("{}{:02X}", self.accent_color, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::THEME_COLOR_VAR;

    const FALLBACK: &str = "Nexus Master Lab";

    #[test]
    fn test_slug_is_title_cased() {
        assert_eq!(resolve_business_name("/west-ashley-paws", FALLBACK), "West Ashley Paws");
        assert_eq!(resolve_business_name("/island-dog-pet-wash/", FALLBACK), "Island Dog Pet Wash");
        assert_eq!(resolve_business_name("/smile", FALLBACK), "Smile");
    }

    #[test]
    fn test_only_first_segment_is_used() {
        assert_eq!(resolve_business_name("/bright-smiles/visits", FALLBACK), "Bright Smiles");
        assert_eq!(resolve_business_name("//bright-smiles", FALLBACK), "Bright Smiles");
    }

    #[test]
    fn test_empty_paths_use_fallback() {
        assert_eq!(resolve_business_name("/", FALLBACK), FALLBACK);
        assert_eq!(resolve_business_name("", FALLBACK), FALLBACK);
        assert_eq!(resolve_business_name("///", "Nexus Portal"), "Nexus Portal");
    }

    #[test]
    fn test_rest_of_token_is_left_unchanged() {
        assert_eq!(resolve_business_name("/dr-McGee-DDS", FALLBACK), "Dr McGee DDS");
        assert_eq!(resolve_business_name("/24-7-dental", FALLBACK), "24 7 Dental");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let config = PortalConfig::default();
        let first = BrandContext::resolve("/west-ashley-paws", &config);
        let second = BrandContext::resolve("/west-ashley-paws", &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_context_copies_config() {
        let config = PortalConfig::default();
        let brand = BrandContext::resolve("/west-ashley-paws", &config);
        assert_eq!(brand.business_name, "West Ashley Paws");
        assert_eq!(brand.city, "Beverly Hills");
        assert_eq!(brand.accent_color, "#0EA5E9");
    }

    #[test]
    fn test_tint_of_short_accent_is_valid_css() {
        let config = PortalConfig::from_lookup(|key| (key == THEME_COLOR_VAR).then(|| "#fff".to_string()));
        let tint = BrandContext::placeholder(&config).tint(0x33);
        assert_eq!(tint, "#ffffff33");
        assert_eq!(tint.len(), 9);
    }

    #[test]
    fn test_base_path_is_stripped_before_resolving() {
        let config = PortalConfig {
            base_path: "/portal".to_string(),
            ..PortalConfig::default()
        };
        assert_eq!(
            BrandContext::resolve("/portal/west-ashley-paws", &config).business_name,
            "West Ashley Paws"
        );
        assert_eq!(BrandContext::resolve("/portal/", &config).business_name, "Nexus Master Lab");
        // Only a whole-segment prefix counts
        assert_eq!(BrandContext::resolve("/portals-r-us", &config).business_name, "Portals R Us");
    }

    #[test]
    fn test_document_title_and_tint() {
        let brand = BrandContext::resolve("/west-ashley-paws", &PortalConfig::default());
        assert_eq!(brand.document_title(), "West Ashley Paws | Premium Client Portal");
        assert_eq!(brand.tint(0x08), "#0EA5E908");
        assert_eq!(brand.tint(0x15), "#0EA5E915");
    }
}
