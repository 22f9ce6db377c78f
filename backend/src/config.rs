//! # Config Module
//!
//! Deployment settings that rebrand the same bundle for a different business.
//!
//! Values are baked in at build time through environment variables, so a
//! rebuild with a new environment produces a new identity without touching
//! code. Every setting has a per-variant fallback; nothing here can fail hard.

use log::warn;
use std::str::FromStr;
use thiserror::Error;

pub const VARIANT_VAR: &str = "PORTAL_VARIANT";
pub const BUSINESS_NAME_VAR: &str = "PORTAL_BUSINESS_NAME";
pub const CITY_VAR: &str = "PORTAL_BUSINESS_CITY";
pub const THEME_COLOR_VAR: &str = "PORTAL_THEME_COLOR";
pub const BASE_PATH_VAR: &str = "PORTAL_BASE_PATH";

/// Which kind of business the portal is deployed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortalVariant {
    /// Cosmetic dental clinic: patients, daypart slots, bookings start tomorrow
    #[default]
    Dental,
    /// Pet grooming salon: pets, clock-time slots, bookings start today
    Grooming,
}

impl PortalVariant {
    /// Name shown when the URL carries no business slug
    pub fn default_business_name(self) -> &'static str {
        match self {
            PortalVariant::Dental => "Nexus Master Lab",
            PortalVariant::Grooming => "Nexus Portal",
        }
    }

    pub fn default_city(self) -> &'static str {
        match self {
            PortalVariant::Dental => "Beverly Hills",
            PortalVariant::Grooming => "Charleston",
        }
    }

    pub fn default_accent_color(self) -> &'static str {
        match self {
            PortalVariant::Dental => "#0EA5E9",
            PortalVariant::Grooming => "#38BDF8",
        }
    }
}

impl FromStr for PortalVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dental" | "dentist" | "clinic" => Ok(PortalVariant::Dental),
            "grooming" | "groomer" | "pet" | "pets" => Ok(PortalVariant::Grooming),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown portal variant: {0:?}")]
    UnknownVariant(String),
    #[error("accent color must be #RGB or #RRGGBB, got {0:?}")]
    InvalidColor(String),
}

/// Branding and deployment settings for one build of the portal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub variant: PortalVariant,
    /// Fallback display name when the URL path has no slug
    pub business_name: String,
    pub city: String,
    /// Hex color, `#RGB` or `#RRGGBB`
    pub accent_color: String,
    /// `""` or `"/segment[/segment]"`, never with a trailing slash
    pub base_path: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::for_variant(PortalVariant::default())
    }
}

impl PortalConfig {
    /// All defaults for the given variant
    pub fn for_variant(variant: PortalVariant) -> Self {
        Self {
            variant,
            business_name: variant.default_business_name().to_string(),
            city: variant.default_city().to_string(),
            accent_color: variant.default_accent_color().to_string(),
            base_path: String::new(),
        }
    }

    /// Settings captured from the compile-time environment
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                VARIANT_VAR => option_env!("PORTAL_VARIANT"),
                BUSINESS_NAME_VAR => option_env!("PORTAL_BUSINESS_NAME"),
                CITY_VAR => option_env!("PORTAL_BUSINESS_CITY"),
                THEME_COLOR_VAR => option_env!("PORTAL_THEME_COLOR"),
                BASE_PATH_VAR => option_env!("PORTAL_BASE_PATH"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Settings from the process environment at runtime (static host)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source; unset or empty keys use defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let variant = match read(VARIANT_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e: ConfigError| {
                warn!("{}, using {:?}", e, PortalVariant::default());
                PortalVariant::default()
            }),
            None => PortalVariant::default(),
        };

        let mut config = Self::for_variant(variant);

        if let Some(name) = read(BUSINESS_NAME_VAR) {
            config.business_name = name;
        }
        if let Some(city) = read(CITY_VAR) {
            config.city = city;
        }
        if let Some(color) = read(THEME_COLOR_VAR) {
            match normalize_hex_color(&color) {
                Ok(color) => config.accent_color = color,
                Err(e) => warn!("{}, using {}", e, config.accent_color),
            }
        }
        if let Some(base) = read(BASE_PATH_VAR) {
            config.base_path = normalize_base_path(&base);
        }

        config
    }

    /// URL of a static asset under the deployment base path
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }
}

/// Check that a color is `#RGB` or `#RRGGBB` and return it in `#RRGGBB` form
pub fn normalize_hex_color(color: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidColor(color.to_string());
    let digits = color.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        6 => Ok(color.to_string()),
        3 => Ok(digits.chars().fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        })),
        _ => Err(invalid()),
    }
}

/// Normalize a base path to `""` or `/a/b` form
pub fn normalize_base_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.trim().is_empty()).collect();
    if segments.is_empty() {
        String::new()
    } else {
        format!("/{}", segments.join("/"))
    }
}
