use crate::assets::AssetLoader;
use braille_dither::{Style, Theme};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Values used when a request leaves a field out
    #[serde(default)]
    pub defaults: RenderDefaults,

    /// Bounds on what a request may ask for
    #[serde(default)]
    pub limits: Limits,
}

/// Default render options
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderDefaults {
    /// Characters per row
    #[serde(default = "default_width")]
    pub width: usize,

    /// User-facing exposure in 0..=100 (not yet inverted)
    #[serde(default = "default_exposure")]
    pub exposure: f64,

    #[serde(default, deserialize_with = "from_str_field")]
    pub style: Style,

    #[serde(default, deserialize_with = "from_str_field")]
    pub theme: Theme,
}

fn default_width() -> usize {
    50
}

fn default_exposure() -> f64 {
    50.0
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            width: default_width(),
            exposure: default_exposure(),
            style: Style::default(),
            theme: Theme::default(),
        }
    }
}

/// Request limits
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Limits {
    /// Upper bound for width and height, in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Maximum upload body size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_length() -> usize {
    1000
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Deserialize a field through its `FromStr` impl
fn from_str_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Check that the defaults fit inside the limits
    pub fn check(&self) -> Result<(), String> {
        let max = self.limits.max_length;
        if max == 0 {
            return Err("limits.max_length must be at least 1".to_string());
        }
        if !(1..=max).contains(&self.defaults.width) {
            return Err(format!(
                "defaults.width must be between 1 and {max}, got {}",
                self.defaults.width
            ));
        }
        if !(0.0..=100.0).contains(&self.defaults.exposure) {
            return Err(format!(
                "defaults.exposure must be between 0 and 100, got {}",
                self.defaults.exposure
            ));
        }
        Ok(())
    }

    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// Unreadable, malformed or inconsistent configs fall back to the
    /// built-in defaults.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => match config.check() {
                    Ok(()) => {
                        tracing::info!(
                            width = config.defaults.width,
                            style = %config.defaults.style,
                            max_length = config.limits.max_length,
                            "Loaded configuration"
                        );
                        config
                    }
                    Err(reason) => {
                        tracing::warn!(%reason, "Invalid config, using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
