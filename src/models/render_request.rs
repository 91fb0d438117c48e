//! Form field validation for render requests.
//!
//! Both the HTTP handler and the `render` command collect raw string fields
//! into a [`RenderForm`] and turn it into a core [`RenderConfig`] here, so
//! the two entry points accept exactly the same input.

use braille_dither::{RenderConfig, Style, Theme};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::models::{AppConfig, RenderDefaults};

const MIN_EXPOSURE: f64 = 0.0;
const MAX_EXPOSURE: f64 = 100.0;

/// Raw render options as submitted by a client
///
/// Every field is optional; blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct RenderForm {
    /// Characters per row (1..=max_length)
    pub width: Option<String>,
    /// Rows; computed from the image aspect ratio when absent
    pub height: Option<String>,
    /// Exposure in 0..=100, higher is brighter
    #[serde(alias = "exposure")]
    pub brightness: Option<String>,
    /// normal, contrast, edge, smooth or brightness
    pub style: Option<String>,
    /// light or dark
    pub theme: Option<String>,
    /// Checkbox: "on", "true" or "1" to invert; absent means unchecked
    pub invert: Option<String>,
}

impl RenderForm {
    /// Record a text field by its form name
    ///
    /// Returns `false` if the name is not a render option.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "width" => &mut self.width,
            "height" => &mut self.height,
            "brightness" | "exposure" => &mut self.brightness,
            "style" => &mut self.style,
            "theme" => &mut self.theme,
            "invert" => &mut self.invert,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Validate against the decoded image size and produce a core config
    ///
    /// Checks run in order exposure, dimensions, style, theme; the first
    /// failing group is reported. Width and height errors are reported
    /// together.
    pub fn validate(
        &self,
        image_size: (u32, u32),
        config: &AppConfig,
    ) -> Result<RenderConfig, ValidationError> {
        let exposure = self.exposure(config)?;
        let (width, height) = self.dimensions(image_size, config)?;

        let style = match present(&self.style) {
            Some(value) => value.parse::<Style>()?,
            None => config.defaults.style,
        };
        let theme = match present(&self.theme) {
            Some(value) => value.parse::<Theme>()?,
            None => config.defaults.theme,
        };
        let invert = self.invert.as_deref().is_some_and(is_checked);

        Ok(RenderConfig::new(width, height)
            .exposure(exposure)
            .style(style)
            .theme(theme)
            .invert(invert))
    }

    /// Stored exposure, inverted from the user-facing value
    fn exposure(&self, config: &AppConfig) -> Result<f64, ValidationError> {
        let user = match present(&self.brightness) {
            Some(value) => value
                .parse::<f64>()
                .ok()
                .filter(|v| (MIN_EXPOSURE..=MAX_EXPOSURE).contains(v))
                .ok_or(ValidationError::Exposure)?,
            None => default_exposure(config),
        };
        Ok(MAX_EXPOSURE - user)
    }

    fn dimensions(
        &self,
        (image_width, image_height): (u32, u32),
        config: &AppConfig,
    ) -> Result<(usize, usize), ValidationError> {
        let max = config.limits.max_length;
        let mut errors = Vec::new();

        let width = match present(&self.width) {
            Some(value) => parse_length(value, max),
            None => Some(config.defaults.width.clamp(1, max.max(1))),
        };
        if width.is_none() {
            errors.push(ValidationError::dimension_message("width", max));
        }

        let height = match present(&self.height) {
            Some(value) => {
                let height = parse_length(value, max);
                if height.is_none() {
                    errors.push(ValidationError::dimension_message("height", max));
                }
                height
            }
            None => width.map(|w| proportional_height(w, image_width, image_height, max)),
        };

        match (width, height) {
            (Some(width), Some(height)) if errors.is_empty() => Ok((width, height)),
            _ => Err(ValidationError::Dimensions(errors)),
        }
    }
}

/// The configured exposure, forced into range
fn default_exposure(config: &AppConfig) -> f64 {
    let exposure = config.defaults.exposure;
    if exposure.is_nan() {
        RenderDefaults::default().exposure
    } else {
        exposure.clamp(MIN_EXPOSURE, MAX_EXPOSURE)
    }
}

/// A field value with surrounding whitespace removed, or `None` if blank
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_length(value: &str, max: usize) -> Option<usize> {
    value
        .parse::<i64>()
        .ok()
        .filter(|&v| v >= 1)
        .and_then(|v| usize::try_from(v).ok())
        .filter(|&v| v <= max)
}

/// Height that keeps the image aspect ratio
///
/// A braille cell is 2 dots wide and 4 tall, so rows count half as much as
/// columns: `round(width * image_height / image_width / 2)`, clamped to
/// `1..=max`.
fn proportional_height(width: usize, image_width: u32, image_height: u32, max: usize) -> usize {
    if image_width == 0 {
        return 1;
    }
    let height = (width as f64 * image_height as f64 / image_width as f64 / 2.0).round();
    (height as usize).clamp(1, max.max(1))
}

fn is_checked(value: &str) -> bool {
    let value = value.trim();
    ["on", "true", "1"]
        .iter()
        .any(|accepted| value.eq_ignore_ascii_case(accepted))
}
