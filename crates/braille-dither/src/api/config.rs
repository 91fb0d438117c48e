//! Render configuration.

use crate::dither::Style;
use crate::encode::{CELL_HEIGHT, CELL_WIDTH};
use crate::output::{needs_invert, Theme};

/// Everything a single render needs besides the image.
///
/// `width` and `height` are measured in braille characters; the source is
/// resampled onto `2 * width` by `4 * height` samples.
///
/// `exposure` is the *stored* threshold in `[0, 100]`. Request validation
/// inverts the user-facing value (`stored = 100 - user`), so a larger
/// stored exposure raises more dots.
///
/// # Example
///
/// ```
/// use braille_dither::{RenderConfig, Style, Theme};
///
/// let config = RenderConfig::new(40, 20)
///     .exposure(35.0)
///     .style(Style::Smooth)
///     .theme(Theme::Dark)
///     .invert(true);
///
/// assert_eq!(config.width, 40);
/// assert!(config.needs_invert());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Characters per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Stored exposure threshold in `[0, 100]`.
    pub exposure: f64,
    pub style: Style,
    pub theme: Theme,
    /// User request to flip the dots.
    pub invert: bool,
}

impl RenderConfig {
    /// Stored exposure used when none is set.
    pub const DEFAULT_EXPOSURE: f64 = 50.0;

    /// A configuration with the default style, theme and exposure.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            exposure: Self::DEFAULT_EXPOSURE,
            style: Style::default(),
            theme: Theme::default(),
            invert: false,
        }
    }

    /// Set the stored exposure.
    #[inline]
    pub fn exposure(mut self, exposure: f64) -> Self {
        self.exposure = exposure;
        self
    }

    #[inline]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Sample grid dimensions as `(2 * width, 4 * height)`.
    #[inline]
    pub fn grid_size(&self) -> (usize, usize) {
        (self.width * CELL_WIDTH, self.height * CELL_HEIGHT)
    }

    /// Whether the output must be inverted for this theme and request.
    #[inline]
    pub fn needs_invert(&self) -> bool {
        needs_invert(self.invert, self.theme)
    }
}
