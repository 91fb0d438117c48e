//! Rendering styles and their encoding settings.

use std::fmt;
use std::str::FromStr;

use super::kernel::{
    Kernel, ATKINSON, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, NO_DIFFUSION, SIERRA_LITE,
};
use crate::api::ParseStyleError;
use crate::encode::ThresholdMode;

/// Rendering style selection.
///
/// Each style fixes the diffusion kernel and how samples are compared
/// against the exposure threshold. The form names accepted by
/// [`FromStr`] are listed per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Floyd-Steinberg diffusion on linear luminance (`normal`).
    #[default]
    Normal,

    /// Atkinson diffusion, 75% propagation (`contrast`).
    ///
    /// Dropping a quarter of the error keeps highlights and shadows
    /// solid, giving a punchier image.
    HighContrast,

    /// Sierra Lite diffusion (`edge`).
    ///
    /// The small 3-neighbour kernel keeps structure close to where it
    /// originated, which preserves edges.
    EdgeContrast,

    /// Jarvis-Judice-Ninke diffusion over 12 neighbours (`smooth`).
    Smooth,

    /// No diffusion; thresholds on perceived brightness (`brightness`).
    Brightness,
}

impl Style {
    /// All styles, in the order they are offered to users.
    pub const ALL: [Style; 5] = [
        Style::Normal,
        Style::HighContrast,
        Style::EdgeContrast,
        Style::Smooth,
        Style::Brightness,
    ];

    /// The form name of this style.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Normal => "normal",
            Style::HighContrast => "contrast",
            Style::EdgeContrast => "edge",
            Style::Smooth => "smooth",
            Style::Brightness => "brightness",
        }
    }

    /// The diffusion kernel used by this style.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            Style::Normal => &FLOYD_STEINBERG,
            Style::HighContrast => &ATKINSON,
            Style::EdgeContrast => &SIERRA_LITE,
            Style::Smooth => &JARVIS_JUDICE_NINKE,
            Style::Brightness => &NO_DIFFUSION,
        }
    }

    /// The threshold comparison used by this style.
    pub fn threshold_mode(self) -> ThresholdMode {
        match self {
            Style::Brightness => ThresholdMode::Perceptual,
            _ => ThresholdMode::Direct,
        }
    }

    /// Resolve the full encoding settings for this style.
    pub fn encoding_settings(self) -> EncodingSettings {
        EncodingSettings {
            mode: self.threshold_mode(),
            kernel: self.kernel(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    /// Parse a style from its form name (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStyleError::new(s))
    }
}

/// Settings resolved once per render from a [`Style`].
#[derive(Debug, Clone, Copy)]
pub struct EncodingSettings {
    /// How samples are compared against the exposure threshold.
    pub mode: ThresholdMode,
    /// Error diffusion kernel (empty for pure thresholding).
    pub kernel: &'static Kernel,
}

impl EncodingSettings {
    /// Whether samples are mapped through perceived brightness first.
    #[inline]
    pub fn use_perceptual_brightness(&self) -> bool {
        self.mode == ThresholdMode::Perceptual
    }
}
