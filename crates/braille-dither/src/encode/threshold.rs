//! Threshold comparison modes.

use crate::color::perceived_brightness;

/// How a sample is compared against the exposure threshold.
///
/// Chosen once per render from the style, never per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Compare raw luminance against `exposure / 100`.
    Direct,
    /// Compare perceived brightness (`0..=100`) against `exposure`.
    Perceptual,
}

impl ThresholdMode {
    /// The threshold level for a stored exposure value.
    #[inline]
    pub fn max_level(self, exposure: f64) -> f64 {
        match self {
            ThresholdMode::Direct => exposure / 100.0,
            ThresholdMode::Perceptual => exposure,
        }
    }

    /// The value compared against [`max_level`](Self::max_level).
    #[inline]
    pub fn level(self, sample: f64) -> f64 {
        match self {
            ThresholdMode::Direct => sample,
            ThresholdMode::Perceptual => perceived_brightness(sample),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_scales_exposure() {
        assert_eq!(ThresholdMode::Direct.max_level(50.0), 0.5);
        assert_eq!(ThresholdMode::Direct.level(0.3), 0.3);
    }

    #[test]
    fn test_direct_keeps_out_of_range_samples() {
        assert_eq!(ThresholdMode::Direct.level(-0.2), -0.2);
        assert_eq!(ThresholdMode::Direct.level(1.4), 1.4);
    }

    #[test]
    fn test_perceptual_uses_lightness() {
        assert_eq!(ThresholdMode::Perceptual.max_level(50.0), 50.0);
        assert!((ThresholdMode::Perceptual.level(0.5) - 76.07).abs() < 0.01);
        assert_eq!(ThresholdMode::Perceptual.level(-1.0), 0.0);
    }
}
