//! CIE 1976 lightness.
//!
//! Maps linear luminance onto a roughly perceptually uniform `0..=100`
//! scale. Used by styles that threshold on perceived brightness rather than
//! on light intensity.

/// Luminance at which the lightness curve switches from linear to cube root.
pub const LIGHTNESS_EPSILON: f64 = 0.008856;

/// Slope of the linear segment of the lightness curve.
pub const LIGHTNESS_KAPPA: f64 = 903.3;

/// Perceived brightness of a linear luminance value.
///
/// The input is clamped to `0.0..=1.0` first, so accumulated dithering
/// error never produces brightness outside the curve.
#[inline]
pub fn perceived_brightness(luminance: f64) -> f64 {
    let luminance = luminance.clamp(0.0, 1.0);
    if luminance <= LIGHTNESS_EPSILON {
        luminance * LIGHTNESS_KAPPA
    } else {
        116.0 * luminance.cbrt() - 16.0
    }
}
