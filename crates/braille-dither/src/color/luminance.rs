//! Relative luminance of 8-bit RGBA samples.

use super::lut::srgb8_to_linear;
use crate::source::Rgba8;

/// Rec. 709 luminance weights for linear red, green and blue.
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Flatten a translucent sample onto a white background.
///
/// Each channel becomes `round(255 - alpha * (255 - channel))` with alpha
/// normalized to `0.0..=1.0`, so fully transparent pixels read as white and
/// opaque pixels are unchanged.
#[inline]
pub fn composite_on_white(pixel: Rgba8) -> [u8; 3] {
    let opacity = pixel.a as f64 / 255.0;
    let blend = |channel: u8| (255.0 - opacity * (255.0 - channel as f64)).round() as u8;
    [blend(pixel.r), blend(pixel.g), blend(pixel.b)]
}

/// Relative luminance of a sample, in `0.0..=1.0`.
///
/// The sample is composited on white, each channel is linearized with the
/// sRGB transfer function, and the channels are combined with Rec. 709
/// weights.
#[inline]
pub fn relative_luminance(pixel: Rgba8) -> f64 {
    let [r, g, b] = composite_on_white(pixel);
    LUMA_WEIGHTS[0] * srgb8_to_linear(r)
        + LUMA_WEIGHTS[1] * srgb8_to_linear(g)
        + LUMA_WEIGHTS[2] * srgb8_to_linear(b)
}
