//! Color conversion utilities
//!
//! This module turns 8-bit RGBA samples into the two scalar quantities the
//! braille pipeline thresholds against:
//!
//! - **Relative luminance**: linear light under Rec. 709 weights, `0.0..=1.0`
//! - **Perceived brightness**: CIE 1976 lightness of that luminance, `0.0..=100.0`
//!
//! # Example
//!
//! ```
//! use braille_dither::color::{perceived_brightness, relative_luminance};
//! use braille_dither::Rgba8;
//!
//! let luminance = relative_luminance(Rgba8::opaque(255, 255, 255));
//! assert!((luminance - 1.0).abs() < 1e-12);
//! assert!((perceived_brightness(luminance) - 100.0).abs() < 1e-9);
//! ```

mod lightness;
mod lut;
mod luminance;

pub use lightness::{perceived_brightness, LIGHTNESS_EPSILON, LIGHTNESS_KAPPA};
pub use lut::srgb8_to_linear;
pub use luminance::{composite_on_white, relative_luminance};
