//! braille-dither: render raster images as Unicode braille art
//!
//! Each braille character (`U+2800..=U+28FF`) is a 2x4 grid of dots, so an
//! output of `width` x `height` characters carries `2*width` x `4*height`
//! binary samples. This crate turns any [`SampleSource`] into such a grid
//! using one of five error-diffusion [`Style`]s.
//!
//! # Quick Start
//!
//! ```
//! use braille_dither::{render, PixelBuffer, RenderConfig, Rgba8, Style};
//!
//! // Left half black, right half white.
//! let image = PixelBuffer::from_fn(16, 16, |x, _| Rgba8::gray(if x < 8 { 0 } else { 255 }));
//!
//! let config = RenderConfig::new(4, 2).style(Style::Smooth);
//! let output = render(&image, &config);
//!
//! assert_eq!(output.width(), 4);
//! assert_eq!(output.height(), 2);
//! println!("{}", output.to_text());
//! ```
//!
//! # Pipeline
//!
//! 1. **Resample** ([`preprocess`]): nearest-neighbour sampling onto the
//!    dot grid. Every sample is composited on white and reduced to linear
//!    relative luminance ([`color`]).
//! 2. **Dither + encode** ([`encode`], [`dither`]): cells are visited left
//!    to right, top to bottom, and inside a cell row by row. Each sample is
//!    compared against the exposure threshold, then its quantization error
//!    is pushed to unvisited neighbours with the style's kernel. The
//!    visiting order is part of the output; changing it changes the art.
//! 3. **Invert** ([`output`]): dots mark dark samples. Whether they must be
//!    flipped depends on the display [`Theme`] and the user's invert flag.
//!
//! # Styles
//!
//! | Style | Name | Kernel | Comparison |
//! |-------|------|--------|------------|
//! | [`Style::Normal`] | `normal` | Floyd-Steinberg | luminance |
//! | [`Style::HighContrast`] | `contrast` | Atkinson | luminance |
//! | [`Style::EdgeContrast`] | `edge` | Sierra Lite | luminance |
//! | [`Style::Smooth`] | `smooth` | Jarvis-Judice-Ninke | luminance |
//! | [`Style::Brightness`] | `brightness` | none | CIE lightness |
//!
//! # Exposure
//!
//! [`RenderConfig::exposure`] is stored inverted relative to what users
//! see: a stored value of `100 - user`. Luminance styles raise a dot when
//! the sample is below `exposure / 100`; the brightness style raises it
//! when the CIE lightness is below `exposure`.
//!
//! # Errors
//!
//! Rendering has no failure modes. Preconditions (a non-empty source, a
//! non-zero output size) are checked with debug assertions. Only the
//! [`FromStr`](std::str::FromStr) impls of [`Style`] and [`Theme`] return
//! errors.

pub mod api;
pub mod color;
pub mod dither;
pub mod encode;
pub mod output;
pub mod preprocess;
pub mod source;

#[cfg(test)]
mod domain_tests;

pub use api::{render, ParseStyleError, ParseThemeError, RenderConfig};
pub use dither::{EncodingSettings, Kernel, Style};
pub use encode::{BrailleCell, ThresholdMode};
pub use output::{needs_invert, RenderOutput, Theme};
pub use source::{PixelBuffer, Rgba8, SampleSource};
