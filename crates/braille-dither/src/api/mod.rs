//! Public API for the braille-dither crate.
//!
//! This module provides the [`render`] entry point, its [`RenderConfig`]
//! and the parse errors for the user-selectable enumerations.

mod config;
mod error;
mod render;

pub use config::RenderConfig;
pub use error::{ParseStyleError, ParseThemeError};
pub use render::render;
