//! Brailler - images to Unicode braille art
//!
//! HTTP server and command line front end for the `braille-dither` pipeline.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
