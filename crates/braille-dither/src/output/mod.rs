//! Output types for the rendering pipeline.
//!
//! [`RenderOutput`] holds the rendered rows as strings, ready to be joined
//! with newlines or serialized as a JSON array. The theme/invert
//! post-processing step is decided by [`needs_invert`].

mod invert;
mod render_output;

pub use invert::{invert_row, needs_invert, Theme};
pub use render_output::RenderOutput;
