//! Preparing the working grid.
//!
//! The source image is resampled once, with nearest-neighbour lookup, onto
//! a [`WorkingGrid`] of luminance samples sized `2 * columns` by
//! `4 * rows`: two samples per braille dot column, four per dot row. The
//! grid is then handed to the encoder, which mutates it in place while
//! diffusing error.

mod grid;
mod resample;

pub use grid::WorkingGrid;
pub use resample::resample;
