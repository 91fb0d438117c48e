//! Error diffusion.
//!
//! The dither engine does not own a scan loop of its own: the braille
//! encoder visits samples in cell order and calls [`diffuse`] after every
//! threshold decision, so each decision sees the error pushed forward by
//! every earlier one. See [`crate::encode`] for the visiting order.
//!
//! # Styles
//!
//! | Style | Kernel | Propagation |
//! |-------|--------|-------------|
//! | [`Style::Normal`] | [`FLOYD_STEINBERG`] | 100% |
//! | [`Style::HighContrast`] | [`ATKINSON`] | 75% |
//! | [`Style::EdgeContrast`] | [`SIERRA_LITE`] | 100% |
//! | [`Style::Smooth`] | [`JARVIS_JUDICE_NINKE`] | 100% |
//! | [`Style::Brightness`] | [`NO_DIFFUSION`] | none |

mod kernel;
mod style;

pub use kernel::*;
pub use style::{EncodingSettings, Style};

use crate::preprocess::WorkingGrid;

/// Distribute `error` from sample `(x, y)` to its kernel neighbours.
///
/// Each neighbour `(x + dx, y + dy)` inside the grid receives
/// `error * weight`. Neighbours outside the grid, including negative
/// coordinates, are skipped; nothing wraps around or is clamped in.
#[inline]
pub fn diffuse(grid: &mut WorkingGrid, x: usize, y: usize, error: f64, kernel: &Kernel) {
    for node in kernel.nodes {
        grid.add_clipped(
            x as isize + node.dx as isize,
            y as isize + node.dy as isize,
            error * node.weight,
        );
    }
}
