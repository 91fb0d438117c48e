//! Thresholding and braille encoding.
//!
//! The encoder walks the [`WorkingGrid`] one character cell at a time:
//! cells left-to-right, rows of cells top-to-bottom, and inside each cell
//! the 8 samples with `dy` outer (`0..4`) and `dx` inner (`0..2`). For each
//! sample it
//!
//! 1. reads the current value (including error diffused so far),
//! 2. maps it through the [`ThresholdMode`],
//! 3. raises the dot if the level is below the threshold,
//! 4. diffuses the quantization error to the style's kernel neighbours.
//!
//! The error of a raised dot is the raw sample; of a dropped dot, the raw
//! sample minus one. Reordering the visit changes the output, so the loop
//! is strictly sequential.

mod braille;
mod threshold;

pub use braille::{dot_bit, BrailleCell, BRAILLE_BASE, CELL_HEIGHT, CELL_WIDTH};
pub use threshold::ThresholdMode;

use crate::dither::{diffuse, EncodingSettings};
use crate::preprocess::WorkingGrid;

/// Threshold, diffuse and pack the 2x4 block whose top-left sample is
/// `(origin_x, origin_y)`.
fn encode_cell(
    grid: &mut WorkingGrid,
    origin_x: usize,
    origin_y: usize,
    settings: &EncodingSettings,
    max_level: f64,
) -> BrailleCell {
    let mut cell = BrailleCell::EMPTY;

    for dy in 0..CELL_HEIGHT {
        for dx in 0..CELL_WIDTH {
            let (x, y) = (origin_x + dx, origin_y + dy);
            let sample = grid.get(x, y);

            let error = if settings.mode.level(sample) < max_level {
                cell.set_dot(dx, dy);
                sample
            } else {
                sample - 1.0
            };

            diffuse(grid, x, y, error, settings.kernel);
        }
    }

    cell
}

/// Encode the whole grid into braille cells, row by row.
///
/// The grid is consumed as scratch space: on return it holds the samples
/// with all diffused error applied.
///
/// # Panics
///
/// Panics (in debug builds) if the grid dimensions are not multiples of
/// the cell size.
pub fn encode_grid(
    grid: &mut WorkingGrid,
    settings: &EncodingSettings,
    exposure: f64,
) -> Vec<Vec<BrailleCell>> {
    debug_assert!(
        grid.width() % CELL_WIDTH == 0 && grid.height() % CELL_HEIGHT == 0,
        "grid {}x{} is not a whole number of cells",
        grid.width(),
        grid.height()
    );

    let columns = grid.width() / CELL_WIDTH;
    let rows = grid.height() / CELL_HEIGHT;
    let max_level = settings.mode.max_level(exposure);

    (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| {
                    encode_cell(
                        grid,
                        column * CELL_WIDTH,
                        row * CELL_HEIGHT,
                        settings,
                        max_level,
                    )
                })
                .collect()
        })
        .collect()
}
