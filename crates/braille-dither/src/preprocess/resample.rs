//! Nearest-neighbour resampling onto the working grid.

use super::grid::WorkingGrid;
use crate::color::relative_luminance;
use crate::source::SampleSource;

/// Map each target index onto the nearest source index.
///
/// Target index `i` maps to `round(i / (target / source))`. When upsampling
/// by more than 2x the rounded value can land one past the last source
/// pixel, so it is clamped to `source - 1`.
fn nearest_indices(target: usize, source: u32) -> Vec<u32> {
    let scale = target as f64 / source as f64;
    let last = source - 1;
    (0..target)
        .map(|i| ((i as f64 / scale).round() as u32).min(last))
        .collect()
}

/// Resample `source` onto a `total_width` x `total_height` luminance grid.
///
/// Every grid cell holds the [relative luminance](relative_luminance) of
/// the single nearest source pixel; no averaging is done.
///
/// # Panics
///
/// Panics (in debug builds) if the source has zero width or height.
pub fn resample<S: SampleSource + ?Sized>(
    source: &S,
    total_width: usize,
    total_height: usize,
) -> WorkingGrid {
    let (source_width, source_height) = source.bounds();
    debug_assert!(
        source_width > 0 && source_height > 0,
        "resample: source image must not be empty ({source_width}x{source_height})"
    );

    let columns = nearest_indices(total_width, source_width);
    let rows = nearest_indices(total_height, source_height);

    WorkingGrid::from_fn(total_width, total_height, |x, y| {
        relative_luminance(source.at(columns[x], rows[y]))
    })
}
