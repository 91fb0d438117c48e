//! The single-call rendering pipeline.

use super::RenderConfig;
use crate::encode::encode_grid;
use crate::output::RenderOutput;
use crate::preprocess::resample;
use crate::source::SampleSource;

/// Render `source` as braille art.
///
/// Runs the full pipeline: nearest-neighbour resampling to linear
/// luminance, the interleaved dither/encode sweep selected by
/// `config.style`, and the theme-dependent inversion. The result is
/// deterministic for a given source and configuration.
///
/// # Panics
///
/// Panics (in debug builds) if the source has no pixels or the
/// configuration has a zero width or height.
///
/// # Example
///
/// ```
/// use braille_dither::{render, PixelBuffer, RenderConfig, Rgba8, Theme};
///
/// let black = PixelBuffer::filled(8, 8, Rgba8::gray(0));
/// let output = render(&black, &RenderConfig::new(2, 1).theme(Theme::Dark));
///
/// assert_eq!(output.rows(), &["⣿⣿".to_string()]);
/// ```
pub fn render<S: SampleSource + ?Sized>(source: &S, config: &RenderConfig) -> RenderOutput {
    debug_assert!(
        config.width > 0 && config.height > 0,
        "render: output must be at least 1x1 characters ({}x{})",
        config.width,
        config.height
    );

    let (grid_width, grid_height) = config.grid_size();
    let mut grid = resample(source, grid_width, grid_height);
    let settings = config.style.encoding_settings();
    let cells = encode_grid(&mut grid, &settings, config.exposure);

    let rows = cells
        .into_iter()
        .map(|row| row.into_iter().map(char::from).collect::<String>())
        .collect();

    let mut output = RenderOutput::new(rows, config.width);
    if config.needs_invert() {
        output.invert();
    }
    output
}
