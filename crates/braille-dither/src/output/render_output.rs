//! The rendered braille grid.

use super::invert::invert_row;

/// The canonical output of the rendering pipeline.
///
/// One string per output row, each holding `width` braille characters.
///
/// # Example
///
/// ```
/// use braille_dither::RenderOutput;
///
/// let mut output = RenderOutput::new(vec!["⠀⣿".to_string()], 2);
/// output.invert();
/// assert_eq!(output.rows(), &["⣿⠀".to_string()]);
/// assert_eq!(output.to_text(), "⣿⠀");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    rows: Vec<String>,
    width: usize,
}

impl RenderOutput {
    /// Wrap rendered rows.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that every row holds `width` characters.
    pub fn new(rows: Vec<String>, width: usize) -> Self {
        debug_assert!(
            rows.iter().all(|row| row.chars().count() == width),
            "every row must hold {width} characters"
        );
        Self { rows, width }
    }

    /// Rendered rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[inline]
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Characters per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Flip every dot of every cell in place.
    pub fn invert(&mut self) {
        for row in &mut self.rows {
            *row = invert_row(row);
        }
    }

    /// Rows joined with `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }
}

impl From<RenderOutput> for Vec<String> {
    fn from(output: RenderOutput) -> Self {
        output.rows
    }
}
