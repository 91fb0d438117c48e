//! Sample source abstraction.
//!
//! The pipeline never decodes image files itself. Anything that can report
//! its dimensions and return an RGBA color for an in-bounds coordinate can
//! be rendered: a decoded `image::RgbaImage` wrapper, a framebuffer, or the
//! in-memory [`PixelBuffer`] provided here.

/// An 8-bit RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// A fully opaque gray.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::opaque(value, value, value)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// A readable raster image.
///
/// Implementations must return a color for every `x < width`, `y < height`
/// of [`bounds()`](SampleSource::bounds). The pipeline only ever asks for
/// in-bounds coordinates.
pub trait SampleSource {
    /// Image dimensions as `(width, height)` in pixels.
    fn bounds(&self) -> (u32, u32);

    /// Color of the pixel at `(x, y)`.
    fn at(&self, x: u32, y: u32) -> Rgba8;
}

impl<S: SampleSource + ?Sized> SampleSource for &S {
    fn bounds(&self) -> (u32, u32) {
        (**self).bounds()
    }

    fn at(&self, x: u32, y: u32) -> Rgba8 {
        (**self).at(x, y)
    }
}

/// An owned, row-major RGBA image.
///
/// # Example
///
/// ```
/// use braille_dither::{PixelBuffer, Rgba8, SampleSource};
///
/// let image = PixelBuffer::from_fn(4, 2, |x, _| Rgba8::gray(if x < 2 { 0 } else { 255 }));
/// assert_eq!(image.bounds(), (4, 2));
/// assert_eq!(image.at(3, 1), Rgba8::gray(255));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<Rgba8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<Rgba8>, width: u32, height: u32) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// An image where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        Self::new(vec![color; width as usize * height as usize], width, height)
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba8) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(pixels, width, height)
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }
}

impl SampleSource for PixelBuffer {
    fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn at(&self, x: u32, y: u32) -> Rgba8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let image = PixelBuffer::from_fn(3, 2, |x, y| Rgba8::gray((y * 3 + x) as u8));
        let values: Vec<u8> = image.pixels().iter().map(|p| p.r).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(image.at(2, 1), Rgba8::gray(5));
    }

    #[test]
    fn test_filled() {
        let image = PixelBuffer::filled(2, 3, Rgba8::opaque(1, 2, 3));
        assert_eq!(image.bounds(), (2, 3));
        assert!(image.pixels().iter().all(|&p| p == Rgba8::opaque(1, 2, 3)));
    }

    #[test]
    #[should_panic(expected = "pixel count")]
    fn test_new_rejects_wrong_length() {
        let _ = PixelBuffer::new(vec![Rgba8::default(); 5], 2, 3);
    }

    #[test]
    fn test_reference_forwards() {
        let image = PixelBuffer::filled(1, 1, Rgba8::gray(9));
        let by_ref: &dyn SampleSource = &image;
        assert_eq!((&by_ref).bounds(), (1, 1));
        assert_eq!(by_ref.at(0, 0), Rgba8::gray(9));
    }
}
