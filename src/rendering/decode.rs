//! Image decoding for the braille pipeline.
//!
//! Uploaded bytes are decoded with the `image` crate (format guessed from the
//! content) and exposed to the core renderer as a [`SampleSource`].

use braille_dither::{render, RenderOutput, Rgba8, SampleSource};
use image::RgbaImage;

use crate::error::RenderError;
use crate::models::{AppConfig, RenderForm};

/// A decoded image in straight-alpha RGBA8
#[derive(Debug, Clone)]
pub struct DecodedImage(RgbaImage);

impl DecodedImage {
    pub fn new(image: RgbaImage) -> Self {
        Self(image)
    }

    pub fn into_inner(self) -> RgbaImage {
        self.0
    }
}

impl SampleSource for DecodedImage {
    fn bounds(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    #[inline]
    fn at(&self, x: u32, y: u32) -> Rgba8 {
        Rgba8::from(self.0.get_pixel(x, y).0)
    }
}

/// Decode PNG or JPEG bytes
///
/// Zero-area images are rejected, since there is nothing to sample.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, RenderError> {
    let image = image::load_from_memory(bytes).map_err(RenderError::UnsupportedFormat)?;
    let image = image.to_rgba8();

    if image.width() == 0 || image.height() == 0 {
        return Err(RenderError::EmptyImage);
    }

    Ok(DecodedImage(image))
}

/// Decode, validate and render in one synchronous call
pub fn render_bytes(
    bytes: &[u8],
    form: &RenderForm,
    config: &AppConfig,
) -> Result<RenderOutput, RenderError> {
    let image = decode_image(bytes)?;
    let (image_width, image_height) = image.bounds();
    let render_config = form.validate((image_width, image_height), config)?;

    tracing::debug!(
        image_width,
        image_height,
        width = render_config.width,
        height = render_config.height,
        style = %render_config.style,
        theme = %render_config.theme,
        invert = render_config.invert,
        "Rendering braille art"
    );

    Ok(render(&image, &render_config))
}
