pub mod decode;

pub use decode::{decode_image, render_bytes, DecodedImage};
