pub mod ascii;
pub mod client;

pub use ascii::{handle_render, ErrorResponse, RenderUpload, __path_handle_render};
pub use client::{handle_index, handle_settings, handle_static, ClientSettings};
