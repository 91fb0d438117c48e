pub mod config;
pub mod render_request;

pub use config::{AppConfig, Limits, RenderDefaults};
pub use render_request::RenderForm;
