use braille_dither::RenderOutput;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppConfig, RenderForm};
use crate::rendering::render_bytes;

/// Runs renders for the HTTP handlers
pub struct RenderService {
    config: Arc<AppConfig>,
}

impl RenderService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode, validate and render an uploaded image
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// CPU-intensive decoding and dithering. A single render always runs
    /// on one thread.
    pub async fn render(&self, bytes: Vec<u8>, form: RenderForm) -> Result<RenderOutput, ApiError> {
        let config = self.config.clone();

        tokio::task::spawn_blocking(move || render_bytes(&bytes, &form, &config))
            .await
            .map_err(|e| ApiError::Internal(format!("Render task failed: {e}")))?
            .map_err(ApiError::from)
    }
}
