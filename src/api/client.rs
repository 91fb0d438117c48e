use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;

/// Form defaults and limits for the browser client
#[derive(Debug, Serialize, PartialEq)]
pub struct ClientSettings {
    pub width: usize,
    pub exposure: f64,
    pub style: String,
    pub theme: String,
    pub max_length: usize,
    pub max_upload_bytes: usize,
}

impl From<&AppConfig> for ClientSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            width: config.defaults.width,
            exposure: config.defaults.exposure,
            style: config.defaults.style.to_string(),
            theme: config.defaults.theme.to_string(),
            max_length: config.limits.max_length,
            max_upload_bytes: config.limits.max_upload_bytes,
        }
    }
}

/// Serve the browser client
pub async fn handle_index(State(assets): State<Arc<AssetLoader>>) -> Result<Response, ApiError> {
    let page = assets.read_static("index.html").map_err(|e| {
        tracing::error!(%e, "Browser client missing");
        ApiError::NotFound
    })?;
    Ok(Html(page).into_response())
}

/// Serve a client asset with a content type guessed from its extension
pub async fn handle_static(
    State(assets): State<Arc<AssetLoader>>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let data = assets.read_static(&path).map_err(|e| {
        tracing::debug!(%e, path = %path, "Static asset not found");
        ApiError::NotFound
    })?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream().to_string();
    Ok(([(header::CONTENT_TYPE, mime)], data).into_response())
}

/// Serve the configured form defaults and limits
pub async fn handle_settings(State(config): State<Arc<AppConfig>>) -> Json<ClientSettings> {
    Json(ClientSettings::from(config.as_ref()))
}
