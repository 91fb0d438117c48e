use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::RenderForm;
use crate::services::RenderService;

/// Multipart body accepted by the render endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenderUpload {
    /// PNG or JPEG image
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    #[serde(flatten)]
    pub options: RenderForm,
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Human-readable error message
    pub error: String,
}

/// Render an uploaded image as braille art
///
/// Returns one string per row of braille characters.
#[utoipa::path(
    post,
    path = "/",
    request_body(content = RenderUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Rendered rows", body = Vec<String>),
        (status = 400, description = "Missing or undecodable image, or invalid options", body = ErrorResponse),
        (status = 413, description = "Upload exceeds the configured size limit", body = ErrorResponse),
        (status = 500, description = "Render task failed", body = ErrorResponse),
    ),
    tag = "Render"
)]
pub async fn handle_render(
    State(renderer): State<Arc<RenderService>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let mut multipart = multipart?;
    let mut image: Option<Vec<u8>> = None;
    let mut form = RenderForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            image = Some(field.bytes().await?.to_vec());
        } else {
            let value = field.text().await?;
            if !form.set_field(&name, value) {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
        }
    }

    // Browsers send an empty file part when no file was chosen
    let image = image
        .filter(|bytes| !bytes.is_empty())
        .ok_or(ApiError::MissingImage)?;
    let size = image.len();

    let output = renderer.render(image, form).await.inspect_err(|e| {
        tracing::info!(error = %e, "Render request rejected");
    })?;

    tracing::info!(
        bytes = size,
        width = output.width(),
        height = output.height(),
        "Rendered braille art"
    );

    Ok(Json(output.into_rows()))
}
