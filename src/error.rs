use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use braille_dither::{ParseStyleError, ParseThemeError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no image provided")]
    MissingImage,

    #[error("invalid form data: {0}")]
    Multipart(String),

    #[error("upload too large")]
    PayloadTooLarge,

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("bad image format: must be either png or jpg/jpeg")]
    UnsupportedFormat(#[source] image::ImageError),

    #[error("image has no pixels")]
    EmptyImage,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Form validation failures, worded for end users
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("invalid brightness: must be a number between 0 & 100")]
    Exposure,

    /// One message per offending dimension, reported together
    #[error("{}", .0.join(", "))]
    Dimensions(Vec<String>),

    #[error(transparent)]
    Style(#[from] ParseStyleError),

    #[error(transparent)]
    Theme(#[from] ParseThemeError),
}

impl ValidationError {
    /// Message for a width or height outside `1..=max`
    pub fn dimension_message(field: &str, max: usize) -> String {
        format!("invalid {field}: must be a number between 1 and {max}")
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Multipart(e.body_text())
        }
    }
}

/// A request that is not `multipart/form-data` cannot carry an image
impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected non-multipart request");
        ApiError::MissingImage
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingImage | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Render(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
