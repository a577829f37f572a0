//! HTTP error handling for the preview endpoint
//!
//! Converts pipeline errors into explicit error responses (status + body)
//! instead of letting them surface as unhandled faults.

use crate::services::PreviewError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// JSON error body returned for failed preview requests.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional detailed error information for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Create a new HTTP error with details
    pub fn with_details(
        message: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: Some(details.into()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "CONTENT_NOT_FOUND" => StatusCode::NOT_FOUND,
            "INVALID_INPUT" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<PreviewError> for HttpError {
    fn from(err: PreviewError) -> Self {
        match &err {
            PreviewError::NotFound { .. } => HttpError::new(err.to_string(), "CONTENT_NOT_FOUND"),
            PreviewError::InvalidInput(_) => HttpError::new(err.to_string(), "INVALID_INPUT"),
            PreviewError::SchemaNotFound { .. } => {
                HttpError::new(err.to_string(), "SCHEMA_NOT_FOUND")
            }
            PreviewError::TemplateNotFound { template_id } => HttpError::with_details(
                err.to_string(),
                "TEMPLATE_NOT_FOUND",
                format!("template_id: {}", template_id),
            ),
            PreviewError::ViewNotFound { alias } => HttpError::with_details(
                err.to_string(),
                "VIEW_NOT_FOUND",
                format!("alias: {}", alias),
            ),
            PreviewError::ProviderExhausted { .. } => {
                HttpError::new(err.to_string(), "PROVIDER_EXHAUSTED")
            }
            PreviewError::RenderFailed(_) => HttpError::new(err.to_string(), "RENDER_FAILED"),
        }
    }
}
