//! Preview Pipeline Error Types
//!
//! All fatal conditions abort only the single in-flight render; the absence
//! of an assigned template is deliberately NOT an error (see
//! [`PreviewOutput::NoTemplate`]).
//!
//! [`PreviewOutput::NoTemplate`]: crate::services::renderer::PreviewOutput

use thiserror::Error;

/// Errors produced by the preview pipeline.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Input rejected before any resolution happened (absent record,
    /// non-positive id)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No content record exists for the requested id
    #[error("Content not found: {id}")]
    NotFound { id: i64 },

    /// The record's content-type alias has no registered schema
    #[error("No content-type schema registered for alias '{alias}'")]
    SchemaNotFound { alias: String },

    /// The record references a template that no longer exists
    #[error("The template with id {template_id} does not exist, the page cannot render")]
    TemplateNotFound { template_id: i64 },

    /// No physical view matches the sanitized template alias
    #[error("No physical view was found for alias '{alias}'")]
    ViewNotFound { alias: String },

    /// No segment/profile provider produced a value. Unreachable while the
    /// default provider is registered; kept as a defensive fatal.
    #[error("No provider produced a value: {context}")]
    ProviderExhausted { context: String },

    /// The view engine failed while rendering
    #[error("View rendering failed: {0}")]
    RenderFailed(String),
}

impl PreviewError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a content not found error
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Create a schema not found error
    pub fn schema_not_found(alias: impl Into<String>) -> Self {
        Self::SchemaNotFound {
            alias: alias.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template_id: i64) -> Self {
        Self::TemplateNotFound { template_id }
    }

    /// Create a view not found error
    pub fn view_not_found(alias: impl Into<String>) -> Self {
        Self::ViewNotFound {
            alias: alias.into(),
        }
    }

    /// Create a provider exhausted error
    pub fn provider_exhausted(context: impl Into<String>) -> Self {
        Self::ProviderExhausted {
            context: context.into(),
        }
    }

    /// Create a render failed error
    pub fn render_failed(msg: impl Into<String>) -> Self {
        Self::RenderFailed(msg.into())
    }
}
