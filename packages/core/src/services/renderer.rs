//! Preview Renderer
//!
//! Produces a safe-to-embed HTML fragment for exactly one content id:
//! resolve the record (draft-aware), wrap it in the draft content adapter,
//! locate and render the assigned template, then strip the document shell.
//!
//! Rendering is synchronous and single-attempt. A failure aborts only the
//! in-flight request; concurrent previews of other ids are unaffected.

use crate::models::RenderableContent;
use crate::services::adapter::DraftContentAdapter;
use crate::services::error::PreviewError;
use crate::services::traits::{PreviewContext, TemplateStore, ViewEngine};
use crate::utils::strip_document_shell;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one preview request.
///
/// `NoTemplate` is a valid, non-error outcome: content without an assigned
/// template yields a plain diagnostic sentence instead of rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutput {
    /// Rendered HTML with document-shell elements stripped
    Fragment(String),

    /// Plain-text diagnostic for content with no template assigned
    NoTemplate(String),
}

impl PreviewOutput {
    /// The response body, whichever variant this is
    pub fn into_body(self) -> String {
        match self {
            Self::Fragment(body) | Self::NoTemplate(body) => body,
        }
    }

    /// Whether the view engine actually rendered
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Fragment(_))
    }
}

/// Renders inline previews for single content items.
///
/// Holds only shared read-only collaborators; every request gets fresh
/// adapter state, so unlimited concurrent renders are safe.
pub struct PreviewRenderer {
    ctx: PreviewContext,
    templates: Arc<dyn TemplateStore>,
    views: Arc<dyn ViewEngine>,
}

impl PreviewRenderer {
    /// Create a renderer over the injected collaborators
    pub fn new(
        ctx: PreviewContext,
        templates: Arc<dyn TemplateStore>,
        views: Arc<dyn ViewEngine>,
    ) -> Self {
        Self {
            ctx,
            templates,
            views,
        }
    }

    /// Render the preview fragment for one content id.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a non-positive id
    /// - `NotFound` when no record exists for the id
    /// - `TemplateNotFound` when the record references a template record
    ///   that no longer exists
    /// - `ViewNotFound` when no physical view matches the sanitized alias
    /// - `RenderFailed` when the view engine fails
    pub fn render_preview(&self, id: i64) -> Result<PreviewOutput, PreviewError> {
        if id <= 0 {
            return Err(PreviewError::invalid_input(format!(
                "content id must be positive, got {}",
                id
            )));
        }

        let record = self
            .ctx
            .repository
            .content_by_id(id)
            .ok_or_else(|| PreviewError::not_found(id))?;

        // Preview mode on: conversions see draft data.
        let content = DraftContentAdapter::new(Some(record), true, self.ctx.clone())?;

        let template_id = content.template_id();
        if template_id == 0 {
            warn!(content_id = id, "no template assigned for content");
            return Ok(PreviewOutput::NoTemplate(format!(
                "{} has no template. can't render.",
                content.name()
            )));
        }

        let template = self
            .templates
            .template_by_id(template_id)
            .ok_or_else(|| PreviewError::template_not_found(template_id))?;

        let alias = safe_view_alias(&template.alias);
        let view = self
            .views
            .resolve_view(&alias)
            .ok_or_else(|| PreviewError::view_not_found(&alias))?;

        let html = self
            .views
            .render(&view, &content)
            .map_err(|e| PreviewError::render_failed(e.to_string()))?;

        debug!(content_id = id, view = %alias, "rendered preview");

        Ok(PreviewOutput::Fragment(strip_document_shell(&html)))
    }
}

/// Sanitize a template alias into a view identifier.
///
/// Truncates at the first `.` (dropping any file extension), then keeps
/// only ASCII alphanumerics, drops leading digits, and lowercases the
/// first character.
pub fn safe_view_alias(template_alias: &str) -> String {
    let base = template_alias.split('.').next().unwrap_or("");

    let mut alias = String::with_capacity(base.len());
    for c in base.chars() {
        if !c.is_ascii_alphanumeric() {
            continue;
        }
        if alias.is_empty() {
            if c.is_ascii_digit() {
                continue;
            }
            alias.push(c.to_ascii_lowercase());
        } else {
            alias.push(c);
        }
    }
    alias
}
