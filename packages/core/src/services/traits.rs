//! Collaborator Traits
//!
//! The preview pipeline consumes the CMS through these seams. They are
//! injected explicitly (no ambient singletons): the adapter and renderer
//! receive everything they need through [`PreviewContext`] and constructor
//! arguments. All collaborators must be safe for concurrent read access;
//! that is a precondition, not something engineered here.

use crate::models::{ContentRecord, ContentTypeSchema, RenderableContent, Template};
use crate::services::conversion::{ConverterRegistry, PropertyEditorRegistry};
use crate::services::segments::{ProfileResolver, SegmentProviderChain};
use std::sync::Arc;

/// Read access to stored content records and their hierarchy.
pub trait ContentRepository: Send + Sync {
    /// Look up a record by id
    fn content_by_id(&self, id: i64) -> Option<Arc<ContentRecord>>;

    /// Resolve a record's parent, `None` at the tree root
    fn parent_of(&self, record: &ContentRecord) -> Option<Arc<ContentRecord>>;

    /// Resolve a record's children in storage order (callers re-sort)
    fn children_of(&self, id: i64) -> Vec<Arc<ContentRecord>>;
}

/// Content-type schema lookup by alias.
pub trait SchemaResolver: Send + Sync {
    fn schema_by_alias(&self, alias: &str) -> Option<Arc<ContentTypeSchema>>;
}

/// Template record lookup by id.
pub trait TemplateStore: Send + Sync {
    fn template_by_id(&self, id: i64) -> Option<Template>;
}

/// A resolved physical view, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Sanitized alias the view was resolved under
    pub alias: String,
}

impl View {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}

/// The external rendering engine: binds a content model to a template and
/// produces complete HTML text.
pub trait ViewEngine: Send + Sync {
    /// Resolve the physical view for a sanitized alias
    fn resolve_view(&self, alias: &str) -> Option<View>;

    /// Render the view against the model, capturing full HTML output.
    /// Failures propagate as fatal for the single in-flight request.
    fn render(&self, view: &View, model: &dyn RenderableContent) -> anyhow::Result<String>;
}

/// Everything the draft content adapter needs, bundled for injection.
///
/// Cloning is cheap (all members are `Arc`s); each adapter instance carries
/// its own clone so hierarchy navigation can construct further adapters.
#[derive(Clone)]
pub struct PreviewContext {
    /// Content record lookup and hierarchy navigation
    pub repository: Arc<dyn ContentRepository>,

    /// Content-type schema lookup
    pub schemas: Arc<dyn SchemaResolver>,

    /// Property editors for raw-to-string conversion
    pub editors: Arc<PropertyEditorRegistry>,

    /// Value converters for the source/output conversion stages
    pub converters: Arc<ConverterRegistry>,

    /// URL segment providers with default fallback
    pub segments: Arc<SegmentProviderChain>,

    /// User profile lookup for author display names
    pub profiles: Arc<dyn ProfileResolver>,
}
