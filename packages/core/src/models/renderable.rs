//! Renderable Content Capability
//!
//! The view engine is written against these traits rather than a concrete
//! content source, so it renders published cache entries and draft-backed
//! adapters identically. [`DraftContentAdapter`] is the draft-backed
//! implementation; a published-cache-backed implementation would live
//! alongside it behind the same seam.
//!
//! [`DraftContentAdapter`]: crate::services::adapter::DraftContentAdapter

use crate::services::error::PreviewError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One property exposed to the view engine.
///
/// `value()` and `output_value()` run the two-stage conversion on every
/// access (raw → source via the property editor's declared data type, then
/// source → output with the preview flag as context); they are not cached.
pub trait RenderableProperty: Send + Sync {
    /// Property alias
    fn alias(&self) -> &str;

    /// Whether a non-empty value is present. Null values and
    /// whitespace-only strings count as absent.
    fn has_value(&self) -> bool;

    /// The raw stored value, after the property editor's raw-to-string
    /// conversion. Null when the record never set this property.
    fn data_value(&self) -> &serde_json::Value;

    /// The source-stage converted value (raw → source)
    fn value(&self) -> serde_json::Value;

    /// The output-stage converted value (source → output)
    fn output_value(&self) -> serde_json::Value;
}

/// The contract the rendering engine consumes.
///
/// Exposes identity, hierarchy navigation, and property lookup. Hierarchy
/// accessors return fresh boxed instances; implementations are
/// request-scoped and never shared between renders.
pub trait RenderableContent: Send + Sync {
    /// Numeric identifier
    fn id(&self) -> i64;

    /// Stable unique key
    fn key(&self) -> Uuid;

    /// Content-type identifier
    fn content_type_id(&self) -> i64;

    /// Content-type alias
    fn content_type_alias(&self) -> &str;

    /// Editorial display name
    fn name(&self) -> &str;

    /// Hierarchy path
    fn path(&self) -> &str;

    /// Depth in the tree
    fn level(&self) -> i32;

    /// Position among siblings
    fn sort_order(&self) -> i32;

    /// Revision marker of the backing record
    fn revision(&self) -> Uuid;

    /// Assigned template id, 0 when no template is configured
    fn template_id(&self) -> i64;

    /// Whether this is unpublished (draft) content
    fn is_draft(&self) -> bool;

    /// Creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Last modification timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Id of the creating user
    fn creator_id(&self) -> i64;

    /// Id of the last writing user
    fn writer_id(&self) -> i64;

    /// URL segment for this item, memoized on first access.
    ///
    /// # Errors
    ///
    /// `PreviewError::ProviderExhausted` if no segment provider (including
    /// the default) yields a value.
    fn url_segment(&self) -> Result<&str, PreviewError>;

    /// Display name of the creating user, memoized on first access
    fn creator_name(&self) -> Result<&str, PreviewError>;

    /// Display name of the last writing user, memoized on first access
    fn writer_name(&self) -> Result<&str, PreviewError>;

    /// Parent content, `None` at the tree root
    fn parent(&self) -> Option<Box<dyn RenderableContent>>;

    /// Child content ordered by sort order ascending
    fn children(&self) -> Vec<Box<dyn RenderableContent>>;

    /// All properties, one per schema declaration, in schema order
    fn properties(&self) -> Vec<&dyn RenderableProperty>;

    /// Property lookup by alias (case-insensitive)
    fn property(&self, alias: &str) -> Option<&dyn RenderableProperty>;
}
