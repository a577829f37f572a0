//! Content Record Structures
//!
//! This module defines [`ContentRecord`], the authoritative stored
//! representation of a content item, and [`Template`], the record linking a
//! content item to its physical view.
//!
//! A record may be unpublished: the preview pipeline renders whatever is
//! currently stored, draft or not. All entity-specific values live in the
//! `properties` map, untyped at this layer; the content-type schema declares
//! which properties exist and how their raw values convert.
//!
//! Hierarchy is expressed by `parent_id` back-references. Navigation goes
//! through the `ContentRepository` trait so records never hold owning
//! pointers at each other.
//!
//! # Examples
//!
//! ```rust
//! use listview_preview_core::models::ContentRecord;
//! use serde_json::json;
//!
//! let page = ContentRecord::new(1001, "landingPage", "Spring Campaign")
//!     .with_template(42)
//!     .with_property("headline", json!("Welcome"))
//!     .with_property("bodyText", json!("Lorem ipsum"));
//!
//! assert_eq!(page.template_id, Some(42));
//! assert!(page.parent_id.is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Authoritative stored representation of a content item.
///
/// # Fields
///
/// - `id`: numeric identifier, unique within the repository
/// - `key`: stable unique key that survives moves and republishing
/// - `content_type_id` / `content_type_alias`: the governing content type;
///   every record has exactly one content-type definition for its schema
/// - `name`: editorial display name
/// - `path` / `level` / `sort_order`: hierarchy position
/// - `revision`: marker for the stored revision being previewed
/// - `published`: false while the record only exists as a draft
/// - `template_id`: optional reference to the assigned [`Template`]
/// - `properties`: raw stored values by property alias, opaque at this layer
/// - `parent_id`: back-reference to the parent record, `None` at the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Numeric identifier
    pub id: i64,

    /// Stable unique key
    pub key: Uuid,

    /// Content-type identifier
    pub content_type_id: i64,

    /// Content-type alias, used to look up the governing schema
    pub content_type_alias: String,

    /// Editorial display name
    pub name: String,

    /// Hierarchy path (comma-separated ancestor ids, root first)
    pub path: String,

    /// Depth in the tree (root = 1)
    pub level: i32,

    /// Position among siblings
    pub sort_order: i32,

    /// Revision marker for the stored (possibly draft) state
    pub revision: Uuid,

    /// Whether the record has been published
    pub published: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,

    /// Id of the user who created the record
    pub creator_id: i64,

    /// Id of the user who last wrote the record
    pub writer_id: i64,

    /// Assigned template, `None` when no template is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,

    /// Raw stored property values by alias
    pub properties: HashMap<String, serde_json::Value>,

    /// Parent record id, `None` at the tree root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl ContentRecord {
    /// Create a record with sensible defaults for everything but identity.
    ///
    /// The key and revision are freshly generated; timestamps are set to
    /// now; the record starts unpublished, at the tree root, with no
    /// template and no properties. Use the `with_*` builders to fill in the
    /// rest.
    pub fn new(id: i64, content_type_alias: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        let alias = content_type_alias.into();

        Self {
            id,
            key: Uuid::new_v4(),
            content_type_id: 0,
            content_type_alias: alias,
            name: name.into(),
            path: format!("-1,{}", id),
            level: 1,
            sort_order: 0,
            revision: Uuid::new_v4(),
            published: false,
            created_at: now,
            updated_at: now,
            creator_id: 0,
            writer_id: 0,
            template_id: None,
            properties: HashMap::new(),
            parent_id: None,
        }
    }

    /// Assign a template
    pub fn with_template(mut self, template_id: i64) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Set a raw property value
    pub fn with_property(mut self, alias: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(alias.into(), value);
        self
    }

    /// Attach under a parent, recomputing path and level
    pub fn with_parent(mut self, parent: &ContentRecord) -> Self {
        self.parent_id = Some(parent.id);
        self.path = format!("{},{}", parent.path, self.id);
        self.level = parent.level + 1;
        self
    }

    /// Set the sibling sort order
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Set creator and writer ids
    pub fn with_authors(mut self, creator_id: i64, writer_id: i64) -> Self {
        self.creator_id = creator_id;
        self.writer_id = writer_id;
        self
    }

    /// Mark the record as published
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

/// A stored template record.
///
/// The alias names the physical view; the renderer truncates it at the
/// first `.` and sanitizes it before asking the view engine to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Numeric identifier referenced by `ContentRecord::template_id`
    pub id: i64,

    /// View alias, possibly carrying a file extension (e.g. "Master.cshtml")
    pub alias: String,
}

impl Template {
    /// Create a template record
    pub fn new(id: i64, alias: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
        }
    }
}
