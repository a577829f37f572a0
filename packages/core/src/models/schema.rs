//! Content-Type Schema Types
//!
//! A [`ContentTypeSchema`] declares, per content-type alias, which
//! properties exist on records of that type, in which order, and which
//! property editor and data type govern each one. Schemas are shared and
//! read-only from the renderer's perspective; the adapter materializes one
//! renderable property per declared entry whether or not the record has a
//! stored value for it.

use serde::{Deserialize, Serialize};

/// Declaration of a single property on a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeDef {
    /// Property alias (must be unique within the schema)
    pub alias: String,

    /// Declared data type, keys the value converter used for the
    /// source/output conversion stages (e.g. "textstring", "integer")
    #[serde(rename = "type")]
    pub data_type: String,

    /// Alias of the property editor responsible for the raw-to-string
    /// conversion of stored values
    pub editor_alias: String,
}

impl PropertyTypeDef {
    /// Create a property declaration
    pub fn new(
        alias: impl Into<String>,
        data_type: impl Into<String>,
        editor_alias: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            data_type: data_type.into(),
            editor_alias: editor_alias.into(),
        }
    }
}

/// Property schema for one content type.
///
/// Property order is meaningful: the adapter yields renderable properties
/// in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeSchema {
    /// Content-type alias this schema governs
    pub alias: String,

    /// Ordered property declarations
    pub properties: Vec<PropertyTypeDef>,
}

impl ContentTypeSchema {
    /// Create a schema with no properties
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property declaration
    pub fn with_property(
        mut self,
        alias: impl Into<String>,
        data_type: impl Into<String>,
        editor_alias: impl Into<String>,
    ) -> Self {
        self.properties
            .push(PropertyTypeDef::new(alias, data_type, editor_alias));
        self
    }
}
