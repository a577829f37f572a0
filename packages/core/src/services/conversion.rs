//! Property Value Conversion
//!
//! Two separate conversion concerns live here:
//!
//! - [`PropertyEditor`]: owns the raw-to-string conversion of a stored
//!   value, keyed by editor alias. Runs once, when the adapter materializes
//!   its properties.
//! - [`ValueConverter`]: the two-stage conversion the view engine sees,
//!   keyed by declared data type. Stage one (data → source) is
//!   editor-specific; stage two (source → output) takes the preview flag as
//!   context. Runs on every property access.
//!
//! Both registries fall back to passthrough behavior for unknown aliases or
//! types, so a record with exotic properties still renders.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Converts a property's raw stored form to its string representation.
pub trait PropertyEditor: Send + Sync {
    /// Editor alias this implementation is registered under
    fn alias(&self) -> &str;

    /// Convert the raw stored value to its string form
    fn raw_to_string(&self, raw: &Value) -> Value;
}

/// Plain text editor: stringifies scalars, passes strings through.
pub struct TextboxEditor;

impl PropertyEditor for TextboxEditor {
    fn alias(&self) -> &str {
        "textbox"
    }

    fn raw_to_string(&self, raw: &Value) -> Value {
        match raw {
            Value::String(_) => raw.clone(),
            Value::Null => Value::Null,
            other => Value::String(other.to_string()),
        }
    }
}

/// Property editor lookup by alias.
#[derive(Default)]
pub struct PropertyEditorRegistry {
    editors: HashMap<String, Arc<dyn PropertyEditor>>,
}

impl PropertyEditorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an editor under its own alias
    pub fn register(&mut self, editor: Arc<dyn PropertyEditor>) {
        self.editors.insert(editor.alias().to_string(), editor);
    }

    /// Look up an editor; `None` leaves raw values untouched
    pub fn editor_by_alias(&self, alias: &str) -> Option<Arc<dyn PropertyEditor>> {
        self.editors.get(alias).cloned()
    }
}

/// Two-stage value conversion for one declared data type.
pub trait ValueConverter: Send + Sync {
    /// Stage one: raw data to source value (editor-specific)
    fn data_to_source(&self, data: &Value, preview: bool) -> Value;

    /// Stage two: source value to output value (context-specific)
    fn source_to_output(&self, source: &Value, preview: bool) -> Value;
}

/// Identity converter used for unregistered data types.
pub struct PassthroughConverter;

impl ValueConverter for PassthroughConverter {
    fn data_to_source(&self, data: &Value, _preview: bool) -> Value {
        data.clone()
    }

    fn source_to_output(&self, source: &Value, _preview: bool) -> Value {
        source.clone()
    }
}

/// Value converter lookup by data type, with a passthrough fallback.
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn ValueConverter>>,
    fallback: Arc<dyn ValueConverter>,
}

impl ConverterRegistry {
    /// Create a registry whose fallback is the passthrough converter
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            fallback: Arc::new(PassthroughConverter),
        }
    }

    /// Register a converter for a data type
    pub fn register(&mut self, data_type: impl Into<String>, converter: Arc<dyn ValueConverter>) {
        self.converters.insert(data_type.into(), converter);
    }

    /// Resolve the converter for a data type, falling back to passthrough
    pub fn converter_for(&self, data_type: &str) -> Arc<dyn ValueConverter> {
        self.converters
            .get(data_type)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
