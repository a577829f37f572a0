//! In-Memory Store
//!
//! HashMap-backed implementation of the repository-side collaborator traits
//! (`ContentRepository`, `SchemaResolver`, `TemplateStore`). The preview
//! pipeline only ever reads, so the store is built once, wrapped in an
//! `Arc`, and shared across requests. Used by the demo server binary and
//! the test suites; production deployments wire the real CMS repository
//! behind the same traits.

use crate::models::{ContentRecord, ContentTypeSchema, Template};
use crate::services::traits::{ContentRepository, SchemaResolver, TemplateStore};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only content, schema, and template storage.
///
/// Children are indexed by parent id in insertion (storage) order; sort
/// order is applied by the adapter, not here.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<i64, Arc<ContentRecord>>,
    children: HashMap<i64, Vec<i64>>,
    schemas: HashMap<String, Arc<ContentTypeSchema>>,
    templates: HashMap<i64, Template>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a content record, indexing it under its parent
    pub fn insert(&mut self, record: ContentRecord) {
        if let Some(parent_id) = record.parent_id {
            self.children.entry(parent_id).or_default().push(record.id);
        }
        self.records.insert(record.id, Arc::new(record));
    }

    /// Register a content-type schema
    pub fn insert_schema(&mut self, schema: ContentTypeSchema) {
        self.schemas.insert(schema.alias.clone(), Arc::new(schema));
    }

    /// Register a template record
    pub fn insert_template(&mut self, template: Template) {
        self.templates.insert(template.id, template);
    }
}

impl ContentRepository for InMemoryStore {
    fn content_by_id(&self, id: i64) -> Option<Arc<ContentRecord>> {
        self.records.get(&id).cloned()
    }

    fn parent_of(&self, record: &ContentRecord) -> Option<Arc<ContentRecord>> {
        record.parent_id.and_then(|id| self.content_by_id(id))
    }

    fn children_of(&self, id: i64) -> Vec<Arc<ContentRecord>> {
        self.children
            .get(&id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|child_id| self.content_by_id(*child_id))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl SchemaResolver for InMemoryStore {
    fn schema_by_alias(&self, alias: &str) -> Option<Arc<ContentTypeSchema>> {
        self.schemas.get(alias).cloned()
    }
}

impl TemplateStore for InMemoryStore {
    fn template_by_id(&self, id: i64) -> Option<Template> {
        self.templates.get(&id).cloned()
    }
}
