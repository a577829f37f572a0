//! Draft Content Adapter
//!
//! Presents a raw [`ContentRecord`] (draft or published) as a fully
//! navigable [`RenderableContent`], so the shared view engine renders it
//! exactly like published content. The engine is written against the
//! capability trait; this adapter is the draft-backed implementation.
//!
//! Instances are request-scoped: created fresh per preview request and
//! discarded after rendering. Derived fields (URL segment, author names)
//! are computed on first access and memoized for the instance's lifetime;
//! property values convert on every access.

use crate::models::{
    ContentRecord, ContentTypeSchema, RenderableContent, RenderableProperty,
};
use crate::services::conversion::ValueConverter;
use crate::services::error::PreviewError;
use crate::services::traits::PreviewContext;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// One materialized property of a draft adapter.
///
/// Holds the raw value after the property editor's raw-to-string pass; the
/// source and output stages run on each access with the adapter's preview
/// flag as context.
pub struct DraftProperty {
    alias: String,
    data: Value,
    converter: Arc<dyn ValueConverter>,
    preview: bool,
}

impl RenderableProperty for DraftProperty {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn has_value(&self) -> bool {
        match &self.data {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        }
    }

    fn data_value(&self) -> &Value {
        &self.data
    }

    fn value(&self) -> Value {
        self.converter.data_to_source(&self.data, self.preview)
    }

    fn output_value(&self) -> Value {
        let source = self.converter.data_to_source(&self.data, self.preview);
        self.converter.source_to_output(&source, self.preview)
    }
}

/// Draft-backed implementation of [`RenderableContent`].
///
/// Identity accessors pass through to the wrapped record. Hierarchy
/// accessors wrap the repository-resolved parent/children in fresh adapter
/// instances carrying the same preview flag. Properties materialize at
/// construction, one per schema-declared property in schema order,
/// regardless of whether the record has a stored value.
pub struct DraftContentAdapter {
    record: Arc<ContentRecord>,
    schema: Arc<ContentTypeSchema>,
    preview: bool,
    ctx: PreviewContext,
    properties: Vec<DraftProperty>,
    url_segment: OnceLock<String>,
    creator_name: OnceLock<String>,
    writer_name: OnceLock<String>,
}

impl DraftContentAdapter {
    /// Wrap a content record for rendering.
    ///
    /// # Errors
    ///
    /// - `PreviewError::InvalidInput` if `record` is absent
    /// - `PreviewError::SchemaNotFound` if the record's content-type alias
    ///   has no registered schema
    pub fn new(
        record: Option<Arc<ContentRecord>>,
        preview: bool,
        ctx: PreviewContext,
    ) -> Result<Self, PreviewError> {
        let record =
            record.ok_or_else(|| PreviewError::invalid_input("content record is absent"))?;

        let schema = ctx
            .schemas
            .schema_by_alias(&record.content_type_alias)
            .ok_or_else(|| PreviewError::schema_not_found(&record.content_type_alias))?;

        let properties = Self::materialize_properties(&record, &schema, preview, &ctx);

        Ok(Self {
            record,
            schema,
            preview,
            ctx,
            properties,
            url_segment: OnceLock::new(),
            creator_name: OnceLock::new(),
            writer_name: OnceLock::new(),
        })
    }

    /// The schema governing the wrapped record
    pub fn schema(&self) -> &ContentTypeSchema {
        &self.schema
    }

    /// Whether the adapter renders in preview (draft-aware) mode
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// One property per schema declaration, in schema order. Present raw
    /// values run through the property editor's raw-to-string conversion
    /// before wrapping; never-set properties wrap a null.
    fn materialize_properties(
        record: &ContentRecord,
        schema: &ContentTypeSchema,
        preview: bool,
        ctx: &PreviewContext,
    ) -> Vec<DraftProperty> {
        schema
            .properties
            .iter()
            .map(|def| {
                let raw = record
                    .properties
                    .get(&def.alias)
                    .filter(|v| !v.is_null())
                    .cloned();

                let data = match raw {
                    Some(value) => match ctx.editors.editor_by_alias(&def.editor_alias) {
                        Some(editor) => editor.raw_to_string(&value),
                        None => value,
                    },
                    None => Value::Null,
                };

                DraftProperty {
                    alias: def.alias.clone(),
                    data,
                    converter: ctx.converters.converter_for(&def.data_type),
                    preview,
                }
            })
            .collect()
    }
}

impl RenderableContent for DraftContentAdapter {
    fn id(&self) -> i64 {
        self.record.id
    }

    fn key(&self) -> Uuid {
        self.record.key
    }

    fn content_type_id(&self) -> i64 {
        self.record.content_type_id
    }

    fn content_type_alias(&self) -> &str {
        &self.record.content_type_alias
    }

    fn name(&self) -> &str {
        &self.record.name
    }

    fn path(&self) -> &str {
        &self.record.path
    }

    fn level(&self) -> i32 {
        self.record.level
    }

    fn sort_order(&self) -> i32 {
        self.record.sort_order
    }

    fn revision(&self) -> Uuid {
        self.record.revision
    }

    fn template_id(&self) -> i64 {
        // 0 is the "no template" sentinel
        self.record.template_id.unwrap_or(0)
    }

    fn is_draft(&self) -> bool {
        !self.record.published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.record.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.record.updated_at
    }

    fn creator_id(&self) -> i64 {
        self.record.creator_id
    }

    fn writer_id(&self) -> i64 {
        self.record.writer_id
    }

    fn url_segment(&self) -> Result<&str, PreviewError> {
        if let Some(segment) = self.url_segment.get() {
            return Ok(segment);
        }
        let segment = self.ctx.segments.segment_for(&self.record)?;
        Ok(self.url_segment.get_or_init(|| segment))
    }

    fn creator_name(&self) -> Result<&str, PreviewError> {
        if let Some(name) = self.creator_name.get() {
            return Ok(name);
        }
        let name = self
            .ctx
            .profiles
            .display_name(self.record.creator_id)
            .ok_or_else(|| {
                PreviewError::provider_exhausted(format!(
                    "no profile for creator {}",
                    self.record.creator_id
                ))
            })?;
        Ok(self.creator_name.get_or_init(|| name))
    }

    fn writer_name(&self) -> Result<&str, PreviewError> {
        if let Some(name) = self.writer_name.get() {
            return Ok(name);
        }
        let name = self
            .ctx
            .profiles
            .display_name(self.record.writer_id)
            .ok_or_else(|| {
                PreviewError::provider_exhausted(format!(
                    "no profile for writer {}",
                    self.record.writer_id
                ))
            })?;
        Ok(self.writer_name.get_or_init(|| name))
    }

    fn parent(&self) -> Option<Box<dyn RenderableContent>> {
        let parent = self.ctx.repository.parent_of(&self.record)?;
        DraftContentAdapter::new(Some(parent), self.preview, self.ctx.clone())
            .ok()
            .map(|adapter| Box::new(adapter) as Box<dyn RenderableContent>)
    }

    fn children(&self) -> Vec<Box<dyn RenderableContent>> {
        let mut children: Vec<DraftContentAdapter> = self
            .ctx
            .repository
            .children_of(self.record.id)
            .into_iter()
            .filter_map(|child| {
                DraftContentAdapter::new(Some(child), self.preview, self.ctx.clone()).ok()
            })
            .collect();

        // Storage order is not guaranteed; re-sort explicitly.
        children.sort_by_key(|child| child.record.sort_order);

        children
            .into_iter()
            .map(|child| Box::new(child) as Box<dyn RenderableContent>)
            .collect()
    }

    fn properties(&self) -> Vec<&dyn RenderableProperty> {
        self.properties
            .iter()
            .map(|p| p as &dyn RenderableProperty)
            .collect()
    }

    fn property(&self, alias: &str) -> Option<&dyn RenderableProperty> {
        self.properties
            .iter()
            .find(|p| p.alias.eq_ignore_ascii_case(alias))
            .map(|p| p as &dyn RenderableProperty)
    }
}
