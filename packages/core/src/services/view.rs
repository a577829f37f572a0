//! Placeholder View Engine
//!
//! A minimal [`ViewEngine`] for the demo binary and tests. Views register
//! as template strings; rendering substitutes `{{name}}`, `{{urlSegment}}`,
//! `{{creatorName}}`, `{{writerName}}`, and `{{property:alias}}`
//! placeholders. Real deployments inject their own engine behind the same
//! trait.

use crate::models::RenderableContent;
use crate::services::traits::{View, ViewEngine};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z]+)(?::([A-Za-z0-9]+))?\}\}").unwrap());

/// Registry of view templates keyed by sanitized alias.
#[derive(Default)]
pub struct PlaceholderViewEngine {
    views: HashMap<String, String>,
}

impl PlaceholderViewEngine {
    /// Create an engine with no registered views
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view template under an alias
    pub fn with_view(mut self, alias: impl Into<String>, template: impl Into<String>) -> Self {
        self.views.insert(alias.into(), template.into());
        self
    }
}

impl ViewEngine for PlaceholderViewEngine {
    fn resolve_view(&self, alias: &str) -> Option<View> {
        if self.views.contains_key(alias) {
            Some(View::new(alias))
        } else {
            None
        }
    }

    fn render(&self, view: &View, model: &dyn RenderableContent) -> anyhow::Result<String> {
        let template = self
            .views
            .get(&view.alias)
            .ok_or_else(|| anyhow::anyhow!("view '{}' is not registered", view.alias))?;

        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match key {
                "name" => model.name().to_string(),
                "urlSegment" => model.url_segment().map(str::to_string).unwrap_or_default(),
                "creatorName" => model.creator_name().map(str::to_string).unwrap_or_default(),
                "writerName" => model.writer_name().map(str::to_string).unwrap_or_default(),
                "property" => caps
                    .get(2)
                    .and_then(|alias| model.property(alias.as_str()))
                    .map(|p| value_to_text(&p.output_value()))
                    .unwrap_or_default(),
                _ => String::new(),
            }
        });

        Ok(rendered.into_owned())
    }
}

/// Render a converted property value as template text.
fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
