//! Integration Tests for the Preview Pipeline
//!
//! Exercises the full path: record resolution, draft adapter wrapping,
//! template lookup, view rendering, and fragment extraction.

use crate::models::{ContentRecord, ContentTypeSchema, Template};
use crate::services::conversion::{ConverterRegistry, PropertyEditorRegistry, TextboxEditor};
use crate::services::renderer::{PreviewOutput, PreviewRenderer};
use crate::services::segments::{SegmentProviderChain, StaticProfileResolver};
use crate::services::traits::{PreviewContext, View, ViewEngine};
use crate::services::view::PlaceholderViewEngine;
use crate::services::PreviewError;
use crate::store::InMemoryStore;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const ARTICLE_VIEW: &str = "<!DOCTYPE html><html><head><title>{{name}}</title>\
<style>h1 { color: red; }</style></head>\
<body><h1>{{property:headline}}</h1><div>{{property:bodyText}}</div>\
<script>track()</script></body></html>";

fn seeded_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();

    store.insert_schema(
        ContentTypeSchema::new("article")
            .with_property("headline", "textstring", "textbox")
            .with_property("bodyText", "textstring", "textbox"),
    );
    store.insert_template(Template::new(42, "Article.cshtml"));

    store.insert(
        ContentRecord::new(100, "article", "Launch Post")
            .with_template(42)
            .with_property("headline", json!("We Launched"))
            .with_property("bodyText", json!("Details inside.")),
    );
    store.insert(ContentRecord::new(101, "article", "Draft Page"));
    store.insert(
        ContentRecord::new(102, "article", "Orphan Template").with_template(77),
    );

    store
}

fn renderer_over(store: InMemoryStore, engine: Arc<dyn ViewEngine>) -> PreviewRenderer {
    let store = Arc::new(store);

    let mut editors = PropertyEditorRegistry::new();
    editors.register(Arc::new(TextboxEditor));

    let ctx = PreviewContext {
        repository: store.clone(),
        schemas: store.clone(),
        editors: Arc::new(editors),
        converters: Arc::new(ConverterRegistry::new()),
        segments: Arc::new(SegmentProviderChain::new()),
        profiles: Arc::new(StaticProfileResolver::new()),
    };

    PreviewRenderer::new(ctx, store, engine)
}

fn default_renderer() -> PreviewRenderer {
    let engine = PlaceholderViewEngine::new().with_view("article", ARTICLE_VIEW);
    renderer_over(seeded_store(), Arc::new(engine))
}

#[test]
fn test_render_strips_document_shell() {
    let renderer = default_renderer();
    let output = renderer.render_preview(100).unwrap();

    let PreviewOutput::Fragment(fragment) = output else {
        panic!("expected a rendered fragment");
    };

    assert_eq!(
        fragment,
        "<h1>We Launched</h1><div>Details inside.</div>"
    );
    assert!(!fragment.contains("<head"));
    assert!(!fragment.contains("<style"));
    assert!(!fragment.contains("<script"));
    assert!(!fragment.contains("<html"));
    assert!(!fragment.contains("<body"));
    assert!(!fragment.contains("<!DOCTYPE"));
}

#[test]
fn test_no_template_yields_diagnostic() {
    let renderer = default_renderer();
    let output = renderer.render_preview(101).unwrap();

    assert_eq!(
        output,
        PreviewOutput::NoTemplate("Draft Page has no template. can't render.".to_string())
    );
    assert!(!output.is_rendered());
}

#[test]
fn test_no_template_never_invokes_engine() {
    struct CountingEngine(AtomicUsize);

    impl ViewEngine for CountingEngine {
        fn resolve_view(&self, alias: &str) -> Option<View> {
            Some(View::new(alias))
        }

        fn render(
            &self,
            _view: &View,
            _model: &dyn crate::models::RenderableContent,
        ) -> anyhow::Result<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(String::new())
        }
    }

    let engine = Arc::new(CountingEngine(AtomicUsize::new(0)));
    let renderer = renderer_over(seeded_store(), engine.clone());

    renderer.render_preview(101).unwrap();
    assert_eq!(engine.0.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unknown_id_is_not_found() {
    let renderer = default_renderer();

    assert!(matches!(
        renderer.render_preview(9999),
        Err(PreviewError::NotFound { id: 9999 })
    ));
}

#[test]
fn test_non_positive_id_is_invalid_input() {
    let renderer = default_renderer();

    assert!(matches!(
        renderer.render_preview(0),
        Err(PreviewError::InvalidInput(_))
    ));
    assert!(matches!(
        renderer.render_preview(-3),
        Err(PreviewError::InvalidInput(_))
    ));
}

#[test]
fn test_dangling_template_reference_is_fatal() {
    let renderer = default_renderer();

    assert!(matches!(
        renderer.render_preview(102),
        Err(PreviewError::TemplateNotFound { template_id: 77 })
    ));
}

#[test]
fn test_missing_physical_view_is_fatal() {
    // Template exists but no view is registered under its alias.
    let engine = PlaceholderViewEngine::new();
    let renderer = renderer_over(seeded_store(), Arc::new(engine));

    assert!(matches!(
        renderer.render_preview(100),
        Err(PreviewError::ViewNotFound { .. })
    ));
}

#[test]
fn test_engine_failure_surfaces_as_render_failed() {
    struct FailingEngine;

    impl ViewEngine for FailingEngine {
        fn resolve_view(&self, alias: &str) -> Option<View> {
            Some(View::new(alias))
        }

        fn render(
            &self,
            _view: &View,
            _model: &dyn crate::models::RenderableContent,
        ) -> anyhow::Result<String> {
            anyhow::bail!("template compilation exploded")
        }
    }

    let renderer = renderer_over(seeded_store(), Arc::new(FailingEngine));

    match renderer.render_preview(100) {
        Err(PreviewError::RenderFailed(msg)) => {
            assert!(msg.contains("template compilation exploded"));
        }
        other => panic!("expected RenderFailed, got {:?}", other.map(|o| o.into_body())),
    }
}

#[test]
fn test_template_alias_sanitized_before_resolution() {
    // "Article.cshtml" must resolve the view registered as "article".
    let engine = PlaceholderViewEngine::new().with_view("article", "<p>{{name}}</p>");
    let renderer = renderer_over(seeded_store(), Arc::new(engine));

    let output = renderer.render_preview(100).unwrap();
    assert_eq!(output.into_body(), "<p>Launch Post</p>");
}

#[test]
fn test_concurrent_renders_are_independent() {
    let renderer = Arc::new(default_renderer());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let renderer = renderer.clone();
            std::thread::spawn(move || {
                // Alternate between a renderable id and a missing one.
                if i % 2 == 0 {
                    assert!(renderer.render_preview(100).is_ok());
                } else {
                    assert!(renderer.render_preview(9999).is_err());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
