//! Preview Server Binary
//!
//! Standalone binary that serves the list-view preview endpoint over a
//! seeded in-memory store. Real deployments embed the library and wire the
//! CMS repository, template store, and view engine behind the collaborator
//! traits instead.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3000)
//! cargo run --bin preview-server
//!
//! # Custom port
//! PREVIEW_PORT=3001 cargo run --bin preview-server
//! ```
//!
//! # Environment Variables
//!
//! - `PREVIEW_PORT`: Server port (default: 3000)
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::sync::Arc;

use listview_preview_core::models::{ContentRecord, ContentTypeSchema, Template};
use listview_preview_core::server::start_server;
use listview_preview_core::services::{
    ConverterRegistry, PlaceholderViewEngine, PreviewContext, PreviewRenderer,
    PropertyEditorRegistry, SegmentProviderChain, StaticProfileResolver, TextboxEditor,
};
use listview_preview_core::store::InMemoryStore;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("ListView Preview Server");

    let port = env::var("PREVIEW_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    tracing::info!(port, "configuration loaded");

    let store = Arc::new(seed_store());

    let mut editors = PropertyEditorRegistry::new();
    editors.register(Arc::new(TextboxEditor));

    let ctx = PreviewContext {
        repository: store.clone(),
        schemas: store.clone(),
        editors: Arc::new(editors),
        converters: Arc::new(ConverterRegistry::new()),
        segments: Arc::new(SegmentProviderChain::new()),
        profiles: Arc::new(
            StaticProfileResolver::new()
                .with_user(1, "Jane Editor")
                .with_user(2, "Sam Writer"),
        ),
    };

    let engine = PlaceholderViewEngine::new().with_view(
        "article",
        "<!DOCTYPE html><html><head><title>{{name}}</title></head>\
         <body><h1>{{property:headline}}</h1><div>{{property:bodyText}}</div></body></html>",
    );

    let renderer = Arc::new(PreviewRenderer::new(ctx, store, Arc::new(engine)));

    start_server(renderer, port).await
}

/// Seed demo content: one templated article, one draft without a template.
fn seed_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();

    store.insert_schema(
        ContentTypeSchema::new("article")
            .with_property("headline", "textstring", "textbox")
            .with_property("bodyText", "textstring", "textbox"),
    );
    store.insert_template(Template::new(42, "Article.cshtml"));

    store.insert(
        ContentRecord::new(1001, "article", "Spring Campaign")
            .with_template(42)
            .with_authors(1, 2)
            .with_property("headline", json!("Spring is here"))
            .with_property("bodyText", json!("Our spring line has landed.")),
    );
    store.insert(ContentRecord::new(1002, "article", "Untemplated Draft").with_authors(1, 1));

    store
}
