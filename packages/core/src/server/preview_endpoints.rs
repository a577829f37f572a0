//! Preview Endpoints
//!
//! The list-view widget issues one GET per visible row and swaps the
//! returned fragment into the row's preview slot.
//!
//! # Endpoints
//!
//! - `GET /preview/health` - Health check endpoint
//! - `GET /preview/render/:content_id` - Render one content item's preview

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::server::{AppState, HttpError};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/preview/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Render the inline preview for one content id.
///
/// Returns 200 with the stripped HTML fragment, or 200 with a plain-text
/// diagnostic when the content has no template assigned. Failures return a
/// JSON error body with an appropriate status (404 unknown id, 400 invalid
/// id, 500 for template/view/render faults).
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/preview/render/1001
/// ```
// TODO: require back-office authorization before exposing this endpoint
async fn render_preview(
    State(state): State<AppState>,
    Path(content_id): Path<i64>,
) -> Result<Response, HttpError> {
    let output = state.renderer.render_preview(content_id)?;
    Ok((StatusCode::OK, output.into_body()).into_response())
}

/// Routes for the preview endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/preview/health", get(health_check))
        .route("/preview/render/:content_id", get(render_preview))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentRecord, ContentTypeSchema, Template};
    use crate::server::create_router;
    use crate::services::conversion::{ConverterRegistry, PropertyEditorRegistry, TextboxEditor};
    use crate::services::segments::{SegmentProviderChain, StaticProfileResolver};
    use crate::services::traits::PreviewContext;
    use crate::services::{PlaceholderViewEngine, PreviewRenderer};
    use crate::store::InMemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let mut store = InMemoryStore::new();
        store.insert_schema(
            ContentTypeSchema::new("article").with_property("headline", "textstring", "textbox"),
        );
        store.insert_template(Template::new(42, "Article.cshtml"));
        store.insert(
            ContentRecord::new(100, "article", "Launch Post")
                .with_template(42)
                .with_property("headline", json!("We Launched")),
        );
        store.insert(ContentRecord::new(101, "article", "Draft Page"));
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

        let engine = PlaceholderViewEngine::new().with_view(
            "article",
            "<html><head><title>t</title></head><body><h2>{{property:headline}}</h2></body></html>",
        );

        let renderer = Arc::new(PreviewRenderer::new(ctx, store, Arc::new(engine)));
        create_router(AppState { renderer })
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_render_returns_fragment() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/preview/render/100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<h2>We Launched</h2>");
    }

    #[tokio::test]
    async fn test_render_no_template_diagnostic() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/preview/render/101")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "Draft Page has no template. can't render."
        );
    }

    #[tokio::test]
    async fn test_render_unknown_id_is_404() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/preview/render/9999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["code"], "CONTENT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_render_non_positive_id_is_400() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/preview/render/0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/preview/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
