//! HTTP server for the preview endpoint
//!
//! Exposes the preview pipeline to the list-view widget. Each request is
//! handled independently; the shared state is read-only (an `Arc` to the
//! renderer and its collaborators), so concurrent renders need no locks.
//!
//! # Security
//!
//! No authentication is enforced yet. The endpoint must sit behind the
//! back-office session before this ships anywhere public.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::PreviewRenderer;

mod http_error;
mod preview_endpoints;

pub use http_error::HttpError;

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PreviewRenderer>,
}

/// Create the application router with all endpoint modules
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(preview_endpoints::routes(state))
        .layer(TraceLayer::new_for_http())
}

/// Start the preview HTTP server
///
/// # Arguments
///
/// * `renderer` - Shared preview renderer
/// * `port` - Port to listen on
///
/// # Errors
///
/// Returns error if the server fails to bind or start.
pub async fn start_server(renderer: Arc<PreviewRenderer>, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState { renderer });

    let addr = format!("127.0.0.1:{}", port);
    tracing::info!("preview server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
