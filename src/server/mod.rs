//! HTTP API server.
//!
//! Exposes the service's wire surface:
//! - `POST /analyze` - fetch a URL, run the accessibility scan, persist
//! - `GET /history` - paginated past analyses
//! - `GET /analysis/:id` - a single stored analysis
//! - `GET /progress/:token` - SSE stream of live progress events
//!
//! All collaborators (database pool, fetcher, progress registry) are passed
//! in explicitly through [`AppState`]; there are no module-level singletons.

mod error;
mod handlers;
mod sse;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

use crate::fetch::HtmlFetcher;
use crate::progress::ProgressRegistry;

pub use error::ApiError;
pub use types::{AnalyzeRequest, HistoryQuery, HistoryResponse};

/// Shared state for the API handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: Arc<SqlitePool>,
    /// Page fetcher
    pub fetcher: Arc<HtmlFetcher>,
    /// Progress channel registry
    pub progress: Arc<ProgressRegistry>,
}

/// Builds the API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/history", get(handlers::history))
        .route("/analysis/:id", get(handlers::get_analysis))
        .route("/progress/:token", get(sse::progress_stream))
        // The frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the API until shutdown.
pub async fn start_server(host: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", host, port, e))?;

    log::info!("a11y_status listening on http://{}:{}/", host, port);
    log::info!("  - Analyze:  POST http://{}:{}/analyze", host, port);
    log::info!("  - History:  GET  http://{}:{}/history", host, port);
    log::info!("  - Progress: GET  http://{}:{}/progress/:token", host, port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
