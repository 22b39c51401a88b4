//! Router construction and serving.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Build the HTTP router.
///
/// `/metrics` is only mounted when a Prometheus recorder handle is given.
pub fn build_router(
    state: Arc<AppState>,
    prometheus: Option<PrometheusHandle>,
    max_upload_bytes: usize,
) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index_handler))
        .route("/upload_image", post(handlers::upload_image_handler))
        .route("/get_entries", get(handlers::get_entries_handler))
        .route("/health", get(handlers::health_handler))
        .route("/ready", get(handlers::ready_handler))
        .route("/api/stats", get(handlers::stats_handler));

    if let Some(handle) = prometheus {
        router = router
            .route("/metrics", get(handlers::metrics_handler))
            .layer(Extension(handle));
    }

    router
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

/// Serve `app` on `addr` until Ctrl+C.
pub async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
