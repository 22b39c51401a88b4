//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Extension, Multipart},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use bytes::Bytes;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use ingestion::RECORD_KEY_PREFIX;
use weather_common::{ProcessedRecord, WeatherError};

use crate::metrics::{MetricsSnapshot, UploadOutcome};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

// ============================================================================
// Error responses
// ============================================================================

/// JSON error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// An error rendered as a status code plus [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        if err.is_client_fault() {
            Self::bad_request(err.to_string())
        } else {
            // Server-side detail stays in the logs
            Self::internal("Internal server error")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Front-end page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /upload_image - Validate, enrich and store one image upload
///
/// Expects multipart fields `file` (image bytes) and `metadata` (JSON).
pub async fn upload_image_handler(
    Extension(state): Extension<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessedRecord>, ApiError> {
    let id = Uuid::new_v4().to_string();

    let mut file: Option<Bytes> = None;
    let mut metadata: Option<String> = None;

    // Covers malformed bodies and bodies over the upload limit
    let reject = |what: &str, e: MultipartError| {
        state.metrics.record_upload(UploadOutcome::Rejected, 0);
        warn!(id = %id, error = %e, "Unreadable multipart body");
        ApiError::new(e.status(), format!("Invalid {}: {}", what, e.body_text()))
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| reject("multipart body", e))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file = Some(field.bytes().await.map_err(|e| reject("file field", e))?);
            }
            "metadata" => {
                metadata = Some(field.text().await.map_err(|e| reject("metadata field", e))?);
            }
            _ => {}
        }
    }

    let (Some(file), Some(metadata)) = (file, metadata) else {
        state.metrics.record_upload(UploadOutcome::Rejected, 0);
        return Err(ApiError::bad_request(
            "Multipart body must contain 'file' and 'metadata' fields",
        ));
    };

    info!(id = %id, image_bytes = file.len(), "Received image upload");

    match state.upload.handle_upload(&metadata, &file).await {
        Ok(record) => {
            state.metrics.record_upload(UploadOutcome::Stored, file.len());
            info!(id = %id, station_id = %record.station_id, "Upload stored");
            Ok(Json(record))
        }
        Err(e) if e.is_client_fault() => {
            state.metrics.record_upload(UploadOutcome::Rejected, file.len());
            warn!(id = %id, error = %e, "Upload rejected");
            Err(e.into())
        }
        Err(e) => {
            state.metrics.record_upload(UploadOutcome::Failed, file.len());
            error!(id = %id, error = %e, "Upload failed");
            Err(e.into())
        }
    }
}

/// GET /get_entries - All stored records, unordered
#[instrument(skip(state))]
pub async fn get_entries_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<ProcessedRecord>>, ApiError> {
    match state.query.list_all().await {
        Ok(records) => {
            state.metrics.record_entries_listed(records.len());
            Ok(Json(records))
        }
        Err(e) => {
            state.metrics.record_query_failure();
            error!(error = %e, "Listing entries failed");
            Err(ApiError::internal("Error fetching entries"))
        }
    }
}

/// GET /health - Liveness check
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /ready - Readiness check (verifies store connectivity)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let probe = format!("{}:__ready__", RECORD_KEY_PREFIX);
    match state.store.get(&probe).await {
        Ok(_) => (StatusCode::OK, "Ready"),
        Err(e) => {
            warn!(error = %e, "Record store not reachable");
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready")
        }
    }
}

/// GET /api/stats - Local request counters
pub async fn stats_handler(Extension(state): Extension<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

/// GET /metrics - Prometheus metrics endpoint
pub async fn metrics_handler(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        handle.render(),
    )
}
