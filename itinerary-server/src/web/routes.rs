//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Segment, parse_segments};

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(server_health_check))
        .route("/health", get(health))
        .route("/calculate", post(calculate_endpoints))
        .route("/itinerary", post(calculate_itinerary))
        .layer(CatchPanicLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Server status, as a JSON message.
async fn server_health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        data: "Server is up and running".to_string(),
    })
}

/// Determine where a journey starts and ends.
///
/// Responds with `[start, end]`.
async fn calculate_endpoints(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<[String; 2]>, AppError> {
    let segments = parse_payload(&body)?;
    let pair = state.service.endpoints(&segments).await?;

    Ok(Json([pair.start.into_inner(), pair.end.into_inner()]))
}

/// Reconstruct the full itinerary.
async fn calculate_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ItineraryResponse>, AppError> {
    let segments = parse_payload(&body)?;

    // Assembly is CPU-bound and may try every origin, keep it off the runtime
    let service = state.service.clone();
    let report = tokio::task::spawn_blocking(move || service.full_itinerary(&segments))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("itinerary task failed: {e}"),
        })??;

    if !report.is_complete() {
        warn!(
            unused = report.unused_segments,
            "segments do not form one connected journey"
        );
    }

    Ok(Json(ItineraryResponse::from_report(report)))
}

/// Decode and validate a `[[origin, destination], ...]` body.
///
/// Parsed by hand rather than with the `Json` extractor so a bad body can
/// be logged and answered with our own error shape.
fn parse_payload(body: &Bytes) -> Result<Vec<Segment>, AppError> {
    let raw: Vec<Vec<String>> = serde_json::from_slice(body).map_err(|e| {
        warn!(
            error = %e,
            len = body.len(),
            body = %body_preview(body),
            "failed to parse payload"
        );
        AppError::BadRequest {
            message: format!("Can't parse the payload: {e}"),
        }
    })?;

    Ok(parse_segments(&raw)?)
}

/// Longest prefix of a rejected body that gets logged.
const LOGGED_BODY_BYTES: usize = 256;

fn body_preview(body: &[u8]) -> String {
    let prefix = &body[..body.len().min(LOGGED_BODY_BYTES)];
    let mut preview = String::from_utf8_lossy(prefix).into_owned();
    if body.len() > LOGGED_BODY_BYTES {
        preview.push_str("...");
    }
    preview
}
