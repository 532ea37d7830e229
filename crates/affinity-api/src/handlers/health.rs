use axum::{Json, extract::State};
use serde_json::json;
use tokio::time::{Duration, timeout};

use crate::SharedState;
use crate::error::ApiError;

const CACHE_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Not ready once shutdown has begun. A degraded cache is reported but does
/// not fail readiness; scoring works without it.
pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    let backend = state.embeddings.cache_backend();
    let cache_status = match timeout(CACHE_PROBE_TIMEOUT, state.embeddings.probe_cache()).await {
        Ok(Some(true)) => "ok",
        Ok(Some(false)) | Err(_) => "unavailable",
        Ok(None) => "disabled",
    };

    Ok(Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "cache": backend,
        "cache_status": cache_status,
    })))
}
