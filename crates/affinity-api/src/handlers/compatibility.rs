use axum::extract::State;

use affinity_common::api::{CompatibilityRequest, CompatibilityResult};

use crate::SharedState;
use crate::error::{ApiError, ApiJson};

pub async fn compute_compatibility(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<CompatibilityRequest>,
) -> Result<ApiJson<CompatibilityResult>, ApiError> {
    let result = state
        .matching
        .compatibility()
        .try_compute(&request.user_a, &request.user_b)?;

    tracing::debug!(
        user_a = request.user_a.user_id,
        user_b = request.user_b.user_id,
        overall = result.overall_score,
        "computed compatibility"
    );

    Ok(ApiJson(result))
}
