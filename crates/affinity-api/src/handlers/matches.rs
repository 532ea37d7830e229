use axum::extract::State;

use affinity_common::api::{MatchRecommendation, MatchRequest};

use crate::SharedState;
use crate::error::{ApiError, ApiJson};

/// Ranking fans out over rayon, so it runs off the async workers.
pub async fn recommend_matches(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<MatchRequest>,
) -> Result<ApiJson<Vec<MatchRecommendation>>, ApiError> {
    let engine = state.matching.clone();

    let ranked = tokio::task::spawn_blocking(move || {
        engine.recommend(
            &request.user,
            &request.candidates,
            request.limit,
            &request.excluded_user_ids,
        )
    })
    .await
    .map_err(|err| ApiError::Internal(format!("ranking task failed: {err}")))??;

    Ok(ApiJson(
        ranked.into_iter().map(MatchRecommendation::from).collect(),
    ))
}
