use axum::extract::{Path, State};

use affinity_common::UserProfile;
use affinity_common::api::{
    EmbeddingResponse, GeneratedEmbedding, SimilarUsersRequest, SimilarUsersResponse,
};

use crate::SharedState;
use crate::error::{ApiError, ApiJson};

pub async fn generate_embedding(
    State(state): State<SharedState>,
    ApiJson(profile): ApiJson<UserProfile>,
) -> Result<ApiJson<GeneratedEmbedding>, ApiError> {
    profile.validate()?;
    Ok(ApiJson(state.embeddings.generate(&profile).await))
}

pub async fn get_embedding(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
) -> Result<ApiJson<EmbeddingResponse>, ApiError> {
    let embedding = state.embeddings.get(user_id).await?;
    Ok(ApiJson(EmbeddingResponse { user_id, embedding }))
}

pub async fn similar_users(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<SimilarUsersRequest>,
) -> Result<ApiJson<SimilarUsersResponse>, ApiError> {
    let similar_users = state
        .embeddings
        .find_similar(request.user_id, &request.candidate_ids, request.top_k())
        .await?;
    Ok(ApiJson(SimilarUsersResponse { similar_users }))
}
