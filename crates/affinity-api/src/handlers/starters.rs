use affinity_common::api::{ConversationStarterRequest, ConversationStarterResponse};
use affinity_common::matching::conversation_starters;

use crate::error::{ApiError, ApiJson};

pub async fn conversation_starters_for_pair(
    ApiJson(request): ApiJson<ConversationStarterRequest>,
) -> Result<ApiJson<ConversationStarterResponse>, ApiError> {
    request.user_a.validate()?;
    request.user_b.validate()?;

    tracing::debug!(
        user_a = request.user_a.user_id,
        user_b = request.user_b.user_id,
        precomputed_score = ?request.compatibility_score,
        "generating conversation starters"
    );

    Ok(ApiJson(ConversationStarterResponse {
        starters: conversation_starters(&request.user_a, &request.user_b),
    }))
}
