use serde::{Deserialize, Serialize};

use crate::embedding::SimilarUser;

const fn default_top_k() -> i64 {
    10
}

/// `GET /api/embeddings/:user_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    pub user_id: i64,
    pub embedding: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarUsersRequest {
    pub user_id: i64,
    #[serde(default)]
    pub candidate_ids: Vec<i64>,
    /// Non-positive values return an empty list.
    #[serde(default = "default_top_k")]
    pub top_k: i64,
}

impl SimilarUsersRequest {
    pub fn top_k(&self) -> usize {
        usize::try_from(self.top_k).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarUsersResponse {
    pub similar_users: Vec<SimilarUser>,
}
