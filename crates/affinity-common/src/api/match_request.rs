use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

const fn default_limit() -> i64 {
    5
}

/// Body of `POST /api/matches/recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub user: UserProfile,
    pub candidates: Vec<UserProfile>,
    /// Zero or negative yields no recommendations.
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub excluded_user_ids: Vec<i64>,
}
