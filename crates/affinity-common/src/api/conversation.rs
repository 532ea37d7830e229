use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationStarterRequest {
    pub user_a: UserProfile,
    pub user_b: UserProfile,
    /// Score the caller already has for this pair. Logged only.
    #[serde(default)]
    pub compatibility_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationStarterResponse {
    pub starters: Vec<String>,
}
