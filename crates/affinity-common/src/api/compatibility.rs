use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// Body of `POST /api/compatibility`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    pub user_a: UserProfile,
    pub user_b: UserProfile,
}
