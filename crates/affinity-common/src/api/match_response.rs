use serde::{Deserialize, Serialize};

use crate::matching::RankedCandidate;

pub const MAX_MATCH_REASONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecommendation {
    pub user_id: i64,
    pub uuid: String,
    /// Overall score, 0-100.
    pub compatibility_score: f64,
    pub match_reasons: Vec<String>,
    pub conversation_starters: Vec<String>,
}

impl From<RankedCandidate> for MatchRecommendation {
    fn from(ranked: RankedCandidate) -> Self {
        let mut match_reasons = ranked.compatibility.top_compatibilities;
        match_reasons.truncate(MAX_MATCH_REASONS);

        Self {
            user_id: ranked.user_id,
            uuid: ranked.uuid,
            compatibility_score: ranked.compatibility.overall_score,
            match_reasons,
            conversation_starters: ranked.conversation_starters,
        }
    }
}
