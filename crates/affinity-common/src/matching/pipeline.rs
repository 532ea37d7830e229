use std::{cmp::Ordering, collections::HashSet};

use rayon::prelude::*;

use super::{
    scoring::{CompatibilityEngine, CompatibilityResult, MatchingConfig},
    starters::conversation_starters,
};
use crate::profile::{UserProfile, ValidationError};

/// One scored candidate, ready to be turned into a recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub user_id: i64,
    pub uuid: String,
    pub compatibility: CompatibilityResult,
    pub conversation_starters: Vec<String>,
}

enum CandidateOutcome {
    Scored(RankedCandidate),
    Skipped {
        user_id: i64,
        reason: ValidationError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    compatibility: CompatibilityEngine,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            compatibility: CompatibilityEngine::new(config),
        }
    }

    pub fn compatibility(&self) -> &CompatibilityEngine {
        &self.compatibility
    }

    fn score_candidate(&self, user: &UserProfile, candidate: &UserProfile) -> CandidateOutcome {
        if let Err(reason) = candidate.validate() {
            return CandidateOutcome::Skipped {
                user_id: candidate.user_id,
                reason,
            };
        }

        let compatibility = self.compatibility.compute(user, candidate);
        CandidateOutcome::Scored(RankedCandidate {
            user_id: candidate.user_id,
            uuid: candidate.uuid.clone(),
            compatibility,
            conversation_starters: conversation_starters(user, candidate),
        })
    }

    /// Scores every non-excluded candidate in parallel, then stable-sorts by
    /// the reported overall score (descending) and keeps the first `limit`.
    /// Candidates that fail validation are logged and dropped.
    pub fn recommend(
        &self,
        user: &UserProfile,
        candidates: &[UserProfile],
        limit: i64,
        excluded_user_ids: &[i64],
    ) -> Result<Vec<RankedCandidate>, ValidationError> {
        user.validate()?;

        let Ok(limit) = usize::try_from(limit) else {
            return Ok(Vec::new());
        };
        if limit == 0 {
            return Ok(Vec::new());
        }

        let excluded: HashSet<i64> = excluded_user_ids.iter().copied().collect();

        // par_iter().collect() keeps input order, so the sort below sees the
        // same sequence a sequential pass would.
        let outcomes: Vec<CandidateOutcome> = candidates
            .par_iter()
            .filter(|candidate| !excluded.contains(&candidate.user_id))
            .map(|candidate| self.score_candidate(user, candidate))
            .collect();

        let mut ranked = Vec::with_capacity(outcomes.len());
        let mut skipped = 0usize;
        for outcome in outcomes {
            match outcome {
                CandidateOutcome::Scored(candidate) => ranked.push(candidate),
                CandidateOutcome::Skipped { user_id, reason } => {
                    skipped += 1;
                    tracing::warn!(
                        user_id = user.user_id,
                        candidate_id = user_id,
                        error = %reason,
                        "skipping candidate with invalid profile"
                    );
                }
            }
        }

        ranked.sort_by(|a, b| {
            b.compatibility
                .overall_score
                .partial_cmp(&a.compatibility.overall_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(limit);

        tracing::debug!(
            user_id = user.user_id,
            candidates = candidates.len(),
            excluded = excluded.len(),
            skipped,
            returned = ranked.len(),
            "ranked candidates"
        );

        Ok(ranked)
    }
}
