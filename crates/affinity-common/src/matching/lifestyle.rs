use std::collections::HashSet;

use super::scoring::DimensionScore;
use crate::profile::{HABIT_SCALE_MAX, UserProfile};

const KIDS_MISMATCH: f64 = 0.2;
const DIFFERENT_FAITH: f64 = 0.5;
const SHARED_INTERESTS_JACCARD: f64 = 0.3;
const MAX_LIFESTYLE_EVIDENCE: usize = 3;

/// `|A ∩ B| / |A ∪ B|`. Returns `None` when either side is empty.
pub fn interest_jaccard(a: &[i64], b: &[i64]) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let a: HashSet<i64> = a.iter().copied().collect();
    let b: HashSet<i64> = b.iter().copied().collect();
    let union = a.union(&b).count();
    let common = a.intersection(&b).count();
    Some(common as f64 / union as f64)
}

fn habit_term(a: Option<u8>, b: Option<u8>) -> Option<(f64, bool)> {
    let (a, b) = (a?, b?);
    let gap = a.abs_diff(b) as f64 / HABIT_SCALE_MAX as f64;
    Some((1.0 - gap, gap <= 1.0 / HABIT_SCALE_MAX as f64))
}

/// Mean over the lifestyle sub-terms both sides provided.
pub fn score_lifestyle(a: &UserProfile, b: &UserProfile) -> DimensionScore {
    let mut terms = Vec::new();
    let mut evidence = Vec::new();

    if let (Some(kids_a), Some(kids_b)) = (a.wants_kids, b.wants_kids) {
        if kids_a == kids_b {
            terms.push(1.0);
            evidence.push(if kids_a { "Both want children" } else { "Both childfree" }.to_string());
        } else {
            terms.push(KIDS_MISMATCH);
        }
    }

    for (term, label) in [
        (habit_term(a.drinks, b.drinks), "Similar drinking habits"),
        (habit_term(a.smokes, b.smokes), "Similar smoking habits"),
    ] {
        if let Some((score, similar)) = term {
            terms.push(score);
            if similar {
                evidence.push(label.to_string());
            }
        }
    }

    if let (Some(religion_a), Some(religion_b)) = (a.religion, b.religion) {
        if religion_a == religion_b {
            terms.push(1.0);
            evidence.push("Shared faith".to_string());
        } else {
            terms.push(DIFFERENT_FAITH);
        }
    }

    if let Some(jaccard) = interest_jaccard(&a.interests, &b.interests) {
        terms.push(jaccard);
        if jaccard > SHARED_INTERESTS_JACCARD {
            evidence.push("Shared hobbies and interests".to_string());
        }
    }

    evidence.truncate(MAX_LIFESTYLE_EVIDENCE);
    DimensionScore::from_terms(&terms, evidence)
}
