use super::scoring::NEUTRAL_SCORE;
use crate::profile::{AttachmentStyle, UserProfile};

const GROWTH_AREA_BONUS: f64 = 0.2;
const CHALLENGE_PENALTY: f64 = 0.1;

/// Mean of mutual verification and average reputation.
pub fn score_attraction(a: &UserProfile, b: &UserProfile) -> f64 {
    let verification = match (a.is_video_verified, b.is_video_verified) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.7,
        (false, false) => 0.5,
    };
    let reputation = (a.reputation_score + b.reputation_score) / 2.0 / 100.0;
    (verification + reputation) / 2.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthAssessment {
    pub score: f64,
    pub growth_areas: Vec<String>,
    pub challenges: Vec<String>,
}

/// true when one side is above `high` and the other below `low`, in either order.
fn split_pair(a: f64, b: f64, high: f64, low: f64) -> bool {
    (a > high && b < low) || (b > high && a < low)
}

fn is_anxious_avoidant(a: &AttachmentStyle, b: &AttachmentStyle) -> bool {
    matches!(
        (a, b),
        (AttachmentStyle::Anxious, AttachmentStyle::Avoidant)
            | (AttachmentStyle::Avoidant, AttachmentStyle::Anxious)
    )
}

/// Complementary traits raise the score, friction flags lower it. Every flag
/// is checked in both directions.
pub fn assess_growth(a: &UserProfile, b: &UserProfile) -> GrowthAssessment {
    let mut growth_areas = Vec::new();
    let mut challenges = Vec::new();

    if split_pair(a.extraversion, b.extraversion, 60.0, 40.0) {
        growth_areas.push("Social balance - introvert/extrovert dynamic".to_string());
    }

    if split_pair(a.openness, b.openness, 70.0, 50.0) {
        challenges.push("May disagree on trying new experiences".to_string());
    }
    if a.neuroticism > 60.0 && b.neuroticism > 60.0 {
        challenges.push("Both may need extra emotional support".to_string());
    }
    if split_pair(a.conscientiousness, b.conscientiousness, 70.0, 40.0) {
        challenges.push("Different approaches to planning and organization".to_string());
    }
    if is_anxious_avoidant(&a.attachment_style, &b.attachment_style) {
        challenges.push("Classic anxious-avoidant dynamic - requires awareness".to_string());
    }

    let score = NEUTRAL_SCORE + GROWTH_AREA_BONUS * growth_areas.len() as f64
        - CHALLENGE_PENALTY * challenges.len() as f64;

    GrowthAssessment {
        score: score.clamp(0.0, 1.0),
        growth_areas,
        challenges,
    }
}
