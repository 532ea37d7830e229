use serde::{Deserialize, Serialize};

use super::{
    attraction::{GrowthAssessment, assess_growth, score_attraction},
    explanation::compose_explanation,
    lifestyle::score_lifestyle,
    location::score_circumstantial,
    personality::score_personality,
    values::score_values,
    weights::{DEFAULT_WEIGHTS, Weights},
};
use crate::{
    config::ConfigError,
    profile::{UserProfile, ValidationError},
};

/// Score used whenever a dimension has nothing to compare.
pub const NEUTRAL_SCORE: f64 = 0.5;
pub const MAX_TOP_COMPATIBILITIES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    pub weights: Weights,
    /// Below this distance a pair gets the "Live nearby" tag.
    pub nearby_distance_km: f64,
    /// Largest age gap tagged "Similar age".
    pub similar_age_gap: u32,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            nearby_distance_km: 25.0,
            similar_age_gap: 3,
        }
    }
}

impl MatchingConfig {
    pub fn with_weights(weights: Weights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }
}

/// One dimension's score in [0, 1] plus the tags that justify it.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub score: f64,
    pub evidence: Vec<String>,
}

impl DimensionScore {
    pub fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            evidence: Vec::new(),
        }
    }

    /// Mean of `terms`, or neutral when there are none.
    pub fn from_terms(terms: &[f64], evidence: Vec<String>) -> Self {
        let score = if terms.is_empty() {
            NEUTRAL_SCORE
        } else {
            terms.iter().sum::<f64>() / terms.len() as f64
        };
        Self { score, evidence }
    }
}

/// Raw (0..1) output of every scorer for one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityBreakdown {
    pub personality: DimensionScore,
    pub values: DimensionScore,
    pub lifestyle: DimensionScore,
    pub circumstantial: DimensionScore,
    pub attraction: f64,
    pub growth: GrowthAssessment,
    pub overall: f64,
}

impl CompatibilityBreakdown {
    /// Personality, values, lifestyle then circumstantial evidence, first five.
    pub fn top_compatibilities(&self) -> Vec<String> {
        [
            &self.personality,
            &self.values,
            &self.lifestyle,
            &self.circumstantial,
        ]
        .into_iter()
        .flat_map(|dimension| dimension.evidence.iter().cloned())
        .take(MAX_TOP_COMPATIBILITIES)
        .collect()
    }
}

/// Wire-format result: every score is 0-100 with one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub values_score: f64,
    pub lifestyle_score: f64,
    pub personality_score: f64,
    pub attraction_score: f64,
    pub circumstantial_score: f64,
    pub growth_score: f64,
    pub overall_score: f64,
    pub top_compatibilities: Vec<String>,
    pub potential_challenges: Vec<String>,
    pub explanation: String,
}

/// 0..1 -> 0..100, clamped, rounded to one decimal.
pub fn to_percent(score: f64) -> f64 {
    let percent = (score * 100.0).clamp(0.0, 100.0);
    (percent * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    config: MatchingConfig,
}

impl CompatibilityEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Runs all six scorers and the weighted blend. Growth is not weighted.
    pub fn evaluate(&self, a: &UserProfile, b: &UserProfile) -> CompatibilityBreakdown {
        let personality = score_personality(a, b);
        let values = score_values(a, b);
        let lifestyle = score_lifestyle(a, b);
        let circumstantial = score_circumstantial(a, b, &self.config);
        let attraction = score_attraction(a, b);
        let growth = assess_growth(a, b);

        let w = self.config.weights;
        let overall = w.personality * personality.score
            + w.values * values.score
            + w.lifestyle * lifestyle.score
            + w.attraction * attraction
            + w.circumstantial * circumstantial.score;

        CompatibilityBreakdown {
            personality,
            values,
            lifestyle,
            circumstantial,
            attraction,
            growth,
            overall,
        }
    }

    pub fn compute(&self, a: &UserProfile, b: &UserProfile) -> CompatibilityResult {
        let breakdown = self.evaluate(a, b);
        let top_compatibilities = breakdown.top_compatibilities();
        let explanation = compose_explanation(&breakdown, &top_compatibilities);

        CompatibilityResult {
            values_score: to_percent(breakdown.values.score),
            lifestyle_score: to_percent(breakdown.lifestyle.score),
            personality_score: to_percent(breakdown.personality.score),
            attraction_score: to_percent(breakdown.attraction),
            circumstantial_score: to_percent(breakdown.circumstantial.score),
            growth_score: to_percent(breakdown.growth.score),
            overall_score: to_percent(breakdown.overall),
            top_compatibilities,
            potential_challenges: breakdown.growth.challenges,
            explanation,
        }
    }

    /// `compute` behind boundary validation of both profiles.
    pub fn try_compute(
        &self,
        a: &UserProfile,
        b: &UserProfile,
    ) -> Result<CompatibilityResult, ValidationError> {
        a.validate()?;
        b.validate()?;
        Ok(self.compute(a, b))
    }
}
