use super::{Embedding, EmbeddingConfig};
use crate::matching::Weights;
use crate::profile::{UserProfile, ValueKey};

const TRAIT_MIDPOINT: f32 = 50.0;
const ATTACHMENT_SLOTS: usize = 4;
const RATING_SCALE: f64 = 10.0;

/// Deterministic profile -> vector projection. No learned parameters.
///
/// Three sub-vectors of the configured dimension are blended with the
/// compatibility weights (personality, values, and the lifestyle weight for
/// interests) and L2-normalized. An all-zero blend is returned as is.
#[derive(Debug, Clone)]
pub struct ProfileEmbedder {
    config: EmbeddingConfig,
    weights: Weights,
}

impl ProfileEmbedder {
    pub fn new(config: EmbeddingConfig, weights: Weights) -> Self {
        Self { config, weights }
    }

    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Big Five in [-1, 1] followed by a one-hot attachment style.
    pub fn personality_vector(&self, profile: &UserProfile) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.config.dimension];

        let big_five = profile
            .big_five()
            .map(|t| (t as f32 - TRAIT_MIDPOINT) / TRAIT_MIDPOINT);
        for (slot, value) in vector.iter_mut().zip(big_five) {
            *slot = value;
        }

        if let Some(index) = profile.attachment_style.one_hot_index() {
            let offset = big_five.len() + index;
            debug_assert!(index < ATTACHMENT_SLOTS);
            if let Some(slot) = vector.get_mut(offset) {
                *slot = 1.0;
            }
        }

        vector
    }

    /// One-hot over the interest catalog, averaged down into fixed buckets.
    pub fn interest_vector(&self, interests: &[i64]) -> Vec<f32> {
        let catalog_size = self.config.interest_catalog_size;
        let mut catalog = vec![0.0f32; catalog_size];
        for &id in interests {
            if let Ok(index) = usize::try_from(id) {
                if let Some(slot) = catalog.get_mut(index) {
                    *slot = 1.0;
                }
            }
        }

        let bucket = self.config.interest_bucket_size().max(1);
        (0..self.config.dimension)
            .map(|i| {
                let start = i * bucket;
                if start >= catalog_size {
                    return 0.0;
                }
                let end = (start + bucket).min(catalog_size);
                let window = &catalog[start..end];
                window.iter().sum::<f32>() / window.len() as f32
            })
            .collect()
    }

    /// Recognized value keys in fixed order, clamped to 0-10 and rescaled to 0-1.
    /// Only JSON numbers count; anything else leaves the slot at zero.
    pub fn values_vector(&self, profile: &UserProfile) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.config.dimension];
        for (slot, key) in vector.iter_mut().zip(ValueKey::ALL) {
            if let Some(rating) = profile.values.get(key.as_str()).and_then(|r| r.as_number()) {
                *slot = (rating.clamp(0.0, RATING_SCALE) / RATING_SCALE) as f32;
            }
        }
        vector
    }

    pub fn embed_vector(&self, profile: &UserProfile) -> Vec<f32> {
        let personality = self.personality_vector(profile);
        let values = self.values_vector(profile);
        let interests = self.interest_vector(&profile.interests);

        let (wp, wv, wi) = (
            self.weights.personality as f32,
            self.weights.values as f32,
            self.weights.lifestyle as f32,
        );
        let mut combined: Vec<f32> = personality
            .iter()
            .zip(&values)
            .zip(&interests)
            .map(|((p, v), i)| wp * p + wv * v + wi * i)
            .collect();

        let norm = combined
            .iter()
            .map(|x| f64::from(*x).powi(2))
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for v in &mut combined {
                *v = (f64::from(*v) / norm) as f32;
            }
        }
        combined
    }

    pub fn embed(&self, profile: &UserProfile) -> Embedding {
        Embedding {
            user_id: profile.user_id,
            vector: self.embed_vector(profile),
            created_at: chrono::Utc::now(),
        }
    }
}

impl Default for ProfileEmbedder {
    fn default() -> Self {
        Self::new(EmbeddingConfig::default(), Weights::default())
    }
}
