use std::time::Duration;

use crate::config::ConfigError;
use crate::profile::ValueKey;

/// Personality needs 9 slots and values 12, both inside the same vector.
pub const MIN_EMBEDDING_DIMENSION: usize = ValueKey::ALL.len();
/// One year.
pub const MAX_EMBEDDING_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingConfig {
    /// Output vector length.
    pub dimension: usize,
    /// Interest ids in `[0, interest_catalog_size)` are encoded; the rest are ignored.
    pub interest_catalog_size: usize,
    /// Lifetime of cached vectors.
    pub ttl: Duration,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimension: 128,
            interest_catalog_size: 100,
            ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl EmbeddingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < MIN_EMBEDDING_DIMENSION {
            return Err(ConfigError::DimensionTooSmall {
                dimension: self.dimension,
                min: MIN_EMBEDDING_DIMENSION,
            });
        }
        if self.interest_catalog_size == 0 {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.ttl.as_secs() == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        if self.ttl > MAX_EMBEDDING_TTL {
            return Err(ConfigError::TtlTooLarge {
                secs: self.ttl.as_secs(),
                max_secs: MAX_EMBEDDING_TTL.as_secs(),
            });
        }
        Ok(())
    }

    /// Catalog slots averaged into one output slot: `ceil(catalog / dimension)`.
    pub fn interest_bucket_size(&self) -> usize {
        self.interest_catalog_size.div_ceil(self.dimension.max(1))
    }
}
