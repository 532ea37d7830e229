use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::time::Instant;

use super::{CacheError, EmbeddingCache, embedding_key};

#[derive(Debug, Clone)]
struct CacheEntry {
    vector: Vec<f32>,
    expires_at: Instant,
}

/// Process-local cache. Expired entries read as absent and are evicted on
/// access.
#[derive(Debug, Default)]
pub struct MemoryEmbeddingCache {
    entries: DashMap<i64, CacheEntry>,
}

impl MemoryEmbeddingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entries only.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| e.expires_at > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EmbeddingCache for MemoryEmbeddingCache {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, user_id: i64) -> Result<Option<Vec<f32>>, CacheError> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(&user_id) {
            if entry.expires_at > now {
                return Ok(Some(entry.vector.clone()));
            }
        }

        if self
            .entries
            .remove_if(&user_id, |_, entry| entry.expires_at <= now)
            .is_some()
        {
            tracing::debug!(key = %embedding_key(user_id), "evicted expired embedding");
        }
        Ok(None)
    }

    async fn set_with_ttl(
        &self,
        user_id: i64,
        vector: &[f32],
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or(CacheError::TtlOutOfRange(ttl))?;
        self.entries.insert(
            user_id,
            CacheEntry {
                vector: vector.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, CacheError> {
        let now = Instant::now();
        let mut removed = 0u64;
        self.entries.retain(|_, entry| {
            let live = entry.expires_at > now;
            if !live {
                removed += 1;
            }
            live
        });
        Ok(removed)
    }
}
