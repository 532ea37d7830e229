pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryEmbeddingCache;

/// Key under which a user's embedding is stored.
pub fn embedding_key(user_id: i64) -> String {
    format!("user_embedding:{user_id}")
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt cache entry for {key}: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("ttl {0:?} is out of range")]
    TtlOutOfRange(Duration),
}

/// Per-user embedding store with expiry. Implementations handle each key
/// independently; there is no cross-key locking.
#[async_trait]
pub trait EmbeddingCache: Send + Sync {
    /// Backend label for logs and readiness output ("memory", "postgres").
    fn name(&self) -> &'static str;

    async fn get(&self, user_id: i64) -> Result<Option<Vec<f32>>, CacheError>;

    async fn set_with_ttl(
        &self,
        user_id: i64,
        vector: &[f32],
        ttl: Duration,
    ) -> Result<(), CacheError>;

    async fn exists(&self, user_id: i64) -> Result<bool, CacheError> {
        Ok(self.get(user_id).await?.is_some())
    }

    /// Removes expired entries, returning how many were dropped.
    async fn purge_expired(&self) -> Result<u64, CacheError>;
}
