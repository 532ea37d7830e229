use std::{cmp::Ordering, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ProfileEmbedder, cosine_similarity};
use crate::cache::{CacheError, EmbeddingCache};
use crate::profile::UserProfile;

#[derive(Debug, Error)]
pub enum EmbeddingServiceError {
    #[error("embedding not found for user {user_id}")]
    NotFound { user_id: i64 },
    #[error("embedding cache unavailable: {0}")]
    Unavailable(String),
}

impl From<CacheError> for EmbeddingServiceError {
    fn from(err: CacheError) -> Self {
        EmbeddingServiceError::Unavailable(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEmbedding {
    pub user_id: i64,
    pub embedding_dim: usize,
    pub cached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarUser {
    pub user_id: i64,
    pub similarity: f32,
}

/// Embedding generation plus the cache-backed lookups. The cache is
/// optional; without one every write reports `cached: false` and every
/// read is `Unavailable`.
#[derive(Clone)]
pub struct EmbeddingService {
    embedder: ProfileEmbedder,
    cache: Option<Arc<dyn EmbeddingCache>>,
}

impl EmbeddingService {
    pub fn new(embedder: ProfileEmbedder, cache: Option<Arc<dyn EmbeddingCache>>) -> Self {
        Self { embedder, cache }
    }

    pub fn embedder(&self) -> &ProfileEmbedder {
        &self.embedder
    }

    /// Backend name, or `"disabled"`.
    pub fn cache_backend(&self) -> &'static str {
        self.cache.as_ref().map(|c| c.name()).unwrap_or("disabled")
    }

    fn cache(&self) -> Result<&Arc<dyn EmbeddingCache>, EmbeddingServiceError> {
        self.cache
            .as_ref()
            .ok_or_else(|| EmbeddingServiceError::Unavailable("no cache configured".into()))
    }

    /// Embeds the profile and stores it. A failed write degrades to
    /// `cached: false` instead of failing the call.
    pub async fn generate(&self, profile: &UserProfile) -> GeneratedEmbedding {
        let embedding = self.embedder.embed(profile);
        let ttl = self.embedder.config().ttl;

        let cached = match &self.cache {
            Some(cache) => match cache
                .set_with_ttl(profile.user_id, &embedding.vector, ttl)
                .await
            {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(
                        user_id = profile.user_id,
                        cache = cache.name(),
                        error = %err,
                        "failed to cache embedding"
                    );
                    false
                }
            },
            None => false,
        };

        tracing::debug!(
            user_id = profile.user_id,
            dimension = embedding.dimension(),
            created_at = %embedding.created_at.to_rfc3339(),
            cached,
            "generated embedding"
        );

        GeneratedEmbedding {
            user_id: profile.user_id,
            embedding_dim: embedding.dimension(),
            cached,
        }
    }

    pub async fn get(&self, user_id: i64) -> Result<Vec<f32>, EmbeddingServiceError> {
        self.cache()?
            .get(user_id)
            .await?
            .ok_or(EmbeddingServiceError::NotFound { user_id })
    }

    /// Brute-force cosine ranking of `candidate_ids` against `user_id`.
    /// Candidates without a cached vector (or whose read fails) are skipped.
    pub async fn find_similar(
        &self,
        user_id: i64,
        candidate_ids: &[i64],
        top_k: usize,
    ) -> Result<Vec<SimilarUser>, EmbeddingServiceError> {
        let cache = self.cache()?;
        let anchor = cache
            .get(user_id)
            .await?
            .ok_or(EmbeddingServiceError::NotFound { user_id })?;

        let mut similar = Vec::with_capacity(candidate_ids.len());
        for &candidate_id in candidate_ids {
            match cache.get(candidate_id).await {
                Ok(Some(vector)) => similar.push(SimilarUser {
                    user_id: candidate_id,
                    similarity: cosine_similarity(&anchor, &vector),
                }),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(
                        user_id,
                        candidate_id,
                        cache = cache.name(),
                        error = %err,
                        "skipping candidate embedding"
                    );
                }
            }
        }

        similar.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        similar.truncate(top_k);
        Ok(similar)
    }

    /// `None` without a cache, otherwise whether a lookup round-trips.
    pub async fn probe_cache(&self) -> Option<bool> {
        let cache = self.cache.as_ref()?;
        Some(cache.exists(0).await.is_ok())
    }

    pub async fn purge_expired(&self) -> Result<u64, EmbeddingServiceError> {
        Ok(self.cache()?.purge_expired().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryEmbeddingCache;
    use crate::fixtures::{profile_a, profile_b, profile_c};
    use async_trait::async_trait;
    use std::time::Duration;

    struct BrokenCache;

    #[async_trait]
    impl EmbeddingCache for BrokenCache {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn get(&self, _user_id: i64) -> Result<Option<Vec<f32>>, CacheError> {
            Err(CacheError::Unavailable("connection refused".into()))
        }

        async fn set_with_ttl(
            &self,
            _user_id: i64,
            _vector: &[f32],
            _ttl: Duration,
        ) -> Result<(), CacheError> {
            Err(CacheError::Unavailable("connection refused".into()))
        }

        async fn purge_expired(&self) -> Result<u64, CacheError> {
            Err(CacheError::Unavailable("connection refused".into()))
        }
    }

    fn memory_service() -> EmbeddingService {
        EmbeddingService::new(
            ProfileEmbedder::default(),
            Some(Arc::new(MemoryEmbeddingCache::new())),
        )
    }

    #[tokio::test]
    async fn generate_then_get() {
        let service = memory_service();

        let generated = service.generate(&profile_a()).await;
        assert_eq!(
            generated,
            GeneratedEmbedding {
                user_id: 1,
                embedding_dim: 128,
                cached: true
            }
        );

        let vector = service.get(1).await.unwrap();
        assert_eq!(vector, service.embedder().embed_vector(&profile_a()));
        assert_eq!(service.cache_backend(), "memory");
    }

    #[tokio::test]
    async fn missing_embedding_is_not_found() {
        let err = memory_service().get(404).await.unwrap_err();
        assert!(matches!(err, EmbeddingServiceError::NotFound { user_id: 404 }));
    }

    #[tokio::test]
    async fn without_cache_reads_are_unavailable_and_writes_uncached() {
        let service = EmbeddingService::new(ProfileEmbedder::default(), None);

        assert!(!service.generate(&profile_a()).await.cached);
        assert!(matches!(
            service.get(1).await,
            Err(EmbeddingServiceError::Unavailable(_))
        ));
        assert!(matches!(
            service.find_similar(1, &[2], 10).await,
            Err(EmbeddingServiceError::Unavailable(_))
        ));
        assert_eq!(service.cache_backend(), "disabled");
        assert_eq!(service.probe_cache().await, None);
    }

    #[tokio::test]
    async fn failing_cache_degrades_generate() {
        let service =
            EmbeddingService::new(ProfileEmbedder::default(), Some(Arc::new(BrokenCache)));

        let generated = service.generate(&profile_b()).await;

        assert!(!generated.cached);
        assert_eq!(generated.embedding_dim, 128);
        assert_eq!(service.probe_cache().await, Some(false));
        assert!(matches!(
            service.get(2).await,
            Err(EmbeddingServiceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn find_similar_ranks_and_skips_uncached() {
        let service = memory_service();
        for profile in [profile_a(), profile_b(), profile_c()] {
            service.generate(&profile).await;
        }

        let similar = service.find_similar(1, &[3, 2, 99], 10).await.unwrap();

        let ids: Vec<i64> = similar.iter().map(|s| s.user_id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(similar[0].similarity >= similar[1].similarity);

        let top_one = service.find_similar(1, &[3, 2], 1).await.unwrap();
        assert_eq!(top_one.len(), 1);
        assert_eq!(top_one[0].user_id, 2);
    }

    #[tokio::test]
    async fn find_similar_requires_anchor_embedding() {
        let service = memory_service();
        service.generate(&profile_b()).await;

        let err = service.find_similar(1, &[2], 5).await.unwrap_err();

        assert!(matches!(err, EmbeddingServiceError::NotFound { user_id: 1 }));
    }
}
