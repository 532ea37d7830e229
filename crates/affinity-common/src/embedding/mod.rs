pub mod config;
pub mod generator;
pub mod service;
pub mod similarity;

pub use config::EmbeddingConfig;
pub use generator::ProfileEmbedder;
pub use service::{EmbeddingService, EmbeddingServiceError, GeneratedEmbedding, SimilarUser};
pub use similarity::cosine_similarity;

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub user_id: i64,
    pub vector: Vec<f32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Embedding {
    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}
