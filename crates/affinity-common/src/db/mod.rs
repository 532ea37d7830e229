pub mod embedding_cache;
pub mod migrations;
pub mod pool;

pub use embedding_cache::PgEmbeddingCache;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPoolError, PgPool, create_pool_from_url};
