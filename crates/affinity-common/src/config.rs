use thiserror::Error;

/// Startup configuration failures. The binary logs these and exits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("weight `{name}` must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("all compatibility weights are zero")]
    ZeroWeights,
    #[error("embedding dimension {dimension} is below the minimum of {min}")]
    DimensionTooSmall { dimension: usize, min: usize },
    #[error("interest catalog size must be positive")]
    EmptyCatalog,
    #[error("embedding ttl must be at least one second")]
    ZeroTtl,
    #[error("embedding ttl of {secs}s exceeds the maximum of {max_secs}s")]
    TtlTooLarge { secs: u64, max_secs: u64 },
    #[error("DATABASE_URL is required for the postgres cache backend")]
    MissingDatabaseUrl,
    #[error("CORS origins must be listed explicitly, `*` is not allowed")]
    WildcardCorsOrigin,
}
