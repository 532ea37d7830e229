pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod embedding;
pub mod logging;
pub mod matching;
pub mod profile;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::ConfigError;
pub use profile::{
    AttachmentStyle, UserProfile, ValidationError, ValueKey, ValueRating, ValueRatings,
};
