pub mod compatibility;
pub mod embeddings;
pub mod health;
pub mod matches;
pub mod starters;
