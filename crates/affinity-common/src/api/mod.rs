pub mod compatibility;
pub mod conversation;
pub mod embedding;
pub mod match_request;
pub mod match_response;

pub use compatibility::CompatibilityRequest;
pub use conversation::{ConversationStarterRequest, ConversationStarterResponse};
pub use embedding::{EmbeddingResponse, SimilarUsersRequest, SimilarUsersResponse};
pub use match_request::MatchRequest;
pub use match_response::MatchRecommendation;

pub use crate::embedding::{GeneratedEmbedding, SimilarUser};
pub use crate::matching::CompatibilityResult;
