pub mod attraction;
pub mod explanation;
pub mod lifestyle;
pub mod location;
pub mod personality;
pub mod pipeline;
pub mod scoring;
pub mod starters;
pub mod values;
pub mod weights;

pub use pipeline::{MatchingEngine, RankedCandidate};
pub use scoring::{
    CompatibilityBreakdown, CompatibilityEngine, CompatibilityResult, DimensionScore,
    MatchingConfig,
};
pub use starters::conversation_starters;
pub use weights::{DEFAULT_WEIGHTS, Weights};
