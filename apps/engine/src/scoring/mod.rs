pub mod analyzer;
pub mod feedback;
pub mod filters;
pub mod relevance;
pub mod weights;

pub use analyzer::{analyze, quick_score, score_batch, AnalysisResult, BatchScore, QuickScore};
pub use filters::HardFilterResult;
pub use relevance::RelevanceScore;
pub use weights::RoleWeights;
