//! Resume-to-job relevance engine.
//!
//! Two halves:
//! - the deterministic scoring pipeline (`text` → `skills` → `scoring`):
//!   hard eligibility filters, weighted relevance, and human-readable
//!   feedback for one (resume, job) pair;
//! - the asynchronous search orchestrator (`search`): fans the scorer out
//!   over provider results in bounded batches and exposes a pollable task
//!   record per search.
//!
//! The HTTP surface, auth, and persistence live in the embedding
//! application; this crate exposes the caller contract as plain async Rust.

pub mod config;
pub mod errors;
pub mod models;
pub mod scoring;
pub mod search;
pub mod skills;
pub mod text;

pub use config::Config;
pub use errors::EngineError;
pub use models::job::JobPosting;
pub use models::resume::ResumeProfile;
pub use scoring::{analyze, quick_score, score_batch, AnalysisResult, QuickScore, RoleWeights};
pub use search::{
    HttpJobProvider, InMemoryTaskStore, JobProvider, SearchOrchestrator, SearchRequest,
    SearchTask, TaskStatus,
};
