use thiserror::Error;

use crate::search::provider::ProviderError;

/// Engine-level error type.
///
/// The embedding application (HTTP layer, CLI, worker) maps these onto its own
/// status codes; the engine only distinguishes the cases callers must react
/// to differently.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The polled task id is unknown or already past its retention window.
    /// This is a terminal signal for pollers, not a failure of a live task.
    #[error("Task not found: {0}")]
    TaskNotFound(uuid::Uuid),

    #[error("Job provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
