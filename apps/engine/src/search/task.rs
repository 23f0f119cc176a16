//! Task record for one asynchronous search-and-score run.
//!
//! A `SearchTask` is created when a search is submitted, mutated only by the
//! background routine that owns its id, and read by polling callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::scoring::AnalysisResult;

/// Lifecycle of a search task. `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Searching,
    Analyzing,
    Completed,
    Failed,
}

/// Returned instead of scores when a search finds nothing, so a zero-result
/// run never looks like an empty success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchGuidance {
    pub message: String,
    /// At least one actionable suggestion.
    pub suggestions: Vec<String>,
}

/// One posting with its analysis outcome. `score` is absent for unscored
/// runs (no resume supplied) and for postings whose scoring failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub job: JobPosting,
    pub score: Option<f64>,
    pub analysis: Option<AnalysisResult>,
}

/// The pollable record of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTask {
    pub id: Uuid,
    pub status: TaskStatus,
    /// processed / total, as an integer percentage. Non-decreasing.
    pub progress: u8,
    pub total_jobs: usize,
    pub processed_jobs: usize,
    pub jobs: Vec<ScoredJob>,
    /// True once the task is terminal (completed OR failed), so pollers can
    /// stop waiting without inspecting the status.
    pub completed: bool,
    /// True when the accumulated jobs were scored against a resume.
    pub ats_analyzed: bool,
    pub error: Option<String>,
    pub guidance: Option<SearchGuidance>,
    pub created_at: DateTime<Utc>,
}

impl SearchTask {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            status: TaskStatus::Searching,
            progress: 0,
            total_jobs: 0,
            processed_jobs: 0,
            jobs: Vec::new(),
            completed: false,
            ats_analyzed: false,
            error: None,
            guidance: None,
            created_at: Utc::now(),
        }
    }

    /// Marks the task terminally failed. Pollers observe `completed = true`.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = TaskStatus::Failed;
        self.error = Some(message.into());
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_starts_searching() {
        let task = SearchTask::new(Uuid::new_v4());
        assert_eq!(task.status, TaskStatus::Searching);
        assert_eq!(task.progress, 0);
        assert!(!task.completed);
        assert!(task.jobs.is_empty());
    }

    #[test]
    fn test_fail_is_terminal() {
        let mut task = SearchTask::new(Uuid::new_v4());
        task.fail("provider unreachable");
        assert_eq!(task.status, TaskStatus::Failed);
        assert!(task.completed);
        assert_eq!(task.error.as_deref(), Some("provider unreachable"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Analyzing).unwrap(),
            "\"analyzing\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
