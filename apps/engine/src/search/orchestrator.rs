//! Job-Search Orchestrator — runs one search-and-score task per request.
//!
//! The submitting caller gets a task id back immediately; the run itself is a
//! fire-and-forget background routine that owns the task record. Pollers read
//! snapshots through the store and stop when `completed` flips.
//!
//! Concurrency contract: scoring within a batch fans out in parallel; batches
//! are sequential, so at most `SCORING_BATCH_SIZE` scoring calls (and one
//! provider call) are in flight per task. There is no cancellation; a task
//! runs to a terminal state and is purged after the retention window.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeProfile;
use crate::scoring::{self, RoleWeights};

use super::provider::{JobProvider, SearchQuery};
use super::store::TaskStore;
use super::task::{ScoredJob, SearchGuidance, SearchTask, TaskStatus};

/// At most this many postings are scored per search.
pub const MAX_JOBS_PER_SEARCH: usize = 20;

/// Postings scored concurrently before the next batch starts.
pub const SCORING_BATCH_SIZE: usize = 3;

/// How long a terminal task remains pollable.
pub const TASK_RETENTION: Duration = Duration::from_secs(5 * 60);

/// One search submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
    #[serde(default)]
    pub location: String,
    pub company: Option<String>,
    pub platform: Option<String>,
    pub experience_level: Option<String>,
    /// Absent resume: postings are returned unscored.
    pub resume: Option<ResumeProfile>,
    pub custom_weights: Option<RoleWeights>,
}

/// Orchestrates search tasks over the provider and store seams.
pub struct SearchOrchestrator {
    provider: Arc<dyn JobProvider>,
    store: Arc<dyn TaskStore>,
    retention: Duration,
}

impl SearchOrchestrator {
    pub fn new(provider: Arc<dyn JobProvider>, store: Arc<dyn TaskStore>) -> Self {
        Self::with_retention(provider, store, TASK_RETENTION)
    }

    /// Retention override for embedders (and tests) that want faster purges.
    pub fn with_retention(
        provider: Arc<dyn JobProvider>,
        store: Arc<dyn TaskStore>,
        retention: Duration,
    ) -> Self {
        Self {
            provider,
            store,
            retention,
        }
    }

    /// Creates the task record and hands the run to a background routine.
    /// Returns the task id without waiting for any search or scoring work.
    pub async fn start_search(&self, request: SearchRequest) -> Result<Uuid, EngineError> {
        if request.keyword.trim().is_empty() {
            return Err(EngineError::Validation(
                "Search keyword cannot be empty".to_string(),
            ));
        }

        let task = SearchTask::new(Uuid::new_v4());
        let id = task.id;
        self.store.put(task).await;
        info!(task_id = %id, keyword = %request.keyword, "search task created");

        let provider = Arc::clone(&self.provider);
        let store = Arc::clone(&self.store);
        let retention = self.retention;
        tokio::spawn(async move {
            run_search(provider, Arc::clone(&store), id, request).await;
            // Retention window, then purge. Pollers see "not found" after this.
            tokio::time::sleep(retention).await;
            store.remove(id).await;
        });

        Ok(id)
    }

    /// Read-only snapshot of a task. A missing id means the task never
    /// existed or was purged after its retention window.
    pub async fn poll(&self, id: Uuid) -> Result<SearchTask, EngineError> {
        self.store.get(id).await.ok_or(EngineError::TaskNotFound(id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Background run
// ────────────────────────────────────────────────────────────────────────────

/// Drives one task from `Searching` to a terminal state. Only this routine
/// mutates the task record.
async fn run_search(
    provider: Arc<dyn JobProvider>,
    store: Arc<dyn TaskStore>,
    id: Uuid,
    request: SearchRequest,
) {
    let mut task = match store.get(id).await {
        Some(task) => task,
        None => return, // purged before the run started; nothing to do
    };

    let query = SearchQuery {
        keyword: request.keyword.clone(),
        location: request.location.clone(),
        experience_hint: request.experience_level.clone(),
        page: 1,
        page_count: 1,
        company: request.company.clone(),
        platform: request.platform.clone(),
    };

    // The initial fetch is the only fatal step: with no postings there is
    // nothing to score.
    let postings = match provider.search(&query).await {
        Ok(postings) => postings,
        Err(e) => {
            warn!(task_id = %id, error = %e, "provider fetch failed");
            task.fail(e.to_string());
            store.put(task).await;
            return;
        }
    };

    if postings.is_empty() {
        info!(task_id = %id, "no postings found; finalizing with guidance");
        task.status = TaskStatus::Completed;
        task.completed = true;
        task.progress = 100;
        task.guidance = Some(build_guidance(&request));
        store.put(task).await;
        return;
    }

    let resume = match request.resume {
        Some(resume) => resume,
        None => {
            // No resume to score against: return the postings as-is.
            task.total_jobs = postings.len();
            task.processed_jobs = postings.len();
            task.jobs = postings
                .into_iter()
                .map(|job| ScoredJob {
                    job,
                    score: None,
                    analysis: None,
                })
                .collect();
            task.status = TaskStatus::Completed;
            task.completed = true;
            task.progress = 100;
            store.put(task).await;
            return;
        }
    };

    let mut postings = postings;
    postings.truncate(MAX_JOBS_PER_SEARCH);
    task.status = TaskStatus::Analyzing;
    task.total_jobs = postings.len();
    store.put(task.clone()).await;

    let resume = Arc::new(resume);
    for batch in postings.chunks(SCORING_BATCH_SIZE) {
        let scored = score_batch_concurrently(&resume, batch, request.custom_weights).await;

        task.jobs.extend(scored);
        task.processed_jobs += batch.len();
        task.progress = ((task.processed_jobs * 100) / task.total_jobs) as u8;
        store.put(task.clone()).await;
    }

    // Best matches first; unscored postings sink to the bottom.
    task.jobs.sort_by(|a, b| {
        b.score
            .unwrap_or(0.0)
            .partial_cmp(&a.score.unwrap_or(0.0))
            .unwrap_or(Ordering::Equal)
    });
    task.status = TaskStatus::Completed;
    task.completed = true;
    task.ats_analyzed = true;
    task.progress = 100;
    info!(task_id = %id, jobs = task.jobs.len(), "search task completed");
    store.put(task).await;
}

/// Scores one batch with a parallel fan-out and an explicit join. A per-job
/// failure (or panic) records a null score and never aborts the batch.
async fn score_batch_concurrently(
    resume: &Arc<ResumeProfile>,
    batch: &[JobPosting],
    custom_weights: Option<RoleWeights>,
) -> Vec<ScoredJob> {
    let mut set = JoinSet::new();
    for (index, job) in batch.iter().cloned().enumerate() {
        let resume = Arc::clone(resume);
        set.spawn(async move {
            let analysis = scoring::analyze(&resume, &job, custom_weights);
            (index, job, analysis)
        });
    }

    let mut scored: Vec<Option<ScoredJob>> = (0..batch.len()).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, job, Ok(analysis))) => {
                scored[index] = Some(ScoredJob {
                    job,
                    score: Some(analysis.overall_match_pct),
                    analysis: Some(analysis),
                });
            }
            Ok((index, job, Err(e))) => {
                warn!(company = %job.company, title = %job.title, error = %e,
                    "scoring failed for posting; recording null score");
                scored[index] = Some(ScoredJob {
                    job,
                    score: None,
                    analysis: None,
                });
            }
            Err(join_error) => {
                // A panicked scoring task loses its slot; the posting is
                // backfilled below with a null score.
                warn!(error = %join_error, "scoring task panicked");
            }
        }
    }

    scored
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| ScoredJob {
                job: batch[index].clone(),
                score: None,
                analysis: None,
            })
        })
        .collect()
}

/// Actionable alternatives for a zero-result search.
fn build_guidance(request: &SearchRequest) -> SearchGuidance {
    let mut suggestions = vec![format!(
        "Try a broader search term than \"{}\"",
        request.keyword.trim()
    )];
    if !request.location.trim().is_empty() {
        suggestions.push(format!(
            "Search without the \"{}\" location filter, or include remote roles",
            request.location.trim()
        ));
    }
    if let Some(company) = request.company.as_deref() {
        suggestions.push(format!("Remove the \"{company}\" company filter"));
    }
    if request.platform.is_some() {
        suggestions.push("Try searching across all platforms".to_string());
    }
    suggestions.push("Try alternate titles for the same role".to_string());

    SearchGuidance {
        message: "No jobs matched this search.".to_string(),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
