//! Relevance Scorer — the two-stage analysis entry points.
//!
//! `analyze` runs the full pipeline (hard filters, then weighted relevance)
//! for one (resume, job) pair. `quick_score` is the cheap bulk-ranking
//! variant: skill and keyword overlap only, no eligibility gates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeProfile;
use crate::skills::{self, SkillAnalysis};
use crate::text;

use super::feedback::{build_feedback, build_recommendations};
use super::filters::{evaluate_hard_filters, HardFilterResult};
use super::relevance::{compute_relevance, round2, RelevanceScore};
use super::weights::{is_manager_role, weights_for_role, RoleWeights};

/// Batch scoring refuses more jobs than this in one call.
pub const MAX_BATCH_SIZE: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// Full analysis of one (resume, job) pair. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub hard_filters: HardFilterResult,
    /// Present only when the hard filters passed.
    pub relevance: Option<RelevanceScore>,
    /// The weighted total, or 0 when the hard filters rejected the candidate.
    pub overall_match_pct: f64,
    /// Always computed, even on hard-filter failure, so callers can show
    /// which skills matched regardless of eligibility.
    pub skill_analysis: SkillAnalysis,
    pub feedback: String,
    pub recommendations: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
    pub role_type: Option<String>,
}

/// Output of the quick-scoring path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickScore {
    /// 0.6 * overall skill score + 0.4 * keyword overlap, rounded.
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_match_pct: f64,
    pub keyword_match_pct: f64,
}

/// One slot of a batch-scoring response: either a score or that item's error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchScore {
    pub score: Option<QuickScore>,
    pub error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Full analysis
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full two-stage analysis.
///
/// The skill analysis is computed even when the hard filters fail; the
/// weighted relevance is not. Postings without a structured required-skill
/// list get one inferred from the description.
pub fn analyze(
    resume: &ResumeProfile,
    job: &JobPosting,
    custom_weights: Option<RoleWeights>,
) -> Result<AnalysisResult, EngineError> {
    validate_inputs(resume, job)?;

    let required_skills = effective_required_skills(job);
    let skill_analysis =
        skills::match_skills(&resume.skills, &required_skills, &job.preferred_skills);

    let hard_filters = evaluate_hard_filters(resume, job);
    let weights =
        custom_weights.unwrap_or_else(|| weights_for_role(job.role_type.as_deref()));

    let relevance = if hard_filters.passed {
        Some(compute_relevance(resume, job, &skill_analysis, weights))
    } else {
        debug!(
            company = %job.company,
            title = %job.title,
            reasons = ?hard_filters.failure_reasons,
            "hard filters rejected candidate"
        );
        None
    };
    let overall_match_pct = relevance.as_ref().map_or(0.0, |r| r.weighted_total);

    let feedback = build_feedback(&hard_filters, relevance.as_ref(), &skill_analysis);
    let recommendations = build_recommendations(
        resume,
        relevance.as_ref(),
        &skill_analysis,
        is_manager_role(job.role_type.as_deref()),
    );

    Ok(AnalysisResult {
        hard_filters,
        relevance,
        overall_match_pct,
        skill_analysis,
        feedback,
        recommendations,
        analyzed_at: Utc::now(),
        role_type: job.role_type.clone(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Quick scoring
// ────────────────────────────────────────────────────────────────────────────

/// Cheap ranking score with no hard filters: an ineligible candidate can
/// still rank high here. Eligibility is `analyze`'s job.
pub fn quick_score(resume: &ResumeProfile, job: &JobPosting) -> Result<QuickScore, EngineError> {
    validate_inputs(resume, job)?;

    let required_skills = effective_required_skills(job);
    let analysis = skills::match_skills(&resume.skills, &required_skills, &job.preferred_skills);
    let keyword_match_pct = round2(text::keyword_overlap(
        &resume.combined_text(),
        &job.description,
    ));

    let mut matched_skills = analysis.matched_required.clone();
    matched_skills.extend(analysis.matched_preferred.iter().cloned());
    let mut missing_skills = analysis.missing_required.clone();
    missing_skills.extend(analysis.missing_preferred.iter().cloned());

    Ok(QuickScore {
        score: round2(0.6 * analysis.overall_score + 0.4 * keyword_match_pct),
        matched_skills,
        missing_skills,
        skill_match_pct: analysis.overall_score,
        keyword_match_pct,
    })
}

/// Quick-scores up to [`MAX_BATCH_SIZE`] jobs. A failing item is reported in
/// its slot and never aborts the rest.
pub fn score_batch(
    resume: &ResumeProfile,
    jobs: &[JobPosting],
) -> Result<Vec<BatchScore>, EngineError> {
    if jobs.len() > MAX_BATCH_SIZE {
        return Err(EngineError::Validation(format!(
            "Batch size {} exceeds the maximum of {MAX_BATCH_SIZE}",
            jobs.len()
        )));
    }
    Ok(jobs
        .iter()
        .map(|job| match quick_score(resume, job) {
            Ok(score) => BatchScore {
                score: Some(score),
                error: None,
            },
            Err(e) => BatchScore {
                score: None,
                error: Some(e.to_string()),
            },
        })
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn validate_inputs(resume: &ResumeProfile, job: &JobPosting) -> Result<(), EngineError> {
    if resume.is_empty() {
        return Err(EngineError::Validation(
            "Resume has no scoreable content".to_string(),
        ));
    }
    if job.description.trim().is_empty() {
        return Err(EngineError::Validation(
            "Job description is empty".to_string(),
        ));
    }
    Ok(())
}

/// The structured required-skill list, or one inferred from the description.
fn effective_required_skills(job: &JobPosting) -> Vec<String> {
    if !job.required_skills.is_empty() {
        return job.required_skills.clone();
    }
    skills::extract_skills_from_text(&job.description)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_resume() -> ResumeProfile {
        ResumeProfile {
            skills: vec!["rust".to_string(), "postgresql".to_string()],
            work_history: vec!["Four years building rust services".to_string()],
            projects: vec!["A rust web crawler".to_string()],
            summary: Some("Backend engineer working in rust".to_string()),
            years_of_experience: 4.0,
            highest_degree: Some("B.Tech".to_string()),
            education: vec!["B.Tech in Computer Science".to_string()],
            work_authorization: Some("US citizen".to_string()),
            certifications: vec![],
        }
    }

    fn make_job() -> JobPosting {
        JobPosting {
            title: "Rust Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "Backend services in rust with postgresql and kafka".to_string(),
            required_skills: vec!["rust".to_string(), "postgresql".to_string()],
            preferred_skills: vec!["kafka".to_string()],
            min_experience: 3.0,
            role_type: Some("software engineer".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_passing_candidate_has_relevance() {
        let result = analyze(&make_resume(), &make_job(), None).unwrap();
        assert!(result.hard_filters.passed);
        let relevance = result.relevance.expect("relevance present when filters pass");
        assert_eq!(result.overall_match_pct, relevance.weighted_total);
        assert!(!result.feedback.is_empty());
    }

    #[test]
    fn test_analyze_failed_filters_omits_relevance_but_keeps_skills() {
        let mut job = make_job();
        job.min_experience = 15.0;
        let result = analyze(&make_resume(), &job, None).unwrap();
        assert!(!result.hard_filters.passed);
        assert!(result.relevance.is_none());
        assert_eq!(result.overall_match_pct, 0.0);
        // Skill analysis is still reported.
        assert!(!result.skill_analysis.matched_required.is_empty());
        assert!(result.feedback.contains("not a match"));
    }

    #[test]
    fn test_analyze_min_experience_zero_passes_regardless() {
        let mut job = make_job();
        job.min_experience = 0.0;
        let mut resume = make_resume();
        resume.years_of_experience = 0.0;
        let result = analyze(&resume, &job, None).unwrap();
        assert!(result.hard_filters.passed);
    }

    #[test]
    fn test_analyze_rejects_empty_resume() {
        let result = analyze(&ResumeProfile::default(), &make_job(), None);
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_analyze_rejects_empty_description() {
        let mut job = make_job();
        job.description = "  ".to_string();
        let result = analyze(&make_resume(), &job, None);
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_analyze_is_deterministic_except_timestamp() {
        let resume = make_resume();
        let job = make_job();
        let first = analyze(&resume, &job, None).unwrap();
        let second = analyze(&resume, &job, None).unwrap();
        assert_eq!(first.overall_match_pct, second.overall_match_pct);
        assert_eq!(first.feedback, second.feedback);
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(
            first.skill_analysis.matched_required,
            second.skill_analysis.matched_required
        );
    }

    #[test]
    fn test_analyze_custom_weights_override_role_lookup() {
        let custom = RoleWeights {
            skills: 1.0,
            experience: 0.0,
            projects: 0.0,
            keywords: 0.0,
            summary: 0.0,
            education: 0.0,
        };
        let result = analyze(&make_resume(), &make_job(), Some(custom)).unwrap();
        let relevance = result.relevance.unwrap();
        assert_eq!(relevance.weighted_total, relevance.skills);
    }

    #[test]
    fn test_analyze_infers_required_skills_from_description() {
        let mut job = make_job();
        job.required_skills.clear();
        job.preferred_skills.clear();
        let result = analyze(&make_resume(), &job, None).unwrap();
        // "rust", "postgresql" and "kafka" are in the technical vocabulary.
        assert!(result
            .skill_analysis
            .matched_required
            .contains(&"rust".to_string()));
        assert!(result
            .skill_analysis
            .missing_required
            .contains(&"kafka".to_string()));
    }

    #[test]
    fn test_quick_score_combines_skill_and_keyword_signals() {
        let quick = quick_score(&make_resume(), &make_job()).unwrap();
        assert!(quick.score > 0.0);
        assert!(quick.score <= 100.0);
        let expected = round2(0.6 * quick.skill_match_pct + 0.4 * quick.keyword_match_pct);
        assert!((quick.score - expected).abs() < 1e-9);
        assert!(quick.matched_skills.contains(&"rust".to_string()));
    }

    #[test]
    fn test_quick_score_applies_no_hard_filters() {
        let mut job = make_job();
        job.min_experience = 15.0; // would fail analyze's experience gate
        let quick = quick_score(&make_resume(), &job).unwrap();
        assert!(quick.score > 0.0);
    }

    #[test]
    fn test_score_batch_isolates_per_item_errors() {
        let good = make_job();
        let mut bad = make_job();
        bad.description = String::new();
        let results = score_batch(&make_resume(), &[good.clone(), bad, good]).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results[0].score.is_some());
        assert!(results[1].score.is_none());
        assert!(results[1].error.is_some());
        assert!(results[2].score.is_some());
    }

    #[test]
    fn test_score_batch_rejects_oversized_input() {
        let jobs: Vec<JobPosting> = (0..MAX_BATCH_SIZE + 1).map(|_| make_job()).collect();
        let result = score_batch(&make_resume(), &jobs);
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }
}
