//! Stage 2 — weighted relevance scoring.
//!
//! Six sub-scores in [0, 100], combined via the role-archetype weights.
//! Only computed for candidates that passed the hard filters.

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::models::resume::ResumeProfile;
use crate::scoring::filters;
use crate::skills::SkillAnalysis;
use crate::text;

use super::weights::RoleWeights;

/// Cap on the project-count bonus added to the project similarity score.
const PROJECT_COUNT_BONUS_CAP: f64 = 20.0;
const PROJECT_COUNT_BONUS_PER_PROJECT: f64 = 5.0;

/// Neutral summary score when the resume has no summary section.
const NEUTRAL_SUMMARY_SCORE: f64 = 50.0;

/// The six sub-scores, the weight set applied, and the weighted total.
/// All values rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub skills: f64,
    pub experience: f64,
    pub projects: f64,
    pub keywords: f64,
    pub summary: f64,
    pub education: f64,
    pub weights: RoleWeights,
    pub weighted_total: f64,
}

/// Computes the weighted relevance of one (resume, job) pair.
/// `skill_analysis` is shared with the caller, which reports it even when the
/// hard filters fail.
pub fn compute_relevance(
    resume: &ResumeProfile,
    job: &JobPosting,
    skill_analysis: &SkillAnalysis,
    weights: RoleWeights,
) -> RelevanceScore {
    let skills = round2(skill_analysis.overall_score);
    let experience = round2(experience_score(resume, job));
    let projects = round2(projects_score(resume, job));
    let keywords = round2(keywords_score(resume, job));
    let summary = round2(summary_score(resume, job));
    let education = round2(education_score(resume, job));

    let weighted_total = round2(
        (skills * weights.skills
            + experience * weights.experience
            + projects * weights.projects
            + keywords * weights.keywords
            + summary * weights.summary
            + education * weights.education)
            .clamp(0.0, 100.0),
    );

    RelevanceScore {
        skills,
        experience,
        projects,
        keywords,
        summary,
        education,
        weights,
        weighted_total,
    }
}

/// 40% years-vs-requirement ratio, 60% similarity of the work history to the
/// description. Capped at 100.
fn experience_score(resume: &ResumeProfile, job: &JobPosting) -> f64 {
    let required = job.min_experience.max(1.0);
    let ratio = (100.0 * resume.years_of_experience / required).min(100.0);
    let history = resume.work_history.join(" ");
    let relevance = text::similarity(&history, &job.description);
    (0.4 * ratio + 0.6 * relevance).min(100.0)
}

/// Project similarity plus a small per-project bonus. 0 without projects.
fn projects_score(resume: &ResumeProfile, job: &JobPosting) -> f64 {
    if resume.projects.is_empty() {
        return 0.0;
    }
    let joined = resume.projects.join(" ");
    let bonus = (PROJECT_COUNT_BONUS_PER_PROJECT * resume.projects.len() as f64)
        .min(PROJECT_COUNT_BONUS_CAP);
    (text::similarity(&joined, &job.description) + bonus).min(100.0)
}

/// How much of the description's vocabulary the whole resume covers.
fn keywords_score(resume: &ResumeProfile, job: &JobPosting) -> f64 {
    text::keyword_overlap(&resume.combined_text(), &job.description).min(100.0)
}

/// Similarity of the summary to the description; neutral 50 with no summary.
fn summary_score(resume: &ResumeProfile, job: &JobPosting) -> f64 {
    match resume.summary.as_deref() {
        Some(summary) if !summary.trim().is_empty() => {
            text::similarity(summary, &job.description)
        }
        _ => NEUTRAL_SUMMARY_SCORE,
    }
}

/// 100 with no requirement; 0 for a blank education history; 100 when the
/// degree-level check passes; 50 otherwise.
fn education_score(resume: &ResumeProfile, job: &JobPosting) -> f64 {
    let has_requirement = job
        .required_education
        .as_deref()
        .map_or(false, |t| !t.trim().is_empty());
    if !has_requirement {
        return 100.0;
    }
    if resume.education.is_empty() && resume.highest_degree.is_none() {
        return 0.0;
    }
    if filters::check_education(resume, job) {
        100.0
    } else {
        50.0
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
