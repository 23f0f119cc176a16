//! Stage 1 — hard eligibility filters.
//!
//! All four checks are always evaluated (no short-circuiting) so the caller
//! can report every failed gate at once. Failing any gate excludes the
//! candidate from weighted scoring.

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::models::resume::ResumeProfile;
use crate::scoring::weights::{
    degree_level, ENTRY_LEVEL_MAX_EXPERIENCE, MIN_EXPERIENCE_RATIO, WORK_AUTH_KEYWORDS,
};

/// Outcome of the hard-filter stage. `passed` is the AND of the four checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardFilterResult {
    pub passed: bool,
    pub location_ok: bool,
    pub work_authorization_ok: bool,
    pub experience_ok: bool,
    pub education_ok: bool,
    /// Human-readable reasons for each failed check, in check order.
    /// The location check never contributes one.
    pub failure_reasons: Vec<String>,
}

/// Runs all four hard filters for one (resume, job) pair.
pub fn evaluate_hard_filters(resume: &ResumeProfile, job: &JobPosting) -> HardFilterResult {
    // Location filtering is disabled; every posting passes this check.
    let location_ok = true;

    let work_authorization_ok = check_work_authorization(resume, job);
    let experience_ok = check_experience(resume, job);
    let education_ok = check_education(resume, job);

    let mut failure_reasons = Vec::new();
    if !work_authorization_ok {
        failure_reasons.push(format!(
            "The posting at {} has work-authorization requirements your profile does not mention",
            job.company
        ));
    }
    if !experience_ok {
        failure_reasons.push(format!(
            "Requires {:.0}+ years of experience; your profile lists {:.1}",
            job.min_experience, resume.years_of_experience
        ));
    }
    if !education_ok {
        failure_reasons.push(format!(
            "Education requirement not met: {}",
            job.required_education.as_deref().unwrap_or_default()
        ));
    }

    HardFilterResult {
        passed: location_ok && work_authorization_ok && experience_ok && education_ok,
        location_ok,
        work_authorization_ok,
        experience_ok,
        education_ok,
        failure_reasons,
    }
}

/// Passes unless the description mentions a work-authorization phrase the
/// resume's authorization text does not answer.
fn check_work_authorization(resume: &ResumeProfile, job: &JobPosting) -> bool {
    let description = job.description.to_lowercase();
    let job_mentions = WORK_AUTH_KEYWORDS.iter().any(|kw| description.contains(kw));
    if !job_mentions {
        return true;
    }
    let authorization = match &resume.work_authorization {
        Some(text) => text.to_lowercase(),
        None => return false,
    };
    WORK_AUTH_KEYWORDS.iter().any(|kw| authorization.contains(kw))
}

/// Entry-level postings always pass; otherwise the candidate needs at least
/// 80% of the posted minimum.
fn check_experience(resume: &ResumeProfile, job: &JobPosting) -> bool {
    if job.min_experience <= ENTRY_LEVEL_MAX_EXPERIENCE {
        return true;
    }
    resume.years_of_experience >= MIN_EXPERIENCE_RATIO * job.min_experience
}

/// Degree-level comparison via the ordered fragment table. A requirement with
/// no recognizable degree fragment passes.
pub(crate) fn check_education(resume: &ResumeProfile, job: &JobPosting) -> bool {
    let required = match job.required_education.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => return true,
    };
    let required_level = degree_level(required);
    if required_level == 0 {
        return true;
    }
    candidate_degree_level(resume) >= required_level
}

/// Highest level found across the highest-degree field and every education
/// entry.
pub(crate) fn candidate_degree_level(resume: &ResumeProfile) -> u8 {
    resume
        .highest_degree
        .iter()
        .chain(resume.education.iter())
        .map(|text| degree_level(text))
        .max()
        .unwrap_or(0)
}
