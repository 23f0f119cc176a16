//! Skill Matcher — synonym-aware matching of resume skills against a job's
//! required and preferred skill lists, plus free-text skill extraction for
//! postings that ship without a structured list.

mod vocabulary;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text;
use vocabulary::{ABBREVIATIONS, SYNONYMS, TECHNICAL_VOCABULARY};

/// Weight of the required-skill match in the overall skill score; the
/// remainder goes to preferred skills.
const REQUIRED_WEIGHT: f64 = 0.7;
const PREFERRED_WEIGHT: f64 = 0.3;

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// One side of a synonym-aware comparison: which job skills the resume covers.
/// Skill names are reported in canonical form, in the job list's order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// matched / total, as a percentage. Defined as 0 when either side is
    /// empty: an empty job list means nothing to match, and an empty resume
    /// skill list is scored 0 rather than "unknown" (deliberate guard).
    pub match_pct: f64,
}

/// Full skill comparison for a (resume, job) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub missing_preferred: Vec<String>,
    pub required_match_pct: f64,
    pub preferred_match_pct: f64,
    /// 0.7 * required match + 0.3 * preferred match, rounded to 2 decimals.
    pub overall_score: f64,
    pub total_matched: usize,
    pub total_missing: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Folds a raw skill name to its canonical form: trim + lowercase, the
/// abbreviation map, then alias→canonical resolution (first match wins in
/// table-declaration order).
pub fn canonical(raw: &str) -> String {
    let mut skill = raw.trim().to_lowercase();
    if let Some((_, full)) = ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == skill) {
        skill = full.to_string();
    }
    for (canon, aliases) in SYNONYMS {
        if *canon == skill || aliases.contains(&skill.as_str()) {
            return canon.to_string();
        }
    }
    skill
}

/// The synonym group of a canonical skill: the canonical name plus every
/// listed alias. Unknown skills expand to themselves.
fn expand(canon: &str) -> Vec<String> {
    let mut group = vec![canon.to_string()];
    if let Some((_, aliases)) = SYNONYMS.iter().find(|(c, _)| *c == canon) {
        group.extend(aliases.iter().map(|a| a.to_string()));
    }
    group
}

/// Expands every input skill into its full synonym group.
pub fn normalize_skills(skills: &[String]) -> HashSet<String> {
    let mut out = HashSet::new();
    for raw in skills {
        if raw.trim().is_empty() {
            continue;
        }
        for member in expand(&canonical(raw)) {
            out.insert(member);
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Matches resume skills against one job skill list. Job skills are
/// canonicalized and deduplicated preserving first-seen order; a job skill is
/// matched when any member of its synonym group appears on the resume side.
pub fn match_with_synonyms(resume_skills: &[String], job_skills: &[String]) -> SynonymMatch {
    let resume_set = normalize_skills(resume_skills);

    let mut job_canonical: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for raw in job_skills {
        if raw.trim().is_empty() {
            continue;
        }
        let canon = canonical(raw);
        if seen.insert(canon.clone()) {
            job_canonical.push(canon);
        }
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for canon in &job_canonical {
        if expand(canon).iter().any(|member| resume_set.contains(member)) {
            matched.push(canon.clone());
        } else {
            missing.push(canon.clone());
        }
    }

    // Empty job list: nothing to match. Empty resume list: scored 0, not
    // "unknown" (see module docs).
    let match_pct = if job_canonical.is_empty() || resume_set.is_empty() {
        0.0
    } else {
        100.0 * matched.len() as f64 / job_canonical.len() as f64
    };

    SynonymMatch {
        matched,
        missing,
        match_pct,
    }
}

/// Runs required and preferred comparisons independently and combines them
/// into the overall skill score.
pub fn match_skills(
    resume_skills: &[String],
    required: &[String],
    preferred: &[String],
) -> SkillAnalysis {
    let req = match_with_synonyms(resume_skills, required);
    let pref = match_with_synonyms(resume_skills, preferred);

    let overall_score = round2(REQUIRED_WEIGHT * req.match_pct + PREFERRED_WEIGHT * pref.match_pct);
    let total_matched = req.matched.len() + pref.matched.len();
    let total_missing = req.missing.len() + pref.missing.len();

    SkillAnalysis {
        matched_required: req.matched,
        missing_required: req.missing,
        matched_preferred: pref.matched,
        missing_preferred: pref.missing,
        required_match_pct: round2(req.match_pct),
        preferred_match_pct: round2(pref.match_pct),
        overall_score,
        total_matched,
        total_missing,
    }
}

/// Derives a skill list from free text: technical terms plus keywords,
/// filtered to the recognized vocabulary. Sorted for determinism.
pub fn extract_skills_from_text(description: &str) -> Vec<String> {
    let vocab: HashSet<&str> = TECHNICAL_VOCABULARY.iter().copied().collect();

    let mut found: HashSet<String> = text::extract_technical_terms(description)
        .into_iter()
        .chain(text::extract_keywords(description, text::MIN_KEYWORD_LENGTH))
        .filter(|term| vocab.contains(term.as_str()))
        .collect();

    let mut skills: Vec<String> = found.drain().collect();
    skills.sort();
    skills
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
