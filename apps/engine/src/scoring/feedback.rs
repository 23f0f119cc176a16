//! Feedback and recommendation synthesis for one analysis result.

use crate::models::resume::ResumeProfile;
use crate::skills::SkillAnalysis;

use super::filters::HardFilterResult;
use super::relevance::RelevanceScore;

/// Band thresholds for the headline feedback message.
const EXCELLENT_THRESHOLD: f64 = 80.0;
const GOOD_THRESHOLD: f64 = 60.0;
const MODERATE_THRESHOLD: f64 = 40.0;

/// Recommendations are capped so the caller never renders an endless list.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Headline feedback: the joined failure reasons when the hard filters
/// rejected the candidate, otherwise a banded message with specific call-outs.
pub fn build_feedback(
    filters: &HardFilterResult,
    relevance: Option<&RelevanceScore>,
    skill_analysis: &SkillAnalysis,
) -> String {
    if !filters.passed {
        return format!(
            "This position is not a match: {}.",
            filters.failure_reasons.join("; ")
        );
    }

    let relevance = match relevance {
        Some(score) => score,
        None => return "No relevance score was computed for this position.".to_string(),
    };

    let mut feedback = if relevance.weighted_total >= EXCELLENT_THRESHOLD {
        "Excellent match! Your profile aligns strongly with this position.".to_string()
    } else if relevance.weighted_total >= GOOD_THRESHOLD {
        "Good match. Your profile covers most of what this position asks for.".to_string()
    } else if relevance.weighted_total >= MODERATE_THRESHOLD {
        "Moderate match. Some areas of your profile align with this position.".to_string()
    } else {
        "Limited match. This position asks for a different profile than yours.".to_string()
    };

    if relevance.skills < 70.0 {
        feedback.push_str(" Your skill set only partially covers what this role lists.");
    }
    if skill_analysis.total_missing > 0 {
        feedback.push_str(&format!(
            " You are missing {} of the listed skills.",
            skill_analysis.total_missing
        ));
    }
    if relevance.experience < 70.0 {
        feedback.push_str(" Your experience profile only partially matches the role.");
    }

    feedback
}

/// Ordered improvement recommendations, capped at [`MAX_RECOMMENDATIONS`].
/// Score-dependent tips are skipped when the hard filters blocked scoring.
pub fn build_recommendations(
    resume: &ResumeProfile,
    relevance: Option<&RelevanceScore>,
    skill_analysis: &SkillAnalysis,
    is_manager_role: bool,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !skill_analysis.missing_required.is_empty() {
        let top: Vec<&str> = skill_analysis
            .missing_required
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        recommendations.push(format!(
            "Add the missing required skills to your resume if you have them: {}",
            top.join(", ")
        ));
    }

    if let Some(score) = relevance {
        if score.experience < 70.0 {
            recommendations.push(
                "Emphasize work experience that is directly relevant to this role".to_string(),
            );
        }
        if score.projects < 50.0 && !is_manager_role {
            recommendations
                .push("Add projects that demonstrate the skills this role asks for".to_string());
        }
        if score.keywords < 60.0 {
            recommendations.push(
                "Mirror more of the job description's terminology in your resume".to_string(),
            );
        }
    }

    let summary_weak = match (resume.summary.as_deref(), relevance) {
        (None, _) => true,
        (Some(s), _) if s.trim().is_empty() => true,
        (Some(_), Some(score)) => score.summary < 50.0,
        (Some(_), None) => false,
    };
    if summary_weak {
        recommendations
            .push("Write a short summary tailored to the roles you are applying for".to_string());
    }

    if resume.certifications.is_empty() && !skill_analysis.missing_required.is_empty() {
        recommendations.push(
            "A certification in one of the missing skill areas would strengthen your profile"
                .to_string(),
        );
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::weights::DEFAULT_WEIGHTS;

    fn passing_filters() -> HardFilterResult {
        HardFilterResult {
            passed: true,
            location_ok: true,
            work_authorization_ok: true,
            experience_ok: true,
            education_ok: true,
            failure_reasons: vec![],
        }
    }

    fn relevance_with_total(total: f64) -> RelevanceScore {
        RelevanceScore {
            skills: 90.0,
            experience: 90.0,
            projects: 90.0,
            keywords: 90.0,
            summary: 90.0,
            education: 90.0,
            weights: DEFAULT_WEIGHTS,
            weighted_total: total,
        }
    }

    fn empty_analysis() -> SkillAnalysis {
        SkillAnalysis {
            matched_required: vec![],
            missing_required: vec![],
            matched_preferred: vec![],
            missing_preferred: vec![],
            required_match_pct: 0.0,
            preferred_match_pct: 0.0,
            overall_score: 0.0,
            total_matched: 0,
            total_missing: 0,
        }
    }

    #[test]
    fn test_failed_filters_join_reasons_into_one_sentence() {
        let filters = HardFilterResult {
            passed: false,
            location_ok: true,
            work_authorization_ok: false,
            experience_ok: false,
            education_ok: true,
            failure_reasons: vec!["reason one".to_string(), "reason two".to_string()],
        };
        let feedback = build_feedback(&filters, None, &empty_analysis());
        assert!(feedback.contains("reason one; reason two"));
    }

    #[test]
    fn test_feedback_bands() {
        for (total, fragment) in [
            (85.0, "Excellent"),
            (65.0, "Good"),
            (45.0, "Moderate"),
            (20.0, "Limited"),
        ] {
            let feedback = build_feedback(
                &passing_filters(),
                Some(&relevance_with_total(total)),
                &empty_analysis(),
            );
            assert!(feedback.contains(fragment), "total={total}: {feedback}");
        }
    }

    #[test]
    fn test_feedback_calls_out_missing_skills() {
        let mut relevance = relevance_with_total(65.0);
        relevance.skills = 40.0;
        let mut analysis = empty_analysis();
        analysis.total_missing = 3;
        let feedback = build_feedback(&passing_filters(), Some(&relevance), &analysis);
        assert!(feedback.contains("missing 3"));
    }

    #[test]
    fn test_recommendations_capped_at_five() {
        let mut relevance = relevance_with_total(30.0);
        relevance.experience = 10.0;
        relevance.projects = 10.0;
        relevance.keywords = 10.0;
        relevance.summary = 10.0;
        let mut analysis = empty_analysis();
        analysis.missing_required = vec!["rust".to_string(), "go".to_string()];
        let resume = ResumeProfile::default(); // no summary, no certifications
        let recommendations = build_recommendations(&resume, Some(&relevance), &analysis, false);
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_missing_skill_recommendation_names_top_three() {
        let mut analysis = empty_analysis();
        analysis.missing_required = vec![
            "rust".to_string(),
            "go".to_string(),
            "kafka".to_string(),
            "redis".to_string(),
        ];
        let recommendations =
            build_recommendations(&ResumeProfile::default(), None, &analysis, false);
        let first = &recommendations[0];
        assert!(first.contains("rust, go, kafka"));
        assert!(!first.contains("redis"));
    }

    #[test]
    fn test_projects_tip_suppressed_for_managers() {
        let mut relevance = relevance_with_total(60.0);
        relevance.projects = 10.0;
        let recommendations = build_recommendations(
            &ResumeProfile {
                summary: Some("A summary".to_string()),
                certifications: vec!["PMP".to_string()],
                ..Default::default()
            },
            Some(&relevance),
            &empty_analysis(),
            true,
        );
        assert!(recommendations.iter().all(|r| !r.contains("projects")));
    }

    #[test]
    fn test_no_recommendations_for_a_strong_profile() {
        let relevance = relevance_with_total(90.0);
        let resume = ResumeProfile {
            summary: Some("Seasoned engineer".to_string()),
            certifications: vec!["AWS SA".to_string()],
            ..Default::default()
        };
        let recommendations =
            build_recommendations(&resume, Some(&relevance), &empty_analysis(), false);
        assert!(recommendations.is_empty());
    }
}
