use serde::{Deserialize, Serialize};

/// A normalized job posting as returned by the external Job Provider.
/// Immutable input to a scoring run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-text description. Scoring rejects postings with an empty one.
    pub description: String,
    /// Ordered; may be empty, in which case the scorer infers skills from the
    /// description.
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    /// Minimum years of experience. 0 or 1 means entry-level.
    #[serde(default)]
    pub min_experience: f64,
    pub max_experience: Option<f64>,
    /// Required education as free text ("Bachelor's in CS or equivalent").
    pub required_education: Option<String>,
    /// Role archetype tag ("software engineer", "engineering manager", ...).
    /// Drives the scoring weight set; unknown tags use the default weights.
    pub role_type: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_deserializes_without_optional_fields() {
        let json = r#"{
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "description": "Build APIs in Rust."
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert!(job.required_skills.is_empty());
        assert_eq!(job.min_experience, 0.0);
        assert!(job.max_experience.is_none());
        assert!(job.role_type.is_none());
    }
}
