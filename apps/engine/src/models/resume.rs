use serde::{Deserialize, Serialize};

/// A candidate profile as handed to the engine by the (external) persistence
/// layer. Immutable input to a scoring run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    /// Skill names as listed on the resume ("JavaScript", "k8s", ...).
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text work history entries, one per position.
    #[serde(default)]
    pub work_history: Vec<String>,
    /// Free-text project descriptions.
    #[serde(default)]
    pub projects: Vec<String>,
    pub summary: Option<String>,
    /// Total years of experience. Non-negative.
    #[serde(default)]
    pub years_of_experience: f64,
    /// Highest degree as written ("B.Tech in CS", "Master of Science", ...).
    pub highest_degree: Option<String>,
    /// Free-text education entries (degree, school, year).
    #[serde(default)]
    pub education: Vec<String>,
    /// Work-authorization statement ("US citizen", "H1B, needs sponsorship").
    pub work_authorization: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl ResumeProfile {
    /// All resume text relevant for keyword matching, joined in a stable order.
    pub fn combined_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.skills.iter().map(String::as_str));
        parts.extend(self.work_history.iter().map(String::as_str));
        parts.extend(self.projects.iter().map(String::as_str));
        if let Some(summary) = &self.summary {
            parts.push(summary);
        }
        parts.join(" ")
    }

    /// True when the profile carries nothing scoreable.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.work_history.is_empty()
            && self.projects.is_empty()
            && self.summary.as_deref().map_or(true, |s| s.trim().is_empty())
    }
}
