//! Scoring configuration — role-archetype weight sets, hard-filter thresholds,
//! and the degree-level table. Pure data; the only behavior is lookup.

use serde::{Deserialize, Serialize};

/// Per-archetype weights over the six relevance sub-scores. Each set sums
/// to 1.0 so the weighted total stays inside [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleWeights {
    pub skills: f64,
    pub experience: f64,
    pub projects: f64,
    pub keywords: f64,
    pub summary: f64,
    pub education: f64,
}

impl RoleWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.projects + self.keywords + self.summary + self.education
    }
}

/// Individual-contributor engineering roles: skills and experience dominate.
pub const ENGINEER_WEIGHTS: RoleWeights = RoleWeights {
    skills: 0.35,
    experience: 0.25,
    projects: 0.15,
    keywords: 0.10,
    summary: 0.05,
    education: 0.10,
};

/// Entry-level candidates: projects and education stand in for experience.
pub const FRESHER_WEIGHTS: RoleWeights = RoleWeights {
    skills: 0.30,
    experience: 0.10,
    projects: 0.25,
    keywords: 0.10,
    summary: 0.10,
    education: 0.15,
};

/// Management roles: experience outweighs hands-on skill lists.
pub const MANAGER_WEIGHTS: RoleWeights = RoleWeights {
    skills: 0.25,
    experience: 0.35,
    projects: 0.10,
    keywords: 0.10,
    summary: 0.10,
    education: 0.10,
};

/// Fallback for unrecognized role tags. Identical to the engineer set.
pub const DEFAULT_WEIGHTS: RoleWeights = ENGINEER_WEIGHTS;

/// Case-insensitive weight lookup by role tag. Unmatched tags (and absent
/// ones) fall back to [`DEFAULT_WEIGHTS`].
pub fn weights_for_role(role_type: Option<&str>) -> RoleWeights {
    let tag = match role_type {
        Some(tag) => tag.to_lowercase(),
        None => return DEFAULT_WEIGHTS,
    };
    if ["fresher", "intern", "entry"].iter().any(|t| tag.contains(t)) {
        FRESHER_WEIGHTS
    } else if ["manager", "lead"].iter().any(|t| tag.contains(t)) {
        MANAGER_WEIGHTS
    } else if ["engineer", "developer", "senior"].iter().any(|t| tag.contains(t)) {
        ENGINEER_WEIGHTS
    } else {
        DEFAULT_WEIGHTS
    }
}

/// True when the tag names a management role; some recommendations are
/// suppressed for managers.
pub fn is_manager_role(role_type: Option<&str>) -> bool {
    role_type
        .map(|tag| {
            let tag = tag.to_lowercase();
            tag.contains("manager") || tag.contains("lead")
        })
        .unwrap_or(false)
}

/// A candidate passes the experience gate at 80% of the posted minimum.
pub const MIN_EXPERIENCE_RATIO: f64 = 0.8;

/// Postings whose minimum experience is at or below this always pass the
/// experience gate (entry-level leniency).
pub const ENTRY_LEVEL_MAX_EXPERIENCE: f64 = 1.0;

/// Phrases signaling that a description carries a work-authorization
/// requirement. The same list gates the resume side.
pub const WORK_AUTH_KEYWORDS: &[&str] = &[
    "work authorization",
    "work authorisation",
    "visa sponsorship",
    "security clearance",
    "green card",
    "citizenship",
    "citizen",
    "sponsorship",
    "authorized to work",
];

/// Phrases signaling location flexibility in a posting.
pub const LOCATION_FLEXIBILITY_KEYWORDS: &[&str] = &[
    "remote",
    "hybrid",
    "anywhere",
    "work from home",
    "wfh",
    "relocation",
    "distributed team",
];

/// Degree fragments → ordinal level, highest first. Iteration order is the
/// contract: the first fragment contained in a text decides its level.
pub const DEGREE_LEVELS: &[(&str, u8)] = &[
    ("phd", 5),
    ("ph.d", 5),
    ("doctorate", 5),
    ("doctoral", 5),
    ("master", 4),
    ("m.tech", 4),
    ("m.s", 4),
    ("msc", 4),
    ("mba", 4),
    ("m.e", 4),
    ("bachelor", 3),
    ("b.tech", 3),
    ("b.e", 3),
    ("b.s", 3),
    ("bsc", 3),
    ("b.a", 3),
    ("undergraduate", 3),
    ("diploma", 2),
    ("associate", 2),
    ("high school", 1),
    ("secondary", 1),
];

/// First-match degree-level lookup. Returns 0 when no fragment matches,
/// which callers treat as "no recognizable requirement".
pub fn degree_level(text: &str) -> u8 {
    let lowered = text.to_lowercase();
    DEGREE_LEVELS
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map(|(_, level)| *level)
        .unwrap_or(0)
}
