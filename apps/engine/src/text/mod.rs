//! Text Analyzer — normalization, keyword sets, and set-based similarity.
//!
//! Everything here is deterministic and allocation-light; the scorer calls
//! these functions once per (resume, job) pair.

mod stopwords;

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use stopwords::STOP_WORDS;

/// Minimum token length kept by [`extract_keywords`].
pub const MIN_KEYWORD_LENGTH: usize = 2;

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Lowercases, strips everything outside `[a-z0-9 +#.]`, and collapses
/// whitespace. Empty input gives an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut last_was_space = true;
    for ch in lowered.chars() {
        let keep = matches!(ch, 'a'..='z' | '0'..='9' | '+' | '#' | '.');
        if keep {
            out.push(ch);
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    out.trim().to_string()
}

/// Normalizes, splits on whitespace, and drops short tokens and stop words.
/// Duplicates collapse; order is irrelevant.
pub fn extract_keywords(text: &str, min_length: usize) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .filter(|token| token.len() >= min_length && !stop_words().contains(token))
        .map(str::to_string)
        .collect()
}

/// Fraction of `b`'s vocabulary found in `a`, as a percentage.
///
/// Asymmetric by intent: `keyword_overlap(resume, job)` answers "how much of
/// the job's vocabulary does the resume cover", not the reverse.
pub fn keyword_overlap(a: &str, b: &str) -> f64 {
    let kb = extract_keywords(b, MIN_KEYWORD_LENGTH);
    if kb.is_empty() {
        return 0.0;
    }
    let ka = extract_keywords(a, MIN_KEYWORD_LENGTH);
    let shared = kb.intersection(&ka).count();
    100.0 * shared as f64 / kb.len() as f64
}

/// Jaccard similarity of the two keyword sets, as a percentage.
/// 0 when either side has no keywords. Symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    let ka = extract_keywords(a, MIN_KEYWORD_LENGTH);
    let kb = extract_keywords(b, MIN_KEYWORD_LENGTH);
    if ka.is_empty() || kb.is_empty() {
        return 0.0;
    }
    let intersection = ka.intersection(&kb).count();
    let union = ka.union(&kb).count();
    100.0 * intersection as f64 / union as f64
}

/// Pulls technical-looking terms out of raw (un-normalized) text: acronyms
/// of 2+ uppercase letters, dotted identifiers like `node.js`, and the
/// `c++` / `c#` shapes. Results are case-folded.
pub fn extract_technical_terms(text: &str) -> HashSet<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\b[A-Z]{2,}\b|\b\w+\.\w+\b|\b\w+\+\+|\b\w+#").expect("valid term regex")
    });
    re.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Every number (optionally suffixed with `+`) directly followed by a
/// year marker: "5+ years", "3 yrs", "1 year".
pub fn extract_years(text: &str) -> Vec<f64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)\b").expect("valid years regex")
    });
    re.captures_iter(&text.to_lowercase())
        .filter_map(|cap| cap[1].parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_collapses() {
        assert_eq!(
            normalize("  Senior, Rust/Go Engineer!!  (Remote) "),
            "senior rust go engineer remote"
        );
    }

    #[test]
    fn test_normalize_keeps_plus_hash_dot() {
        assert_eq!(normalize("C++ and C# with Node.js"), "c++ and c# with node.js");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \t\n "), "");
    }

    #[test]
    fn test_extract_keywords_drops_stop_words_and_short_tokens() {
        let keywords = extract_keywords("experience using Rust and Go at a startup", 2);
        assert!(keywords.contains("rust"));
        assert!(keywords.contains("go"));
        assert!(keywords.contains("startup"));
        assert!(!keywords.contains("experience"));
        assert!(!keywords.contains("using"));
        assert!(!keywords.contains("and"));
        assert!(!keywords.contains("a"));
    }

    #[test]
    fn test_extract_keywords_collapses_duplicates() {
        let keywords = extract_keywords("rust rust RUST Rust", 2);
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_keyword_overlap_is_directional() {
        let job = "kubernetes docker terraform";
        let resume = "kubernetes docker terraform ansible jenkins prometheus grafana";
        // Resume covers all of the job's vocabulary...
        assert_eq!(keyword_overlap(resume, job), 100.0);
        // ...but the job covers only part of the resume's.
        assert!(keyword_overlap(job, resume) < 100.0);
    }

    #[test]
    fn test_keyword_overlap_empty_right_side_is_zero() {
        assert_eq!(keyword_overlap("rust tokio", ""), 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = "distributed systems in rust with tokio";
        let b = "rust tokio services and kafka pipelines";
        assert_eq!(similarity(a, b), similarity(b, a));
    }

    #[test]
    fn test_similarity_identical_texts_is_100() {
        let text = "rust tokio kafka";
        assert_eq!(similarity(text, text), 100.0);
    }

    #[test]
    fn test_similarity_empty_side_is_zero() {
        assert_eq!(similarity("", "rust"), 0.0);
        assert_eq!(similarity("rust", ""), 0.0);
    }

    #[test]
    fn test_extract_technical_terms() {
        let terms = extract_technical_terms("Built AWS pipelines in C++ and Node.js, some C# too");
        assert!(terms.contains("aws"));
        assert!(terms.contains("c++"));
        assert!(terms.contains("node.js"));
        assert!(terms.contains("c#"));
        assert!(!terms.contains("built"));
    }

    #[test]
    fn test_extract_years_variants() {
        let years = extract_years("5+ years of Rust, 3 yrs Go, 1 year SQL");
        assert_eq!(years, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_extract_years_ignores_bare_numbers() {
        assert!(extract_years("team of 12 across 3 offices").is_empty());
    }
}
