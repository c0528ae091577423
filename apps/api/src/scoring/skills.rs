//! Skill coverage — how many of the technical terms a JD mentions also appear in the document.
//!
//! Matching runs on normalized text, so every builtin pattern is written in normalized
//! form ("node js", "ci cd") and anchored on word boundaries: "java" never matches
//! inside "javascript", "sql" never inside "postgresql".

use std::collections::BTreeSet;

use regex::Regex;
use serde::Serialize;

use crate::scoring::normalize::normalize;

/// Builtin vocabulary: (skill name, word-boundary pattern over normalized text).
const BUILTIN_SKILLS: &[(&str, &str)] = &[
    ("python", r"\bpython\b"),
    ("java", r"\bjava\b"),
    ("javascript", r"\bjavascript\b"),
    ("typescript", r"\btypescript\b"),
    ("react", r"\breact\b"),
    ("angular", r"\bangular\b"),
    ("node.js", r"\bnode(?: js)?\b"),
    ("sql", r"\bsql\b"),
    ("postgresql", r"\b(?:postgresql|postgres)\b"),
    ("mysql", r"\bmysql\b"),
    ("mongodb", r"\bmongodb\b"),
    ("redis", r"\bredis\b"),
    ("aws", r"\baws\b"),
    ("azure", r"\bazure\b"),
    ("gcp", r"\b(?:gcp|google cloud)\b"),
    ("docker", r"\bdocker\b"),
    ("kubernetes", r"\b(?:kubernetes|k8s)\b"),
    ("terraform", r"\bterraform\b"),
    ("git", r"\bgit\b"),
    ("linux", r"\blinux\b"),
    ("rest api", r"\brest(?:ful)? apis?\b"),
    ("graphql", r"\bgraphql\b"),
    ("machine learning", r"\bmachine learning\b"),
    ("data analysis", r"\bdata analysis\b"),
    ("ci/cd", r"\bci cd\b"),
    ("devops", r"\bdevops\b"),
    ("agile", r"\bagile\b"),
    ("scrum", r"\bscrum\b"),
];

/// A named skill and the pattern that detects it.
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pattern: Regex,
}

impl Skill {
    pub fn is_present(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

/// Ordered, immutable set of skill matchers. Built once at startup and shared.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<Skill>,
}

impl SkillVocabulary {
    /// The fixed technical vocabulary scores are calibrated against.
    pub fn builtin() -> Self {
        let skills = BUILTIN_SKILLS
            .iter()
            .map(|(name, pattern)| Skill {
                name: (*name).to_string(),
                pattern: Regex::new(pattern).expect("builtin skill pattern is valid"),
            })
            .collect();
        Self { skills }
    }

    /// Builds a vocabulary from plain terms. Terms are normalized and escaped; blank
    /// terms are skipped and duplicates keep their first position.
    pub fn from_terms<S: AsRef<str>>(terms: &[S]) -> Result<Self, regex::Error> {
        let mut seen = BTreeSet::new();
        let mut skills = Vec::new();

        for term in terms {
            let normalized = normalize(term.as_ref());
            if normalized.is_empty() || !seen.insert(normalized.clone()) {
                continue;
            }
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&normalized)))?;
            skills.push(Skill {
                name: normalized,
                pattern,
            });
        }

        Ok(Self { skills })
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Names of every skill present in `normalized`.
    pub fn matched(&self, normalized: &str) -> BTreeSet<&str> {
        self.skills
            .iter()
            .filter(|s| s.is_present(normalized))
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// Skill coverage with the skills behind the ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCoverage {
    pub ratio: f64,
    /// JD skills the document also mentions.
    pub matched: Vec<String>,
    /// JD skills the document lacks.
    pub missing: Vec<String>,
}

/// Fraction of JD-mentioned vocabulary skills that the document also mentions.
/// 1.0 when the JD mentions none of them.
pub fn skill_coverage(vocabulary: &SkillVocabulary, jd: &str, doc: &str) -> f64 {
    analyze_skills(vocabulary, jd, doc).ratio
}

pub fn analyze_skills(vocabulary: &SkillVocabulary, jd: &str, doc: &str) -> SkillCoverage {
    let jd_skills = vocabulary.matched(jd);
    if jd_skills.is_empty() {
        return SkillCoverage {
            ratio: 1.0,
            matched: vec![],
            missing: vec![],
        };
    }

    let doc_skills = vocabulary.matched(doc);
    let (matched, missing): (Vec<&str>, Vec<&str>) =
        jd_skills.iter().partition(|s| doc_skills.contains(*s));

    SkillCoverage {
        ratio: matched.len() as f64 / jd_skills.len() as f64,
        matched: matched.into_iter().map(String::from).collect(),
        missing: missing.into_iter().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabulary_size() {
        assert_eq!(SkillVocabulary::builtin().len(), 28);
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let vocab = SkillVocabulary::builtin();
        let found = vocab.matched("senior javascript developer");
        assert!(found.contains("javascript"));
        assert!(!found.contains("java"));
    }

    #[test]
    fn test_sql_does_not_match_inside_postgresql() {
        let vocab = SkillVocabulary::builtin();
        let found = vocab.matched("postgresql and mysql");
        assert!(found.contains("postgresql"));
        assert!(found.contains("mysql"));
        assert!(!found.contains("sql"));
    }

    #[test]
    fn test_multi_word_skills_match_normalized_text() {
        let vocab = SkillVocabulary::builtin();
        let found = vocab.matched(&normalize("Node.js, CI/CD and Machine Learning; RESTful APIs"));
        assert!(found.contains("node.js"));
        assert!(found.contains("ci/cd"));
        assert!(found.contains("machine learning"));
        assert!(found.contains("rest api"));
    }

    #[test]
    fn test_no_jd_skills_is_full_coverage() {
        let vocab = SkillVocabulary::builtin();
        let jd = normalize("Seeking a culinary expert");
        assert_eq!(skill_coverage(&vocab, &jd, "python docker aws"), 1.0);
        assert_eq!(skill_coverage(&vocab, &jd, ""), 1.0);
    }

    #[test]
    fn test_partial_coverage_ratio() {
        let vocab = SkillVocabulary::builtin();
        let coverage = analyze_skills(&vocab, "python docker aws kubernetes", "python aws");
        assert_eq!(coverage.ratio, 0.5);
        assert_eq!(coverage.matched, vec!["aws", "python"]);
        assert_eq!(coverage.missing, vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_coverage_is_directional() {
        let vocab = SkillVocabulary::builtin();
        assert_eq!(skill_coverage(&vocab, "python", "python docker aws"), 1.0);
        let reverse = skill_coverage(&vocab, "python docker aws", "python");
        assert!((reverse - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_terms_normalizes_and_dedups() {
        let vocab = SkillVocabulary::from_terms(&["Rust", " rust ", "", "C++", "Tokio"]).unwrap();
        // "C++" normalizes to "c"
        assert_eq!(vocab.len(), 3);
        let found = vocab.matched("rust with tokio");
        assert!(found.contains("rust"));
        assert!(found.contains("tokio"));
    }

    #[test]
    fn test_from_terms_respects_word_boundaries() {
        let vocab = SkillVocabulary::from_terms(&["go"]).unwrap();
        assert!(vocab.matched("going home").is_empty());
        assert!(!vocab.matched("we use go daily").is_empty());
    }

    #[test]
    fn test_empty_vocabulary_gives_full_coverage() {
        let vocab = SkillVocabulary::from_terms::<&str>(&[]).unwrap();
        assert!(vocab.is_empty());
        assert_eq!(skill_coverage(&vocab, "python", ""), 1.0);
    }
}
