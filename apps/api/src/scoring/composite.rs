//! Composite scorer — blends keyword overlap, skill coverage and cosine similarity into a
//! 0–100 match score, and compares an original document against a revision.
//!
//! `AppState` holds an `Arc<MatchEngine>` built once at startup. The engine has no
//! mutable state, so one instance serves every request concurrently.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::cosine::cosine_similarity;
use crate::scoring::extract::{
    looks_like_markup, DocumentExtractionError, HtmlTextExtractor, TextExtractor,
};
use crate::scoring::keyword_overlap::{keyword_overlap, matched_important_terms};
use crate::scoring::normalize::normalize;
use crate::scoring::skills::{analyze_skills, skill_coverage, SkillVocabulary};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Metric weights. Fixed: changing them breaks comparability with past scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword_overlap: f64,
    pub skill_coverage: f64,
    pub cosine: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_overlap: 0.5,
            skill_coverage: 0.3,
            cosine: 0.2,
        }
    }
}

/// Raw metric values behind a score. `keyword_overlap` may exceed 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBreakdown {
    pub keyword_overlap: f64,
    pub skill_coverage: f64,
    pub cosine_similarity: f64,
}

impl MetricBreakdown {
    const ZERO: Self = Self {
        keyword_overlap: 0.0,
        skill_coverage: 0.0,
        cosine_similarity: 0.0,
    };
}

/// Full match report for one (JD, document) pair.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub score: f64, // 0 – 100, one decimal
    pub breakdown: MetricBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_important_terms: Vec<String>,
    pub recommendation: String,
}

/// Scores before and after a revision. `improvement` is negative when the revision
/// matches the JD worse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementResult {
    pub before: f64,
    pub after: f64,
    pub improvement: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

pub struct MatchEngine {
    vocabulary: SkillVocabulary,
    weights: ScoringWeights,
    extractor: Arc<dyn TextExtractor>,
}

impl MatchEngine {
    pub fn new(vocabulary: SkillVocabulary, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            vocabulary,
            weights: ScoringWeights::default(),
            extractor,
        }
    }

    /// Match score of `document` against `job_description`, 0 – 100 with one decimal.
    pub fn similarity(
        &self,
        job_description: &str,
        document: &str,
        important_terms: Option<&[String]>,
    ) -> Result<f64, DocumentExtractionError> {
        let (jd, doc) = self.prepare(job_description, document)?;
        let breakdown = self.breakdown(&jd, &doc, important_terms);
        Ok(composite_score(&breakdown, &self.weights))
    }

    /// Score plus the metrics, skills and terms that produced it.
    pub fn score_report(
        &self,
        job_description: &str,
        document: &str,
        important_terms: Option<&[String]>,
    ) -> Result<ScoreReport, DocumentExtractionError> {
        let (jd, doc) = self.prepare(job_description, document)?;
        let breakdown = self.breakdown(&jd, &doc, important_terms);
        let score = composite_score(&breakdown, &self.weights);

        let skills = analyze_skills(&self.vocabulary, &jd, &doc);
        let matched_important_terms = important_terms
            .map(|terms| matched_important_terms(&jd, &doc, terms))
            .unwrap_or_default();
        let recommendation = build_recommendation(score, &skills.missing);

        Ok(ScoreReport {
            score,
            breakdown,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            matched_important_terms,
            recommendation,
        })
    }

    /// Scores the original and the revised document against the same JD and terms.
    pub fn calculate_improvement(
        &self,
        job_description: &str,
        original: &str,
        revised: &str,
        important_terms: Option<&[String]>,
    ) -> Result<ImprovementResult, DocumentExtractionError> {
        let before = self.similarity(job_description, original, important_terms)?;
        let after = self.similarity(job_description, revised, important_terms)?;

        Ok(ImprovementResult {
            before,
            after,
            improvement: round_one_decimal(after - before),
        })
    }

    /// Textifies markup documents, then normalizes both sides.
    fn prepare(
        &self,
        job_description: &str,
        document: &str,
    ) -> Result<(String, String), DocumentExtractionError> {
        let doc = if looks_like_markup(document) {
            normalize(&self.extractor.extract_text(document)?)
        } else {
            normalize(document)
        };
        Ok((normalize(job_description), doc))
    }

    fn breakdown(
        &self,
        jd: &str,
        doc: &str,
        important_terms: Option<&[String]>,
    ) -> MetricBreakdown {
        if jd.is_empty() || doc.is_empty() {
            debug!(
                jd_empty = jd.is_empty(),
                doc_empty = doc.is_empty(),
                "Blank input, scoring as zero"
            );
            return MetricBreakdown::ZERO;
        }

        let breakdown = MetricBreakdown {
            keyword_overlap: keyword_overlap(jd, doc, important_terms),
            skill_coverage: skill_coverage(&self.vocabulary, jd, doc),
            cosine_similarity: cosine_similarity(jd, doc),
        };
        debug!(
            keyword_overlap = breakdown.keyword_overlap,
            skill_coverage = breakdown.skill_coverage,
            cosine_similarity = breakdown.cosine_similarity,
            "Computed match metrics"
        );
        breakdown
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(SkillVocabulary::builtin(), Arc::new(HtmlTextExtractor))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring helpers
// ────────────────────────────────────────────────────────────────────────────

/// Weighted sum of the metrics as a percentage, rounded to one decimal and capped at
/// 100. Only the upper bound needs a cap: no metric is negative.
pub fn composite_score(breakdown: &MetricBreakdown, weights: &ScoringWeights) -> f64 {
    let composite = weights.keyword_overlap * breakdown.keyword_overlap
        + weights.skill_coverage * breakdown.skill_coverage
        + weights.cosine * breakdown.cosine_similarity;
    round_one_decimal(composite * 100.0).min(100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Human-readable verdict naming up to three missing skills.
fn build_recommendation(score: f64, missing_skills: &[String]) -> String {
    let top_missing: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();

    if score >= 80.0 {
        "Strong match. The document covers the key terms of the job description.".to_string()
    } else if score >= 60.0 {
        if top_missing.is_empty() {
            format!("Moderate match ({score}/100). Mirror more of the job description's wording.")
        } else {
            format!(
                "Moderate match ({score}/100). Consider mentioning: {}.",
                top_missing.join(", ")
            )
        }
    } else if top_missing.is_empty() {
        format!("Low match ({score}/100). The document shares little vocabulary with the job description.")
    } else {
        format!(
            "Low match ({score}/100). Missing skills: {}.",
            top_missing.join(", ")
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
