//! Term-frequency cosine similarity.

use std::collections::BTreeSet;

use crate::scoring::normalize::term_frequencies;

/// Cosine of the angle between the word-count vectors of two normalized texts.
/// 0.0 when either text has no tokens.
pub fn cosine_similarity(jd: &str, doc: &str) -> f64 {
    let jd_counts = term_frequencies(jd);
    let doc_counts = term_frequencies(doc);

    let vocabulary: BTreeSet<&str> = jd_counts.keys().chain(doc_counts.keys()).copied().collect();

    let mut dot = 0.0_f64;
    let mut jd_sq = 0.0_f64;
    let mut doc_sq = 0.0_f64;
    for token in vocabulary {
        let a = f64::from(jd_counts.get(token).copied().unwrap_or(0));
        let b = f64::from(doc_counts.get(token).copied().unwrap_or(0));
        dot += a * b;
        jd_sq += a * a;
        doc_sq += b * b;
    }

    let magnitude = jd_sq.sqrt() * doc_sq.sqrt();
    if magnitude == 0.0 {
        return 0.0;
    }
    dot / magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let score = cosine_similarity("rust tokio axum", "rust tokio axum");
        assert!((score - 1.0).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_disjoint_texts() {
        assert_eq!(cosine_similarity("rust tokio", "java spring"), 0.0);
    }

    #[test]
    fn test_empty_side_is_zero() {
        assert_eq!(cosine_similarity("", "rust"), 0.0);
        assert_eq!(cosine_similarity("rust", ""), 0.0);
        assert_eq!(cosine_similarity("", ""), 0.0);
    }

    #[test]
    fn test_frequency_matters() {
        // [2, 1] · [1, 1] / (√5 · √2)
        let score = cosine_similarity("aws aws docker", "aws docker");
        let expected = 3.0 / (5.0_f64.sqrt() * 2.0_f64.sqrt());
        assert!((score - expected).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_word_order_is_ignored() {
        assert_eq!(
            cosine_similarity("python docker aws", "aws python docker"),
            cosine_similarity("python docker aws", "python docker aws"),
        );
    }

    #[test]
    fn test_symmetric() {
        let a = "python python developer needed";
        let b = "python developer with docker";
        assert_eq!(cosine_similarity(a, b), cosine_similarity(b, a));
    }
}
