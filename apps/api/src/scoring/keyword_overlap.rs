//! Keyword overlap — Jaccard similarity over word sets, with important terms counted twice.

use std::collections::BTreeSet;

use crate::scoring::normalize::word_set;

/// Weighted Jaccard similarity of two normalized texts.
///
/// Each important term present in both texts adds one extra unit to the intersection
/// size; the union is left alone. The result can exceed 1.0; clamping is
/// the composite scorer's job.
pub fn keyword_overlap(jd: &str, doc: &str, important_terms: Option<&[String]>) -> f64 {
    let jd_words = word_set(jd);
    let doc_words = word_set(doc);

    let union = jd_words.union(&doc_words).count();
    if union == 0 {
        return 0.0;
    }

    let common: BTreeSet<&str> = jd_words.intersection(&doc_words).copied().collect();
    let boost = important_terms
        .map(|terms| important_matches(&common, terms).len())
        .unwrap_or(0);

    (common.len() + boost) as f64 / union as f64
}

/// Lowercased important terms found in both texts, sorted and deduplicated.
pub fn matched_important_terms(jd: &str, doc: &str, important_terms: &[String]) -> Vec<String> {
    let jd_words = word_set(jd);
    let doc_words = word_set(doc);
    let common: BTreeSet<&str> = jd_words.intersection(&doc_words).copied().collect();

    important_matches(&common, important_terms)
        .into_iter()
        .collect()
}

fn important_matches(common: &BTreeSet<&str>, terms: &[String]) -> BTreeSet<String> {
    terms
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| common.contains(t.as_str()))
        .collect()
}
