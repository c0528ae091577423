//! Text normalization and tokenization shared by every metric.
//!
//! Ordered collections are used on purpose: metric sums iterate them, and a fixed
//! iteration order keeps floating-point results identical across processes.

use std::collections::{BTreeMap, BTreeSet};

/// Lowercases, replaces every non-alphanumeric, non-whitespace char with a space,
/// then collapses whitespace runs and trims.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Distinct tokens of an already-normalized string.
pub fn word_set(normalized: &str) -> BTreeSet<&str> {
    normalized.split_whitespace().collect()
}

/// Token → occurrence count for an already-normalized string.
pub fn term_frequencies(normalized: &str) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for token in normalized.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
