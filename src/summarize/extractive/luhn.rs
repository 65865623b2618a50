//! Luhn sentence scoring.
//!
//! Classic significant-word clustering: the most frequent content terms are
//! "significant", each sentence is scanned for the densest window of
//! significant terms, and the sentence score is
//! `significant_count^2 / window_length` for that window.

use rustc_hash::{FxHashMap, FxHashSet};

use super::SentenceUnit;

/// How many of the most frequent terms count as significant.
const TOP_TERMS: usize = 10;
/// A term must appear at least this often to be significant.
const MIN_FREQUENCY: usize = 2;
/// Maximum gap of insignificant terms inside a cluster window.
const MAX_GAP: usize = 4;

pub(crate) fn score(units: &[SentenceUnit]) -> Vec<f64> {
    let significant = significant_terms(units);
    units
        .iter()
        .map(|unit| best_window_score(&unit.terms, &significant))
        .collect()
}

fn significant_terms(units: &[SentenceUnit]) -> FxHashSet<String> {
    let mut frequency: FxHashMap<&str, usize> = FxHashMap::default();
    for unit in units {
        for term in &unit.terms {
            *frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = frequency
        .into_iter()
        .filter(|&(_, count)| count >= MIN_FREQUENCY)
        .collect();
    // Frequency first, term as tiebreak, so the cutoff is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(TOP_TERMS)
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Score the densest cluster of significant terms within one sentence.
fn best_window_score(terms: &[String], significant: &FxHashSet<String>) -> f64 {
    let positions: Vec<usize> = terms
        .iter()
        .enumerate()
        .filter(|(_, term)| significant.contains(*term))
        .map(|(pos, _)| pos)
        .collect();

    if positions.is_empty() {
        return 0.0;
    }

    let mut best = 0.0f64;
    let mut window_start = 0usize;
    let mut count_in_window = 1usize;

    for k in 1..=positions.len() {
        let closes_window = k == positions.len() || positions[k] - positions[k - 1] > MAX_GAP;
        if closes_window {
            let span = positions[k - 1] - positions[window_start] + 1;
            let candidate = (count_in_window * count_in_window) as f64 / span as f64;
            best = best.max(candidate);
            if k < positions.len() {
                window_start = k;
                count_in_window = 1;
            }
        } else {
            count_in_window += 1;
        }
    }

    best
}
