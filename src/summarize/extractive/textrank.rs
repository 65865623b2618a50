//! TextRank sentence scoring.
//!
//! Similarity between two sentences is the count of shared distinct terms
//! normalized by the log of both sentence lengths, the formulation from the
//! original TextRank paper.

use rustc_hash::FxHashSet;

use super::SentenceUnit;
use super::pagerank::PageRank;

pub(crate) fn score(units: &[SentenceUnit]) -> Vec<f64> {
    let n = units.len();
    let term_sets: Vec<FxHashSet<&str>> = units
        .iter()
        .map(|u| u.terms.iter().map(String::as_str).collect())
        .collect();

    let mut weights = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let w = similarity(&term_sets[i], &term_sets[j]);
            weights[i][j] = w;
            weights[j][i] = w;
        }
    }

    PageRank::default().run(&weights)
}

fn similarity(a: &FxHashSet<&str>, b: &FxHashSet<&str>) -> f64 {
    if a.len() <= 1 || b.len() <= 1 {
        return 0.0;
    }
    let overlap = a.intersection(b).count();
    if overlap == 0 {
        return 0.0;
    }
    overlap as f64 / ((a.len() as f64).ln() + (b.len() as f64).ln())
}
