//! LexRank sentence scoring.
//!
//! Sentences become TF-IDF vectors; pairs whose cosine similarity clears the
//! threshold are connected, and PageRank over that graph gives the salience.

use rustc_hash::FxHashMap;

use super::SentenceUnit;
use super::pagerank::PageRank;

/// Minimum cosine similarity for an edge, LexRank's usual default.
const SIMILARITY_THRESHOLD: f64 = 0.1;

pub(crate) fn score(units: &[SentenceUnit]) -> Vec<f64> {
    let n = units.len();

    // Document frequency per term
    let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
    for unit in units {
        let mut seen: Vec<&str> = unit.terms.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    // TF-IDF vector per sentence
    let vectors: Vec<FxHashMap<&str, f64>> = units
        .iter()
        .map(|unit| {
            let mut tf: FxHashMap<&str, f64> = FxHashMap::default();
            for term in &unit.terms {
                *tf.entry(term.as_str()).or_insert(0.0) += 1.0;
            }
            for (term, value) in tf.iter_mut() {
                let df = document_frequency[term] as f64;
                *value *= (n as f64 / df).ln().max(1e-3);
            }
            tf
        })
        .collect();

    let mut weights = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if cosine(&vectors[i], &vectors[j]) >= SIMILARITY_THRESHOLD {
                weights[i][j] = 1.0;
                weights[j][i] = 1.0;
            }
        }
    }

    PageRank::default().run(&weights)
}

fn cosine(a: &FxHashMap<&str, f64>, b: &FxHashMap<&str, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, va)| b.get(term).map(|vb| va * vb))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a: f64 = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|v| v * v).sum::<f64>().sqrt();
    dot / (norm_a * norm_b)
}
