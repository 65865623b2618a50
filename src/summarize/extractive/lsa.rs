//! Latent semantic analysis sentence scoring.
//!
//! Builds the term-sentence matrix, takes the leading singular directions of
//! its sentence-space Gram matrix by deflated power iteration, and scores each
//! sentence by its weighted length across those directions (the
//! Steinberger-Jezek formulation). The iteration starts from a fixed vector,
//! so results are deterministic.

use rustc_hash::FxHashMap;

use super::SentenceUnit;

/// Number of singular directions to keep.
const DIMENSIONS: usize = 3;
const MAX_ITERATIONS: usize = 100;
const CONVERGENCE: f64 = 1e-9;

pub(crate) fn score(units: &[SentenceUnit]) -> Vec<f64> {
    let n = units.len();

    let mut vocabulary: FxHashMap<&str, usize> = FxHashMap::default();
    for unit in units {
        for term in &unit.terms {
            let next = vocabulary.len();
            vocabulary.entry(term.as_str()).or_insert(next);
        }
    }

    // Term-count column per sentence
    let columns: Vec<Vec<f64>> = units
        .iter()
        .map(|unit| {
            let mut column = vec![0.0; vocabulary.len()];
            for term in &unit.terms {
                column[vocabulary[term.as_str()]] += 1.0;
            }
            column
        })
        .collect();

    // Sentence-space Gram matrix
    let mut gram = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let dot = dot(&columns[i], &columns[j]);
            gram[i][j] = dot;
            gram[j][i] = dot;
        }
    }

    let mut squared = vec![0.0; n];
    for _ in 0..DIMENSIONS.min(n) {
        let (eigenvalue, eigenvector) = dominant_eigenpair(&gram);
        if eigenvalue <= 1e-9 {
            break;
        }
        for i in 0..n {
            squared[i] += eigenvalue * eigenvector[i] * eigenvector[i];
        }
        deflate(&mut gram, eigenvalue, &eigenvector);
    }

    squared.into_iter().map(f64::sqrt).collect()
}

/// Largest eigenpair of a symmetric positive semi-definite matrix.
fn dominant_eigenpair(matrix: &[Vec<f64>]) -> (f64, Vec<f64>) {
    let n = matrix.len();
    // Fixed, non-uniform start so the iteration is reproducible and is not
    // orthogonal to the dominant direction in the common all-positive case.
    let mut v: Vec<f64> = (0..n).map(|i| 1.0 / (i + 1) as f64).collect();
    normalize(&mut v);

    for _ in 0..MAX_ITERATIONS {
        let mut next = multiply(matrix, &v);
        let norm = length(&next);
        if norm <= 1e-12 {
            return (0.0, v);
        }
        for x in &mut next {
            *x /= norm;
        }
        let delta: f64 = v
            .iter()
            .zip(&next)
            .map(|(a, b)| (a - b).abs())
            .sum();
        v = next;
        if delta < CONVERGENCE {
            break;
        }
    }

    let eigenvalue = dot(&v, &multiply(matrix, &v));
    (eigenvalue, v)
}

fn deflate(matrix: &mut [Vec<f64>], eigenvalue: f64, eigenvector: &[f64]) {
    let n = matrix.len();
    for i in 0..n {
        for j in 0..n {
            matrix[i][j] -= eigenvalue * eigenvector[i] * eigenvector[j];
        }
    }
}

fn multiply(matrix: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    matrix.iter().map(|row| dot(row, v)).collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn length(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

fn normalize(v: &mut [f64]) {
    let norm = length(v);
    if norm > 0.0 {
        for x in v {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(index: usize, terms: &[&str]) -> SentenceUnit {
        SentenceUnit {
            index,
            text: terms.join(" "),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn sentences_on_the_main_topic_outrank_outliers() {
        let units = vec![
            unit(0, &["rust", "memory", "safety", "compiler"]),
            unit(1, &["rust", "memory", "compiler", "borrow"]),
            unit(2, &["lunch", "sandwich"]),
        ];
        let scores = score(&units);
        assert!(scores[0] > scores[2]);
        assert!(scores[1] > scores[2]);
    }

    #[test]
    fn scoring_is_deterministic() {
        let units = vec![
            unit(0, &["alpha", "beta", "gamma"]),
            unit(1, &["alpha", "delta"]),
            unit(2, &["beta", "gamma", "delta"]),
        ];
        assert_eq!(score(&units), score(&units));
    }
}
