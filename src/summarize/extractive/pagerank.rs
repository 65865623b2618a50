//! Power-iteration PageRank over a dense sentence-similarity matrix.

/// PageRank settings shared by the graph-based methods.
#[derive(Debug, Clone)]
pub(crate) struct PageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl PageRank {
    /// Run PageRank on a symmetric weight matrix.
    ///
    /// Rows with no outgoing weight (dangling sentences) distribute their
    /// mass uniformly. Returns the result of the last iteration even when
    /// convergence wasn't achieved.
    pub fn run(&self, weights: &[Vec<f64>]) -> Vec<f64> {
        let n = weights.len();
        if n == 0 {
            return Vec::new();
        }

        let row_sums: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let teleport = (1.0 - self.damping) / n as f64;

        for _ in 0..self.max_iterations {
            let dangling_mass: f64 = (0..n)
                .filter(|&i| row_sums[i] <= f64::EPSILON)
                .map(|i| scores[i])
                .sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            let mut new_scores = vec![teleport + dangling_contribution; n];
            for i in 0..n {
                if row_sums[i] <= f64::EPSILON {
                    continue;
                }
                let share = self.damping * scores[i] / row_sums[i];
                for j in 0..n {
                    if weights[i][j] > 0.0 {
                        new_scores[j] += share * weights[i][j];
                    }
                }
            }

            let delta: f64 = scores
                .iter()
                .zip(&new_scores)
                .map(|(old, new)| (old - new).abs())
                .sum();
            scores = new_scores;

            if delta < self.threshold {
                break;
            }
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_connected_nodes_rank_higher() {
        // Node 0 is similar to everyone; 2 and 3 only to node 0.
        let weights = vec![
            vec![0.0, 1.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
        ];
        let scores = PageRank::default().run(&weights);
        assert!(scores[0] > scores[1]);
        assert!(scores[0] > scores[2]);
    }

    #[test]
    fn empty_graph_yields_no_scores() {
        assert!(PageRank::default().run(&[]).is_empty());
    }

    #[test]
    fn scores_sum_to_one() {
        let weights = vec![vec![0.0, 2.0], vec![2.0, 0.0]];
        let scores = PageRank::default().run(&weights);
        let total: f64 = scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}
