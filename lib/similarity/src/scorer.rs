//! Similarity backends
//!
//! The recommender only asks a backend to score cluster members against a
//! query. Brute force is the default; an approximate index can implement
//! [`SimilarityBackend`] without touching ranking or projection.

use songsim_core::{Distance, Vector};

/// Scores candidates against a query vector
pub trait SimilarityBackend {
    /// One score per candidate, in candidate order. Larger means more similar.
    fn score(&self, query: &Vector, candidates: &[Vector]) -> Vec<f64>;
}

/// Exhaustive scoring over every candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BruteForce {
    distance: Distance,
}

impl BruteForce {
    pub fn new(distance: Distance) -> Self {
        Self { distance }
    }

    #[inline]
    fn score_one(&self, query: &Vector, candidate: &Vector) -> f64 {
        match self.distance {
            Distance::Cosine => query.cosine_similarity(candidate),
            Distance::Euclidean => -query.l2_distance(candidate),
            Distance::Dot => query.dot(candidate),
        }
    }
}

impl SimilarityBackend for BruteForce {
    fn score(&self, query: &Vector, candidates: &[Vector]) -> Vec<f64> {
        candidates
            .iter()
            .map(|candidate| self.score_one(query, candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectors() -> Vec<Vector> {
        vec![
            Vector::new(vec![1.0, 0.0]),
            Vector::new(vec![0.0, 1.0]),
            Vector::new(vec![1.0, 0.1]),
        ]
    }

    #[test]
    fn test_cosine_scores() {
        let backend = BruteForce::default();
        let query = Vector::new(vec![1.0, 0.0]);
        let scores = backend.score(&query, &vectors());

        assert_eq!(scores.len(), 3);
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert!(scores[1].abs() < 1e-12);
        assert!((scores[2] - 0.995).abs() < 1e-3);
    }

    #[test]
    fn test_euclidean_is_negated() {
        let backend = BruteForce::new(Distance::Euclidean);
        let query = Vector::new(vec![1.0, 0.0]);
        let scores = backend.score(&query, &vectors());

        assert_eq!(scores[0], 0.0);
        assert!(scores[2] > scores[1]);
        assert!(scores.iter().all(|s| *s <= 0.0));
    }

    #[test]
    fn test_dot_scores() {
        let backend = BruteForce::new(Distance::Dot);
        let query = Vector::new(vec![2.0, 3.0]);
        let scores = backend.score(&query, &vectors());
        let expected = [2.0, 3.0, 2.3];
        for (score, want) in scores.iter().zip(expected) {
            assert!((score - want).abs() < 1e-12, "expected {}, got {}", want, score);
        }
    }

    #[test]
    fn test_empty_candidates() {
        let backend = BruteForce::default();
        assert!(backend.score(&Vector::new(vec![1.0]), &[]).is_empty());
    }
}
