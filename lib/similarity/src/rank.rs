//! Cluster-scoped recommendation
//!
//! Looks up the query song, restricts candidates to its cluster, scores them
//! with a [`SimilarityBackend`] and keeps the best `count` matches.

use crate::projection::{project, Outcome};
use crate::scorer::{BruteForce, SimilarityBackend};
use ordered_float::OrderedFloat;
use serde::Serialize;
use songsim_core::{ClusterId, Feature, FeatureTable, Item, RecommendConfig, Result, Vector};
use std::cmp::Reverse;
use tracing::{debug, warn};

/// A candidate song with its raw feature vector and score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub item: Item,
    /// Raw (unnormalized) vector over the configured features
    pub vector: Vector,
    pub score: f64,
}

/// Ranked matches for one query
///
/// An empty `matches` list means "not found or no matches"; `query` is also
/// empty when the song was not found at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendation {
    /// Raw query vector over the configured features
    pub query: Vector,
    pub matches: Vec<RankedMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterId>,
    /// Number of songs in the query's cluster, the query included
    pub cluster_size: usize,
}

impl Recommendation {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_found(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn top(&self) -> Option<&RankedMatch> {
        self.matches.first()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.matches.iter().map(|m| m.score).collect()
    }
}

/// Recommends songs from the query's own cluster
#[derive(Debug, Clone)]
pub struct Recommender<B = BruteForce> {
    config: RecommendConfig,
    backend: B,
}

impl Recommender<BruteForce> {
    /// Create a brute-force recommender using the configured distance
    pub fn new(config: RecommendConfig) -> Result<Self> {
        let backend = BruteForce::new(config.distance);
        Self::with_backend(config, backend)
    }
}

impl<B: SimilarityBackend> Recommender<B> {
    pub fn with_backend(config: RecommendConfig, backend: B) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, backend })
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    pub fn features(&self) -> &[Feature] {
        &self.config.features
    }

    /// Rank the query's cluster mates by similarity
    ///
    /// Every cluster member whose track equals `key` is excluded, and ties
    /// keep table order.
    pub fn recommend(&self, key: &str, table: &FeatureTable) -> Recommendation {
        let Some(query_item) = table.find(key) else {
            debug!(track = key, "query not found in table");
            return Recommendation::not_found();
        };

        let members = table.cluster_members(query_item.cluster);
        if !members.iter().any(|m| m.track == key) {
            warn!(
                track = key,
                cluster = query_item.cluster,
                "query missing from its own cluster"
            );
            return Recommendation::not_found();
        }

        let features = self.features();
        let query = query_item.vector(features);
        let vectors: Vec<Vector> = members.iter().map(|m| m.vector(features)).collect();
        let scores = self.backend.score(&query, &vectors);

        let mut ranked: Vec<(usize, f64)> = scores
            .into_iter()
            .enumerate()
            .take(members.len())
            .filter(|(idx, _)| members[*idx].track != key)
            .collect();

        // sort_by_key is stable, so equal scores keep cluster order
        ranked.sort_by_key(|&(_, score)| Reverse(OrderedFloat(score)));
        ranked.truncate(self.config.count);

        debug!(
            track = key,
            cluster = query_item.cluster,
            cluster_size = members.len(),
            results = ranked.len(),
            "ranked cluster candidates"
        );

        let matches = ranked
            .into_iter()
            .map(|(idx, score)| RankedMatch {
                item: members[idx].clone(),
                vector: vectors[idx].clone(),
                score,
            })
            .collect();

        Recommendation {
            query,
            matches,
            cluster: Some(query_item.cluster),
            cluster_size: members.len(),
        }
    }

    /// Recommend and project the result for presentation
    pub fn explain(&self, key: &str, table: &FeatureTable) -> Result<Outcome> {
        let recommendation = self.recommend(key, table);
        project(key, &recommendation, self.features())
    }
}

/// One-shot recommendation with the default brute-force cosine backend
pub fn recommend(
    key: &str,
    table: &FeatureTable,
    features: &[Feature],
    count: usize,
) -> Result<Recommendation> {
    let config = RecommendConfig::default()
        .with_features(features.to_vec())
        .with_count(count);
    Ok(Recommender::new(config)?.recommend(key, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use songsim_core::{AudioFeatures, Distance, Error};

    fn features(danceability: f64, energy: f64) -> AudioFeatures {
        AudioFeatures {
            danceability,
            energy,
            ..AudioFeatures::default()
        }
    }

    const TWO: [Feature; 2] = [Feature::Danceability, Feature::Energy];

    fn scenario_table() -> FeatureTable {
        FeatureTable::new(vec![
            Item::new("one", "A", 2001, 0, features(1.0, 0.0)),
            Item::new("two", "B", 2002, 0, features(0.0, 1.0)),
            Item::new("three", "C", 2003, 0, features(1.0, 0.1)),
        ])
        .unwrap()
    }

    fn tracks(rec: &Recommendation) -> Vec<&str> {
        rec.matches.iter().map(|m| m.item.track.as_str()).collect()
    }

    #[test]
    fn test_three_item_scenario() {
        let rec = recommend("one", &scenario_table(), &TWO, 5).unwrap();

        assert_eq!(tracks(&rec), vec!["three", "two"]);
        assert!((rec.matches[0].score - 0.995).abs() < 1e-3);
        assert!(rec.matches[1].score.abs() < 1e-12);
        assert_eq!(rec.query.as_slice(), &[1.0, 0.0]);
        assert_eq!(rec.matches[0].vector.as_slice(), &[1.0, 0.1]);
        assert_eq!(rec.cluster, Some(0));
        assert_eq!(rec.cluster_size, 3);
    }

    #[test]
    fn test_not_found() {
        let rec = recommend("Nonexistent Song XYZ", &scenario_table(), &TWO, 5).unwrap();
        assert!(rec.is_empty());
        assert!(!rec.is_found());
        assert!(rec.query.is_empty());
        assert_eq!(rec.cluster, None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let rec = recommend("ONE", &scenario_table(), &TWO, 5).unwrap();
        assert!(!rec.is_found());
    }

    #[test]
    fn test_restricted_to_cluster() {
        let table = FeatureTable::new(vec![
            Item::new("q", "A", 2000, 1, features(1.0, 0.0)),
            Item::new("same-direction-other-cluster", "B", 2000, 2, features(1.0, 0.0)),
            Item::new("mate", "C", 2000, 1, features(0.0, 1.0)),
        ])
        .unwrap();

        let rec = recommend("q", &table, &TWO, 5).unwrap();
        assert_eq!(tracks(&rec), vec!["mate"]);
        assert!(rec.matches.iter().all(|m| m.item.cluster == 1));
    }

    #[test]
    fn test_truncates_to_count() {
        let rec = recommend("one", &scenario_table(), &TWO, 1).unwrap();
        assert_eq!(tracks(&rec), vec!["three"]);
    }

    #[test]
    fn test_singleton_cluster_has_no_matches() {
        let table = FeatureTable::new(vec![
            Item::new("alone", "A", 2000, 9, features(1.0, 1.0)),
            Item::new("other", "B", 2000, 0, features(1.0, 1.0)),
        ])
        .unwrap();

        let rec = recommend("alone", &table, &TWO, 5).unwrap();
        assert!(rec.is_empty());
        assert!(rec.is_found());
        assert_eq!(rec.cluster_size, 1);
    }

    #[test]
    fn test_duplicate_vector_is_kept_and_self_excluded() {
        // A different song with an identical vector ties with the query's
        // self-similarity; only the query itself is dropped.
        let table = FeatureTable::new(vec![
            Item::new("twin", "A", 2000, 0, features(0.5, 0.5)),
            Item::new("q", "B", 2000, 0, features(0.5, 0.5)),
            Item::new("far", "C", 2000, 0, features(1.0, 0.0)),
        ])
        .unwrap();

        let rec = recommend("q", &table, &TWO, 5).unwrap();
        assert_eq!(tracks(&rec), vec!["twin", "far"]);
    }

    #[test]
    fn test_huge_features_rank_by_direction() {
        let table = FeatureTable::new(vec![
            Item::new("q", "A", 2000, 0, features(1e200, 0.0)),
            Item::new("orthogonal", "B", 2000, 0, features(0.0, 1.0)),
            Item::new("same", "C", 2000, 0, features(1.0, 0.0)),
        ])
        .unwrap();

        let rec = recommend("q", &table, &TWO, 5).unwrap();
        assert_eq!(tracks(&rec), vec!["same", "orthogonal"]);
        assert!((rec.matches[0].score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let table = FeatureTable::new(vec![
            Item::new("q", "A", 2000, 0, features(1.0, 0.0)),
            Item::new("b", "B", 2000, 0, features(0.0, 1.0)),
            Item::new("c", "C", 2000, 0, features(0.0, 2.0)),
            Item::new("d", "D", 2000, 0, features(0.0, 3.0)),
        ])
        .unwrap();

        let rec = recommend("q", &table, &TWO, 5).unwrap();
        assert_eq!(tracks(&rec), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_scores_non_increasing() {
        let items = (0..20)
            .map(|i| {
                let x = i as f64;
                Item::new(format!("t{}", i), "A", 2000, i % 2, features(x.sin(), x.cos()))
            })
            .collect();
        let table = FeatureTable::new(items).unwrap();

        for item in table.items() {
            let rec = recommend(&item.track, &table, &TWO, 4).unwrap();
            assert!(rec.len() <= 4);
            assert!(rec.matches.iter().all(|m| m.item.track != item.track));
            assert!(rec.matches.iter().all(|m| m.item.cluster == item.cluster));
            let scores = rec.scores();
            assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_euclidean_backend() {
        let config = RecommendConfig::default()
            .with_features(TWO.to_vec())
            .with_distance(Distance::Euclidean);
        let recommender = Recommender::new(config).unwrap();

        let rec = recommender.recommend("one", &scenario_table());
        assert_eq!(tracks(&rec), vec!["three", "two"]);
        assert!(rec.matches[0].score > rec.matches[1].score);
    }

    #[test]
    fn test_invalid_count_rejected() {
        let err = recommend("one", &scenario_table(), &TWO, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_custom_backend() {
        struct Reversed;
        impl SimilarityBackend for Reversed {
            fn score(&self, _query: &Vector, candidates: &[Vector]) -> Vec<f64> {
                (0..candidates.len()).map(|i| i as f64).collect()
            }
        }

        let config = RecommendConfig::default().with_features(TWO.to_vec());
        let recommender = Recommender::with_backend(config, Reversed).unwrap();
        let rec = recommender.recommend("one", &scenario_table());
        assert_eq!(tracks(&rec), vec!["three", "two"]);
        assert_eq!(rec.scores(), vec![2.0, 1.0]);
    }
}
