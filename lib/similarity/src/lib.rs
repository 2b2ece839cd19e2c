//! # SongSim Similarity
//!
//! Cluster-scoped recommendation engine for songs with precomputed audio
//! features.
//!
//! ## Features
//!
//! - **Cluster restriction**: candidates come only from the query's cluster
//! - **Pluggable scoring**: brute-force cosine by default, any
//!   [`SimilarityBackend`] can replace it
//! - **Pair normalization**: joint min-max scaling of query and top match
//! - **Projection**: listing, raw comparison table and closed radial series
//!
//! ## Example
//!
//! ```rust
//! use songsim_core::{AudioFeatures, Feature, FeatureTable, Item, RecommendConfig};
//! use songsim_similarity::Recommender;
//!
//! let song = |track: &str, energy: f64| {
//!     let features = AudioFeatures { energy, danceability: 0.5, ..AudioFeatures::default() };
//!     Item::new(track, "Artist", 2020, 0, features)
//! };
//! let table = FeatureTable::new(vec![song("a", 0.9), song("b", 0.8), song("c", 0.1)]).unwrap();
//!
//! let config = RecommendConfig::default()
//!     .with_features(vec![Feature::Danceability, Feature::Energy])
//!     .with_count(2);
//! let recommender = Recommender::new(config).unwrap();
//!
//! let rec = recommender.recommend("a", &table);
//! assert_eq!(rec.matches[0].item.track, "b");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Feature   │────>│ Recommender │────>│ Normalizer  │
//! │    Table    │     │ (cluster +  │     │ (query, top │
//! └─────────────┘     │   backend)  │     │   match)    │
//!                     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            │  ┌─────────────┐  │
//!                            └─>│ Projection  │<─┘
//!                               │  (Outcome)  │
//!                               └─────────────┘
//! ```

pub mod normalize;
pub mod projection;
pub mod rank;
pub mod scorer;

pub use normalize::{normalize_pair, NormalizedPair};
pub use projection::{
    project, ComparisonRow, ComparisonTable, ListingRow, Outcome, RadialPoint, RadialSeries,
    RecommendationStats, Report,
};
pub use rank::{recommend, RankedMatch, Recommendation, Recommender};
pub use scorer::{BruteForce, SimilarityBackend};
