//! # SongSim
//!
//! Song recommendations from precomputed audio features and cluster labels.
//!
//! SongSim looks up a song, restricts the search to its cluster, ranks the
//! cluster mates by cosine similarity and explains the best match with a
//! raw feature table and a normalized radial comparison.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! songsim --data clean_clustered_songs.csv --song "Blinding Lights"
//! songsim --data clean_clustered_songs.csv --song "Blinding Lights" --format json
//! songsim --data clean_clustered_songs.csv --list
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use songsim::prelude::*;
//!
//! let song = |track: &str, danceability: f64, energy: f64| {
//!     let features = AudioFeatures { danceability, energy, ..AudioFeatures::default() };
//!     Item::new(track, "Artist", 2020, 0, features)
//! };
//! let table = FeatureTable::new(vec![
//!     song("one", 1.0, 0.0),
//!     song("two", 0.0, 1.0),
//!     song("three", 1.0, 0.1),
//! ]).unwrap();
//!
//! let config = RecommendConfig::default()
//!     .with_features(vec![Feature::Danceability, Feature::Energy]);
//! let recommender = Recommender::new(config).unwrap();
//!
//! match recommender.explain("one", &table).unwrap() {
//!     Outcome::Matches(report) => assert_eq!(report.listing[0].track, "three"),
//!     Outcome::NotFound { .. } => unreachable!(),
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `songsim-core` - Vectors, features, items, the feature table and config
//! - `songsim-similarity` - Recommender, pair normalization and projection
//! - `songsim-dataset` - CSV ingestion

pub use songsim_core::{
    AudioFeatures, ClusterId, Distance, Error, Feature, FeatureTable, Item, RecommendConfig, Result,
    Vector, DEFAULT_COUNT,
};

pub use songsim_similarity::{
    normalize_pair, project, recommend, BruteForce, ComparisonTable, ListingRow, NormalizedPair,
    Outcome, RadialSeries, RankedMatch, Recommendation, RecommendationStats, Recommender, Report,
    SimilarityBackend,
};

pub use songsim_dataset::{Dataset, DatasetLoader, LoadSummary};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AudioFeatures, Dataset, DatasetLoader, Distance, Error, Feature, FeatureTable, Item,
        Outcome, RecommendConfig, Recommendation, Recommender, Report, Result,
    };
}
