//! # SongSim Dataset
//!
//! CSV ingestion for clustered song datasets.
//!
//! The loader expects a header row with `Track`, `Artist`, `Year`, `Cluster`
//! and the ten feature columns (`Danceability` .. `Duration_min`). Rows are
//! deserialized into a typed record and validated once, producing an
//! immutable [`FeatureTable`](songsim_core::FeatureTable).
//!
//! ```rust
//! use songsim_dataset::DatasetLoader;
//!
//! let data = "\
//! Track,Artist,Year,Cluster,Danceability,Energy,Speechiness,Acousticness,Instrumentalness,Liveness,Valence,Loudness,Tempo,Duration_min
//! Song A,Artist,2020,0,0.5,0.7,0.05,0.1,0.0,0.1,0.6,-5.0,120.0,3.2";
//!
//! let dataset = DatasetLoader::from_reader(data.as_bytes()).unwrap();
//! assert_eq!(dataset.summary.rows, 1);
//! ```

pub mod loader;

pub use loader::{Dataset, DatasetLoader, LoadSummary, KEY_COLUMNS};
