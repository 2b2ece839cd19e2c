//! # SongSim Core
//!
//! Core data structures for the SongSim recommendation engine.
//!
//! - [`Vector`] - Dense feature vector with cosine / L2 / dot operations
//! - [`Feature`] and [`AudioFeatures`] - The ten named audio dimensions
//! - [`Item`] - A song with its attributes, features and cluster label
//! - [`FeatureTable`] - Immutable, indexed collection of items
//! - [`RecommendConfig`] - Query configuration
//!
//! ## Example
//!
//! ```rust
//! use songsim_core::{AudioFeatures, FeatureTable, Item};
//!
//! let items = vec![
//!     Item::new("Song A", "Artist", 2019, 0, AudioFeatures::default()),
//!     Item::new("Song B", "Artist", 2020, 0, AudioFeatures::default()),
//! ];
//! let table = FeatureTable::new(items).unwrap();
//!
//! assert_eq!(table.cluster_size(0), 2);
//! assert!(table.find("Song A").is_some());
//! ```

pub mod config;
pub mod error;
pub mod feature;
pub mod item;
pub mod table;
pub mod vector;

pub use config::{Distance, RecommendConfig, DEFAULT_COUNT};
pub use error::{Error, Result};
pub use feature::{AudioFeatures, Feature};
pub use item::{ClusterId, Item};
pub use table::FeatureTable;
pub use vector::Vector;
