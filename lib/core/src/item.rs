use crate::feature::{AudioFeatures, Feature};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Cluster label assigned upstream
pub type ClusterId = i64;

/// A song with its descriptive attributes, features and cluster label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Track name, the lookup key
    pub track: String,
    pub artist: String,
    pub year: i32,
    pub cluster: ClusterId,
    pub features: AudioFeatures,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(
        track: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        cluster: ClusterId,
        features: AudioFeatures,
    ) -> Self {
        Self {
            track: track.into(),
            artist: artist.into(),
            year,
            cluster,
            features,
        }
    }

    /// Raw feature vector restricted to `features`
    #[inline]
    pub fn vector(&self, features: &[Feature]) -> Vector {
        self.features.project(features)
    }
}
