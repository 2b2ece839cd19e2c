//! Named audio feature dimensions
//!
//! Every song carries the same ten numeric features. [`Feature`] names a
//! single dimension and [`AudioFeatures`] stores one value per dimension,
//! so column lookups are resolved at compile time instead of by string.

use crate::error::{Error, Result};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten audio feature dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Danceability,
    Energy,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Loudness,
    Tempo,
    Duration,
}

impl Feature {
    /// All features in canonical dimension order
    pub const ALL: [Feature; 10] = [
        Feature::Danceability,
        Feature::Energy,
        Feature::Speechiness,
        Feature::Acousticness,
        Feature::Instrumentalness,
        Feature::Liveness,
        Feature::Valence,
        Feature::Loudness,
        Feature::Tempo,
        Feature::Duration,
    ];

    /// Column header used by clustered song datasets
    pub fn column(self) -> &'static str {
        match self {
            Feature::Danceability => "Danceability",
            Feature::Energy => "Energy",
            Feature::Speechiness => "Speechiness",
            Feature::Acousticness => "Acousticness",
            Feature::Instrumentalness => "Instrumentalness",
            Feature::Liveness => "Liveness",
            Feature::Valence => "Valence",
            Feature::Loudness => "Loudness",
            Feature::Tempo => "Tempo",
            Feature::Duration => "Duration_min",
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Speechiness => "speechiness",
            Feature::Acousticness => "acousticness",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Liveness => "liveness",
            Feature::Valence => "valence",
            Feature::Loudness => "loudness",
            Feature::Tempo => "tempo",
            Feature::Duration => "duration",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Feature {
    type Err = Error;

    /// Accepts both the short name and the dataset column header, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Feature::ALL
            .iter()
            .copied()
            .find(|f| {
                f.name().eq_ignore_ascii_case(needle) || f.column().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownFeature(s.to_string()))
    }
}

/// Feature values of a single song
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub loudness: f64,
    pub tempo: f64,
    pub duration: f64,
}

impl AudioFeatures {
    /// Build from values in [`Feature::ALL`] order
    pub fn from_array(values: [f64; 10]) -> Self {
        let [
            danceability,
            energy,
            speechiness,
            acousticness,
            instrumentalness,
            liveness,
            valence,
            loudness,
            tempo,
            duration,
        ] = values;
        Self {
            danceability,
            energy,
            speechiness,
            acousticness,
            instrumentalness,
            liveness,
            valence,
            loudness,
            tempo,
            duration,
        }
    }

    #[inline]
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Danceability => self.danceability,
            Feature::Energy => self.energy,
            Feature::Speechiness => self.speechiness,
            Feature::Acousticness => self.acousticness,
            Feature::Instrumentalness => self.instrumentalness,
            Feature::Liveness => self.liveness,
            Feature::Valence => self.valence,
            Feature::Loudness => self.loudness,
            Feature::Tempo => self.tempo,
            Feature::Duration => self.duration,
        }
    }

    /// Project onto the given features, in the given order
    pub fn project(&self, features: &[Feature]) -> Vector {
        Vector::new(features.iter().map(|f| self.get(*f)).collect())
    }

    /// First feature holding a NaN or infinite value
    pub fn first_non_finite(&self) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| !self.get(*f).is_finite())
    }
}
