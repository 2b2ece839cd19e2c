use crate::error::{Error, Result};
use crate::feature::Feature;
use std::fmt;
use std::str::FromStr;

/// Default number of recommendations per query
pub const DEFAULT_COUNT: usize = 5;

/// Configuration for a recommendation query
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendConfig {
    pub count: usize,
    pub features: Vec<Feature>,
    pub distance: Distance,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            features: Feature::ALL.to_vec(),
            distance: Distance::Cosine,
        }
    }
}

impl RecommendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidConfig("count must be at least 1".to_string()));
        }
        if self.features.is_empty() {
            return Err(Error::InvalidConfig("feature list cannot be empty".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }
}

/// Similarity metric; larger scores always mean more similar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distance {
    #[default]
    Cosine,
    /// Negated L2 distance
    Euclidean,
    Dot,
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distance::Cosine => "cosine",
            Distance::Euclidean => "euclidean",
            Distance::Dot => "dot",
        };
        f.write_str(name)
    }
}

impl FromStr for Distance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cosine" => Ok(Distance::Cosine),
            "euclidean" | "l2" => Ok(Distance::Euclidean),
            "dot" => Ok(Distance::Dot),
            other => Err(Error::InvalidConfig(format!("unknown distance: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecommendConfig::default();
        assert_eq!(config.count, 5);
        assert_eq!(config.features.len(), 10);
        assert_eq!(config.distance, Distance::Cosine);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let zero = RecommendConfig::default().with_count(0);
        assert!(matches!(zero.validate(), Err(Error::InvalidConfig(_))));

        let no_features = RecommendConfig::default().with_features(Vec::new());
        assert!(matches!(no_features.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_distance_parsing() {
        assert_eq!("Cosine".parse::<Distance>().unwrap(), Distance::Cosine);
        assert_eq!("l2".parse::<Distance>().unwrap(), Distance::Euclidean);
        assert_eq!("dot".parse::<Distance>().unwrap(), Distance::Dot);
        assert!("manhattan".parse::<Distance>().is_err());
        assert_eq!(Distance::Euclidean.to_string(), "euclidean");
    }
}
