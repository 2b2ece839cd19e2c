//! Presentation records for a recommendation
//!
//! Turns a [`Recommendation`] into the pieces a front end renders: the
//! ranked listing, a raw side-by-side feature table for the query and its
//! top match, and a closed radial series of the normalized pair.

use crate::normalize::normalize_pair;
use crate::rank::{RankedMatch, Recommendation};
use serde::Serialize;
use songsim_core::{ClusterId, Error, Feature, Result, Vector};
use std::f64::consts::TAU;

/// One row of the ranked listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub track: String,
    pub artist: String,
    pub year: i32,
}

impl ListingRow {
    pub fn from_match(ranked: &RankedMatch) -> Self {
        Self {
            track: ranked.item.track.clone(),
            artist: ranked.item.artist.clone(),
            year: ranked.item.year,
        }
    }

    pub fn from_matches(matches: &[RankedMatch]) -> Vec<Self> {
        matches.iter().map(Self::from_match).collect()
    }
}

/// Raw feature values of the query and its top match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub query_label: String,
    pub match_label: String,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub feature: Feature,
    pub query: f64,
    pub matched: f64,
}

impl ComparisonTable {
    pub fn new(
        features: &[Feature],
        query: &Vector,
        matched: &Vector,
        query_label: impl Into<String>,
        match_label: impl Into<String>,
    ) -> Result<Self> {
        check_lengths(features, query.as_slice(), matched.as_slice())?;

        let rows = features
            .iter()
            .zip(query.iter().zip(matched.iter()))
            .map(|(&feature, (&query, &matched))| ComparisonRow {
                feature,
                query,
                matched,
            })
            .collect();

        Ok(Self {
            query_label: query_label.into(),
            match_label: match_label.into(),
            rows,
        })
    }

    /// (query, match) values for a feature
    pub fn get(&self, feature: Feature) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .find(|row| row.feature == feature)
            .map(|row| (row.query, row.matched))
    }
}

/// A closed polygon of normalized values, one spoke per feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialSeries {
    pub query_label: String,
    pub match_label: String,
    /// `features + 1` points; the last repeats the first
    pub points: Vec<RadialPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadialPoint {
    pub feature: Feature,
    /// Radians, evenly spaced from 0
    pub angle: f64,
    pub query: f64,
    pub matched: f64,
}

impl RadialSeries {
    /// Build the closed series; all three inputs must have the same length
    pub fn new(
        features: &[Feature],
        query: &[f64],
        matched: &[f64],
        query_label: impl Into<String>,
        match_label: impl Into<String>,
    ) -> Result<Self> {
        check_lengths(features, query, matched)?;

        let n = features.len();
        let mut points: Vec<RadialPoint> = features
            .iter()
            .zip(query.iter().zip(matched))
            .enumerate()
            .map(|(i, (&feature, (&query, &matched)))| RadialPoint {
                feature,
                angle: TAU * i as f64 / n as f64,
                query,
                matched,
            })
            .collect();

        if let Some(&first) = points.first() {
            points.push(first);
        }

        Ok(Self {
            query_label: query_label.into(),
            match_label: match_label.into(),
            points,
        })
    }

    /// Number of spokes, excluding the closing point
    pub fn spokes(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }
}

fn check_lengths(features: &[Feature], query: &[f64], matched: &[f64]) -> Result<()> {
    if features.len() != query.len() || features.len() != matched.len() {
        return Err(Error::LengthMismatch {
            features: features.len(),
            query: query.len(),
            matched: matched.len(),
        });
    }
    Ok(())
}

/// Summary of one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationStats {
    pub cluster: Option<ClusterId>,
    /// Songs in the query's cluster, the query included
    pub cluster_size: usize,
    pub results_count: usize,
    pub best_score: f64,
    pub avg_score: f64,
}

impl RecommendationStats {
    pub fn compute(recommendation: &Recommendation) -> Self {
        let scores = recommendation.scores();
        let (best_score, avg_score) = if scores.is_empty() {
            (0.0, 0.0)
        } else {
            // Results are sorted
            (scores[0], scores.iter().sum::<f64>() / scores.len() as f64)
        };

        Self {
            cluster: recommendation.cluster,
            cluster_size: recommendation.cluster_size,
            results_count: scores.len(),
            best_score,
            avg_score,
        }
    }
}

/// Everything needed to present a successful query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub query: String,
    pub listing: Vec<ListingRow>,
    pub comparison: ComparisonTable,
    pub radial: RadialSeries,
    pub stats: RecommendationStats,
}

/// Presentation payload: either a full report or the not-found signal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    NotFound { query: String },
    Matches(Report),
}

impl Outcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound { .. })
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Outcome::Matches(report) => Some(report),
            Outcome::NotFound { .. } => None,
        }
    }
}

/// Project a recommendation for presentation
///
/// An empty recommendation becomes [`Outcome::NotFound`]. A feature list
/// that does not match the vector lengths is an error.
pub fn project(
    query_label: &str,
    recommendation: &Recommendation,
    features: &[Feature],
) -> Result<Outcome> {
    let Some(top) = recommendation.top() else {
        return Ok(Outcome::NotFound {
            query: query_label.to_string(),
        });
    };
    let match_label = top.item.track.as_str();

    let comparison = ComparisonTable::new(
        features,
        &recommendation.query,
        &top.vector,
        query_label,
        match_label,
    )?;
    let normalized = normalize_pair(&recommendation.query, &top.vector)?;
    let radial = RadialSeries::new(
        features,
        normalized.query.as_slice(),
        normalized.matched.as_slice(),
        query_label,
        match_label,
    )?;

    Ok(Outcome::Matches(Report {
        query: query_label.to_string(),
        listing: ListingRow::from_matches(&recommendation.matches),
        comparison,
        radial,
        stats: RecommendationStats::compute(recommendation),
    }))
}
