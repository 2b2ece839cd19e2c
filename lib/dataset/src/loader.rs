use serde::{Deserialize, Deserializer};
use songsim_core::{AudioFeatures, ClusterId, Error, Feature, FeatureTable, Item, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Descriptive and label columns every dataset must carry
pub const KEY_COLUMNS: [&str; 4] = ["Track", "Artist", "Year", "Cluster"];

/// One CSV row of a clustered song dataset
#[derive(Debug, Deserialize)]
struct SongRecord {
    #[serde(rename = "Track")]
    track: String,
    #[serde(rename = "Artist")]
    artist: String,
    #[serde(rename = "Year", deserialize_with = "integral")]
    year: i64,
    #[serde(rename = "Cluster", deserialize_with = "integral")]
    cluster: i64,
    #[serde(rename = "Danceability")]
    danceability: f64,
    #[serde(rename = "Energy")]
    energy: f64,
    #[serde(rename = "Speechiness")]
    speechiness: f64,
    #[serde(rename = "Acousticness")]
    acousticness: f64,
    #[serde(rename = "Instrumentalness")]
    instrumentalness: f64,
    #[serde(rename = "Liveness")]
    liveness: f64,
    #[serde(rename = "Valence")]
    valence: f64,
    #[serde(rename = "Loudness")]
    loudness: f64,
    #[serde(rename = "Tempo")]
    tempo: f64,
    #[serde(rename = "Duration_min")]
    duration: f64,
}

/// Accepts `2019` as well as `2019.0`, which dataframe exports often write
fn integral<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(serde::de::Error::custom(format!("expected an integer, got {}", value)));
    }
    if !(-LIMIT..LIMIT).contains(&value) {
        return Err(serde::de::Error::custom(format!("integer out of range: {}", value)));
    }
    Ok(value as i64)
}

impl SongRecord {
    fn into_item(self) -> Result<Item> {
        let year = i32::try_from(self.year).map_err(|_| {
            Error::Dataset(format!("year out of range for '{}': {}", self.track, self.year))
        })?;
        let cluster: ClusterId = self.cluster;

        let features = AudioFeatures {
            danceability: self.danceability,
            energy: self.energy,
            speechiness: self.speechiness,
            acousticness: self.acousticness,
            instrumentalness: self.instrumentalness,
            liveness: self.liveness,
            valence: self.valence,
            loudness: self.loudness,
            tempo: self.tempo,
            duration: self.duration,
        };

        Ok(Item::new(self.track, self.artist, year, cluster, features))
    }
}

/// Counts reported after a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows: usize,
    pub clusters: usize,
    pub duplicate_tracks: usize,
}

/// A validated feature table with its load summary
#[derive(Debug, Clone)]
pub struct Dataset {
    pub table: FeatureTable,
    pub summary: LoadSummary,
}

/// Reads clustered song datasets from CSV
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a dataset from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        debug!("Loading dataset from {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a dataset from any CSV source with a header row
    ///
    /// Missing required columns are reported before any row is parsed;
    /// extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::Dataset(format!("failed to read headers: {}", e)))?
            .clone();

        let required = KEY_COLUMNS
            .iter()
            .copied()
            .chain(Feature::ALL.iter().map(|f| f.column()));
        for column in required {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn(column.to_string()));
            }
        }

        let mut items = Vec::new();
        for record in reader.deserialize::<SongRecord>() {
            let record = record.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                Error::Dataset(format!("line {}: {}", line, e))
            })?;
            items.push(record.into_item()?);
        }

        let table = FeatureTable::new(items)?;
        let summary = LoadSummary {
            rows: table.len(),
            clusters: table.cluster_labels().len(),
            duplicate_tracks: table.duplicate_tracks(),
        };

        if summary.duplicate_tracks > 0 {
            warn!(
                "{} rows repeat an earlier track name; lookups use the first occurrence",
                summary.duplicate_tracks
            );
        }
        info!("Loaded {} songs across {} clusters", summary.rows, summary.clusters);

        Ok(Dataset { table, summary })
    }
}
