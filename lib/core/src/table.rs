use crate::error::{Error, Result};
use crate::item::{ClusterId, Item};
use ahash::AHashMap;

/// The immutable set of songs the engine searches
///
/// Built once at startup and then only read. Track lookup and cluster
/// membership are indexed at construction so queries never scan the full
/// table.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    items: Vec<Item>,
    by_track: AHashMap<String, usize>,
    clusters: AHashMap<ClusterId, Vec<usize>>,
}

impl FeatureTable {
    /// Build a table, rejecting rows with non-finite feature values
    ///
    /// When a track name occurs more than once the first row wins lookups.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut by_track = AHashMap::with_capacity(items.len());
        let mut clusters: AHashMap<ClusterId, Vec<usize>> = AHashMap::new();

        for (idx, item) in items.iter().enumerate() {
            if let Some(feature) = item.features.first_non_finite() {
                return Err(Error::NonFiniteFeature {
                    track: item.track.clone(),
                    feature: feature.column().to_string(),
                });
            }
            by_track.entry(item.track.clone()).or_insert(idx);
            clusters.entry(item.cluster).or_default().push(idx);
        }

        Ok(Self {
            items,
            by_track,
            clusters,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Exact, case-sensitive lookup by track name
    pub fn find(&self, track: &str) -> Option<&Item> {
        self.by_track.get(track).map(|&idx| &self.items[idx])
    }

    /// Members of a cluster in table order
    pub fn cluster_members(&self, cluster: ClusterId) -> Vec<&Item> {
        self.clusters
            .get(&cluster)
            .map(|indices| indices.iter().map(|&idx| &self.items[idx]).collect())
            .unwrap_or_default()
    }

    pub fn cluster_size(&self, cluster: ClusterId) -> usize {
        self.clusters.get(&cluster).map_or(0, Vec::len)
    }

    /// Distinct cluster labels, ascending
    pub fn cluster_labels(&self) -> Vec<ClusterId> {
        let mut labels: Vec<ClusterId> = self.clusters.keys().copied().collect();
        labels.sort_unstable();
        labels
    }

    /// Number of rows whose track name repeats an earlier row
    pub fn duplicate_tracks(&self) -> usize {
        self.items.len() - self.by_track.len()
    }

    /// Sorted, de-duplicated track names
    pub fn track_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_track.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
