use charge_shared::feed::{self, FeedBatch};
use charge_shared::models::StationFeedEntry;
use charge_shared::FeedLoadError;
use std::path::Path;

/// Station feed served at `/charge.json`. Read once at startup.
pub struct StationFeed {
    pub stations: Vec<StationFeedEntry>,
}

impl StationFeed {
    pub fn load(path: &Path) -> Result<Self, FeedLoadError> {
        let data = std::fs::read_to_string(path).map_err(|source| FeedLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let FeedBatch { stations, skipped } = feed::parse_feed(&data)?;

        tracing::info!(
            stations = stations.len(),
            skipped = skipped.len(),
            path = %path.display(),
            "Loaded station feed"
        );

        Ok(StationFeed { stations })
    }

    /// Like [`StationFeed::load`], but a missing or broken feed yields an
    /// empty one so the map still starts.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Serving an empty station feed");
            StationFeed {
                stations: Vec::new(),
            }
        })
    }
}
