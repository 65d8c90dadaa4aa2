//! Station feed decoding.
//!
//! The feed is a JSON array of `{latitude, longitude, message}` records. Each
//! record is decoded on its own so one bad entry never hides the rest.

use crate::error::FeedLoadError;
use crate::models::StationFeedEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedBatch {
    pub stations: Vec<StationFeedEntry>,
    pub skipped: Vec<SkippedRecord>,
}

pub fn parse_feed(text: &str) -> Result<FeedBatch, FeedLoadError> {
    let document: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(records) = document else {
        return Err(FeedLoadError::NotAList);
    };

    let mut batch = FeedBatch::default();
    for (index, record) in records.into_iter().enumerate() {
        match decode_record(record) {
            Ok(entry) => batch.stations.push(entry),
            Err(reason) => {
                tracing::warn!(index, %reason, "Skipping malformed station feed record");
                batch.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    tracing::debug!(
        stations = batch.stations.len(),
        skipped = batch.skipped.len(),
        "Parsed station feed"
    );
    Ok(batch)
}

fn decode_record(record: serde_json::Value) -> Result<StationFeedEntry, String> {
    let entry: StationFeedEntry = serde_json::from_value(record).map_err(|e| e.to_string())?;
    if entry.message.trim().is_empty() {
        return Err("empty station name".to_string());
    }
    if !entry.position().is_valid() {
        return Err(format!("coordinates out of range ({})", entry.position()));
    }
    Ok(entry)
}
