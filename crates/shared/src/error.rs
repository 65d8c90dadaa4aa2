use thiserror::Error;

use crate::models::FormField;

#[derive(Debug, Error, PartialEq)]
pub enum OccupancyError {
    #[error("{station} is already fully occupied")]
    StationFull { station: String },
    #[error("missing required fields: {}", join_fields(.missing))]
    Validation { missing: Vec<FormField> },
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("station name must not be empty")]
    EmptyStationName,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum FeedLoadError {
    #[error("failed to fetch station feed: {0}")]
    Fetch(String),
    #[error("failed to read station feed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("station feed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("station feed must be a JSON array")]
    NotAList,
}
