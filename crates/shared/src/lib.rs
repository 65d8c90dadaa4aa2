pub mod error;
pub mod feed;
pub mod models;
pub mod surface;
pub mod tracker;

pub use error::{FeedLoadError, OccupancyError};
pub use tracker::{OccupancyTracker, TrackerState};
