use charge_shared::feed::{self, FeedBatch};
use charge_shared::FeedLoadError;

use crate::config;

/// Build the station feed URL for a page origin.
pub fn build_feed_url(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), config::FEED_PATH)
}

fn feed_url() -> Result<String, FeedLoadError> {
    let window =
        web_sys::window().ok_or_else(|| FeedLoadError::Fetch("no window".to_string()))?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| FeedLoadError::Fetch(format!("no page origin: {:?}", e)))?;
    Ok(build_feed_url(&origin))
}

/// Fetch and decode the station feed served next to the app.
pub async fn fetch_station_feed() -> Result<FeedBatch, FeedLoadError> {
    let url = feed_url()?;
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| FeedLoadError::Fetch(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FeedLoadError::Fetch(format!("{} returned {}", url, status)));
    }

    let text = resp
        .text()
        .await
        .map_err(|e| FeedLoadError::Fetch(e.to_string()))?;
    feed::parse_feed(&text)
}
