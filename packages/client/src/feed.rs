//! The per-postcode feed: current risk, community parking, safer suburbs.

use hotspot_models::FeedResponse;

use crate::{ApiClient, ApiError};

/// Fetches the feed for `postcode`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn get_postcode_feed(api: &ApiClient, postcode: &str) -> Result<FeedResponse, ApiError> {
    api.get_segments(&["postcode", postcode, "feed"]).await
}
