//! Suburb and postcode search.

use hotspot_models::SearchResult;

use crate::{ApiClient, ApiError, RequestOptions};

/// Searches suburbs and postcodes matching `query`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn search(api: &ApiClient, query: &str) -> Result<Vec<SearchResult>, ApiError> {
    api.request("/search", RequestOptions::get().with_query("q", query))
        .await
}
