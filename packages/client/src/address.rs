//! Validated street addresses, used to constrain parking submissions.

use hotspot_models::Address;

use crate::{ApiClient, ApiError, RequestOptions};

/// Lists addresses in `postcode`, optionally filtered by a substring
/// `query`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn get_addresses(
    api: &ApiClient,
    postcode: &str,
    query: Option<&str>,
) -> Result<Vec<Address>, ApiError> {
    let mut options = RequestOptions::get();
    if let Some(query) = query {
        options = options.with_query("q", query);
    }

    api.request_segments(&["addresses", postcode], options).await
}
