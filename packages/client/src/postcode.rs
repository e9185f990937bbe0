//! Postcode neighbourhood and theft history.

use hotspot_models::{NearestSuburb, YearlyTheft};

use crate::{ApiClient, ApiError};

/// Suburbs nearest to `postcode`, closest first.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn get_nearest_suburbs(
    api: &ApiClient,
    postcode: &str,
) -> Result<Vec<NearestSuburb>, ApiError> {
    api.get_segments(&["postcode", postcode, "nearest"]).await
}

/// Yearly motorbike theft counts for `postcode`, oldest year first.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails; the server answers 404 when
/// it holds no theft data for the postcode.
pub async fn get_thefts(api: &ApiClient, postcode: &str) -> Result<Vec<YearlyTheft>, ApiError> {
    api.get_segments(&["postcode", postcode, "thefts"]).await
}
