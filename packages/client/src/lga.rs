//! Local government area roll-ups.

use hotspot_models::{LgaPostcode, LgaRollup, SortOrder};

use crate::{ApiClient, ApiError, RequestOptions};

/// Lists LGAs with their aggregate risk.
///
/// `query` filters by a substring of the LGA name. `sort` is passed
/// through as-is (`avg_desc`, `avg_asc`, `count_desc`, `count_asc`, `lga`).
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn list_lgas(
    api: &ApiClient,
    query: Option<&str>,
    sort: Option<&str>,
) -> Result<Vec<LgaRollup>, ApiError> {
    let mut options = RequestOptions::get();
    if let Some(query) = query {
        options = options.with_query("q", query);
    }
    if let Some(sort) = sort {
        options = options.with_query("sort", sort);
    }

    api.request("/lgas", options).await
}

/// Postcodes within `lga`, ordered by risk.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails; the server answers 404 for
/// an unknown LGA.
pub async fn get_lga_postcodes(
    api: &ApiClient,
    lga: &str,
    order: Option<SortOrder>,
) -> Result<Vec<LgaPostcode>, ApiError> {
    let mut options = RequestOptions::get();
    if let Some(order) = order {
        options = options.with_query("order", order.to_string());
    }

    api.request_segments(&["lgas", lga, "postcodes"], options).await
}
