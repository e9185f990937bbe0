//! Risk rankings and comparisons.

use hotspot_models::{RiskData, RiskRecord, TopRiskParams};

use crate::{ApiClient, ApiError, RequestOptions};

/// Ranks postcodes or LGAs by risk.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn get_top_risk(
    api: &ApiClient,
    params: &TopRiskParams,
) -> Result<Vec<RiskRecord>, ApiError> {
    api.request(
        "/risk/top",
        RequestOptions::get().with_queries(params.query_pairs()),
    )
    .await
}

/// Risk of `postcode` alongside the reference figures it is compared with.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn compare_risk(api: &ApiClient, postcode: &str) -> Result<RiskData, ApiError> {
    api.request(
        "/risk/compare",
        RequestOptions::get().with_query("postcode", postcode),
    )
    .await
}
