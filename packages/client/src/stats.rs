//! Platform-wide statistics.

use hotspot_models::StatsSummary;

use crate::{ApiClient, ApiError};

/// Headline counters shown on the landing page.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn get_summary(api: &ApiClient) -> Result<StatsSummary, ApiError> {
    api.get("/stats/summary").await
}
