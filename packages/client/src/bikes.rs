//! Motorcycle model theft statistics.

use hotspot_models::{ModelQuery, MotorcycleModel};

use crate::{ApiClient, ApiError, RequestOptions};

/// Lists motorcycle models matching `query`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn list_models(
    api: &ApiClient,
    query: &ModelQuery,
) -> Result<Vec<MotorcycleModel>, ApiError> {
    api.request(
        "/models",
        RequestOptions::get().with_queries(query.query_pairs()),
    )
    .await
}

/// Theft statistics for one model. The server matches brand and model
/// case-insensitively.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails; the server answers 404 for
/// an unknown model.
pub async fn get_model(
    api: &ApiClient,
    brand: &str,
    model: &str,
) -> Result<MotorcycleModel, ApiError> {
    api.get_segments(&["models", brand, model]).await
}
