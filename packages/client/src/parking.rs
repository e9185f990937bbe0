//! Community parking submissions.
//!
//! Listing by postcode is derived from the postcode feed rather than a
//! dedicated endpoint; [`list_parking`] covers backends that still expose
//! `/parking/{postcode}`.

use hotspot_models::{ParkingSubmission, ParkingSubmissionRequest, ParkingSubmissionResponse};
use serde_json::Value;

use crate::{ApiClient, ApiError, RequestOptions};

/// Parking submissions in `postcode`, taken from the postcode feed.
///
/// Returns an empty list when the feed has no `parking_submissions` array
/// or its entries do not decode.
///
/// # Errors
///
/// Returns [`ApiError`] if the feed request itself fails.
pub async fn get_parking_by_postcode(
    api: &ApiClient,
    postcode: &str,
) -> Result<Vec<ParkingSubmission>, ApiError> {
    let feed: Value = api.get_segments(&["postcode", postcode, "feed"]).await?;
    Ok(extract_parking_submissions(feed))
}

/// Parking submissions in `postcode` from the dedicated endpoint, newest
/// first.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn list_parking(
    api: &ApiClient,
    postcode: &str,
) -> Result<Vec<ParkingSubmission>, ApiError> {
    api.get_segments(&["parking", postcode]).await
}

/// Submits a new parking location.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails; the server answers 400 when
/// the address is not a known address.
pub async fn submit_parking(
    api: &ApiClient,
    request: &ParkingSubmissionRequest,
) -> Result<ParkingSubmissionResponse, ApiError> {
    api.request("/parking", RequestOptions::post_json(request)?)
        .await
}

fn extract_parking_submissions(mut feed: Value) -> Vec<ParkingSubmission> {
    match feed.get_mut("parking_submissions").map(Value::take) {
        Some(submissions @ Value::Array(_)) => serde_json::from_value(submissions)
            .unwrap_or_else(|e| {
                log::warn!("Ignoring malformed parking submissions in feed: {e}");
                Vec::new()
            }),
        _ => Vec::new(),
    }
}
