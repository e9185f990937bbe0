//! Contact form submission.

use hotspot_models::{ContactResponse, ContactSubmission};

use crate::{ApiClient, ApiError, RequestOptions};

/// Submits the contact form.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn submit_contact(
    api: &ApiClient,
    submission: &ContactSubmission,
) -> Result<ContactResponse, ApiError> {
    api.request("/contact", RequestOptions::post_json(submission)?)
        .await
}
