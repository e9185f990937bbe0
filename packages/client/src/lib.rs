#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Typed client for the Hotspot REST API.
//!
//! [`ApiClient`] is a thin request wrapper: it joins an endpoint onto the
//! configured base URL (e.g. `http://127.0.0.1:8000/api/v1`), sends JSON
//! headers, maps non-2xx responses to [`ApiError::Api`] and everything
//! else that goes wrong to [`ApiError::Network`].
//!
//! One module per backend resource exposes free async functions over the
//! wrapper. They hold no state, cache nothing, and never retry.
//!
//! Response bodies are decoded into the records from [`hotspot_models`];
//! no further validation is performed.

pub mod address;
pub mod bikes;
pub mod contact;
pub mod feed;
pub mod lga;
pub mod parking;
pub mod postcode;
pub mod request;
pub mod risk;
pub mod search;
pub mod stats;

use std::fmt::Display;

use thiserror::Error;

pub use request::{API_URL_ENV, ApiClient, DEFAULT_BASE_URL, RequestOptions};

/// Errors from API requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Generic description, `API request failed: <status>`.
        message: String,
    },

    /// The request could not be built or sent, or the body could not be
    /// decoded into the expected type.
    #[error("Network error: {message}")]
    Network {
        /// The underlying failure.
        message: String,
    },
}

impl ApiError {
    /// Builds the error for a non-success HTTP status.
    #[must_use]
    pub fn api(status: u16) -> Self {
        Self::Api {
            status,
            message: format!("API request failed: {status}"),
        }
    }

    /// Wraps any other failure.
    pub fn network(err: impl Display) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }

    /// HTTP status for [`ApiError::Api`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network { .. } => None,
        }
    }
}
