#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived metrics for displaying Hotspot data.
//!
//! Pure, deterministic transforms over values returned by the API:
//!
//! - [`score`] converts between the backend's risk score (0 to 1) and the
//!   user-facing safety score (0 to 100).
//! - [`safety`] buckets safety scores into three display tiers.
//! - [`format`] renders distances, counts, dates and parking attributes.
//! - [`slug`] encodes and decodes suburb/postcode URL slugs.
//! - [`geo`] recognises Australian postcodes in free-form input.

pub mod format;
pub mod geo;
pub mod safety;
pub mod score;
pub mod slug;

pub use format::{
    format_compact_count, format_date, format_distance, format_parking_type, lighting_label,
};
pub use geo::is_postcode;
pub use safety::{SafetyTier, safety_color, safety_label};
pub use score::{risk_difference_percent, risk_to_safety_score, safety_to_risk_score};
pub use slug::{SuburbSlug, create_slug, parse_slug, to_slug};
