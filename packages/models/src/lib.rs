#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request and response records for the Hotspot REST API.
//!
//! These types mirror the JSON the backend emits. Payloads are not
//! validated beyond what deserialization enforces: optional fields default
//! to `None` or empty so that records from different backend revisions
//! still decode where the shapes overlap.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Identifier of a community parking submission.
pub type ParkingId = i64;

/// A suburb/postcode match returned by `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display label, e.g. `"Carlton, 3053"`.
    pub label: String,
    /// Suburb (locality) name.
    pub suburb: String,
    /// 4-digit postcode.
    pub postcode: String,
    /// Local government area.
    pub lga: String,
    /// Risk score from 0 (safe) to 1 (high risk).
    pub risk_score: f64,
}

/// A validated street address within a postcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Full street address.
    pub address: String,
    /// Suburb name.
    pub suburb: String,
    /// 4-digit postcode.
    pub postcode: String,
}

/// A facility available at a parking location (e.g. bike racks, shelter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Unique facility identifier.
    pub facility_id: i64,
    /// Human-readable facility name.
    pub facility_name: String,
}

/// Kind of parking location, using the backend's spelling on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ParkingType {
    /// Kerbside parking.
    OnStreet,
    /// Car park or private lot.
    OffStreet,
    /// Locked or attended facility.
    Secure,
}

/// A community-submitted parking location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSubmission {
    /// Unique submission ID.
    pub parking_id: ParkingId,
    /// Street address.
    pub address: String,
    /// Suburb name.
    pub suburb: String,
    /// 4-digit postcode.
    pub postcode: String,
    /// Parking type as sent by the server (normally a [`ParkingType`]
    /// spelling, kept as a string so unknown kinds still decode).
    #[serde(rename = "type")]
    pub parking_type: String,
    /// Lighting quality: 1 = poor through 4 = excellent.
    pub lighting: Option<u8>,
    /// CCTV coverage, `None` when unknown.
    pub cctv: Option<bool>,
    /// Submission timestamp as sent by the server.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Facilities at the location.
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

/// Body of `POST /parking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSubmissionRequest {
    /// Street address; must match a known address server-side.
    pub address: String,
    /// Suburb name.
    pub suburb: String,
    /// Postcode.
    pub postcode: String,
    /// Parking type.
    #[serde(rename = "type")]
    pub parking_type: ParkingType,
    /// Lighting quality 1-4.
    pub lighting: Option<u8>,
    /// CCTV availability, `None` for unknown.
    pub cctv: Option<bool>,
    /// Facility IDs present at the location.
    #[serde(default)]
    pub facilities: Vec<i64>,
}

/// Response of `POST /parking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSubmissionResponse {
    /// ID assigned to the submission.
    pub parking_id: ParkingId,
    /// Server message.
    pub message: String,
    /// `inserted`, `updated` or `no_change` on revisions that report it.
    #[serde(default)]
    pub action: Option<String>,
}

/// A nearby suburb, typically one with a lower risk than the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestSuburb {
    /// 4-digit postcode.
    pub postcode: String,
    /// Suburb name.
    pub suburb: String,
    /// Local government area.
    pub lga: String,
    /// Distance from the origin postcode in meters.
    pub distance_in_meters: f64,
    /// Number of community parking submissions in the suburb.
    #[serde(default)]
    pub parking_count: Option<u64>,
    /// Risk score from 0 to 1.
    #[serde(default)]
    pub risk_score: Option<f64>,
}

/// The postcode a feed was requested for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentLocation {
    /// 4-digit postcode.
    pub postcode: String,
    /// Suburb name.
    pub suburb: String,
    /// Risk score from 0 to 1.
    pub risk_score: f64,
}

/// Aggregate returned by `/postcode/{postcode}/feed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    /// The requested postcode.
    pub current: CurrentLocation,
    /// Community parking submissions in the postcode.
    #[serde(default)]
    pub parking_submissions: Vec<ParkingSubmission>,
    /// Closest suburbs with a lower risk tier.
    #[serde(default)]
    pub nearest_safer_suburbs: Vec<NearestSuburb>,
}

/// Reported motorbike thefts for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTheft {
    /// Calendar year.
    pub year: i32,
    /// Number of reported thefts.
    pub thefts: u64,
}

/// A single scored risk row. Postcode rows carry `postcode`/`suburb`/
/// `risk_score`; LGA rows carry `lga`/`avg_risk`/`postcode_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    /// 4-digit postcode.
    #[serde(default)]
    pub postcode: Option<String>,
    /// Suburb name.
    #[serde(default)]
    pub suburb: Option<String>,
    /// Local government area.
    #[serde(default)]
    pub lga: Option<String>,
    /// Risk score from 0 to 1.
    #[serde(default)]
    pub risk_score: Option<f64>,
    /// Average risk of the postcodes in an LGA.
    #[serde(default)]
    pub avg_risk: Option<f64>,
    /// Number of postcodes in an LGA.
    #[serde(default)]
    pub postcode_count: Option<u64>,
    /// Raw motorcycle theft rate behind the score.
    #[serde(default)]
    pub motorcycle_theft_rate: Option<f64>,
    /// Any fields not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A base record compared against reference records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskComparison {
    /// The postcode being compared.
    pub base: RiskRecord,
    /// Records compared against the base.
    #[serde(default)]
    pub comparisons: Vec<RiskRecord>,
    /// State-wide default risk row, when the backend supplies one.
    #[serde(default)]
    pub defaults: Option<serde_json::Value>,
}

/// Risk payload, which differs in shape between endpoint revisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskData {
    /// `{ base, comparisons[] }` comparison structure.
    Comparison(RiskComparison),
    /// A flat scored record.
    Flat(RiskRecord),
}

impl RiskData {
    /// Returns the primary record: the comparison base, or the flat record.
    #[must_use]
    pub const fn primary(&self) -> &RiskRecord {
        match self {
            Self::Comparison(comparison) => &comparison.base,
            Self::Flat(record) => record,
        }
    }
}

/// Ranking scope for `/risk/top`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskScope {
    /// Rank individual postcodes.
    Postcode,
    /// Rank local government areas by average risk.
    Lga,
}

/// Sort direction accepted by ranking endpoints.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Query parameters for `/risk/top`. Unset fields are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopRiskParams {
    /// Ranking scope.
    pub scope: Option<RiskScope>,
    /// Sort direction.
    pub order: Option<SortOrder>,
    /// Maximum number of rows.
    pub limit: Option<u32>,
}

impl TopRiskParams {
    /// Returns the set parameters as query pairs, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(scope) = self.scope {
            pairs.push(("scope".to_string(), scope.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order".to_string(), order.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Platform-wide counters from `/stats/summary`. Revisions report
/// different subsets, so every counter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of postcodes covered.
    #[serde(default)]
    pub total_postcodes: Option<u64>,
    /// Number of local government areas.
    #[serde(default)]
    pub total_lgas: Option<u64>,
    /// Number of validated addresses.
    #[serde(default)]
    pub total_addresses: Option<u64>,
    /// Number of community submissions.
    #[serde(default)]
    pub total_submissions: Option<u64>,
    /// Number of motorcycle models with theft statistics.
    #[serde(default)]
    pub total_models: Option<u64>,
    /// Mean postcode risk.
    #[serde(default)]
    pub avg_postcode_risk: Option<f64>,
    /// Any fields not modelled above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Reply address.
    pub email: String,
    /// Issue category.
    pub category: String,
    /// Issue subject.
    pub subject: String,
    /// Related postcode, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// Free-form details.
    pub details: String,
    /// reCAPTCHA verification token.
    #[serde(rename = "recaptchaToken")]
    pub recaptcha_token: String,
}

/// Response of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Whether the submission was accepted.
    pub success: bool,
    /// Server message.
    #[serde(default)]
    pub message: Option<String>,
    /// Link to the tracking issue, when one was opened.
    #[serde(default)]
    pub issue_url: Option<String>,
}

/// Risk roll-up for one local government area from `/lgas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LgaRollup {
    /// Local government area.
    pub lga: String,
    /// Number of postcodes in the LGA.
    pub postcode_count: u64,
    /// Mean postcode risk.
    pub avg_risk: f64,
    /// Lowest postcode risk.
    #[serde(default)]
    pub min_risk: Option<f64>,
    /// Highest postcode risk.
    #[serde(default)]
    pub max_risk: Option<f64>,
}

/// A postcode within an LGA from `/lgas/{lga}/postcodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LgaPostcode {
    /// 4-digit postcode.
    pub postcode: String,
    /// Suburb name.
    pub suburb: String,
    /// Risk score from 0 to 1.
    pub risk_score: f64,
    /// Centroid latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Centroid longitude.
    #[serde(default)]
    pub long: Option<f64>,
}

/// Theft statistics for one motorcycle model from `/models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorcycleModel {
    /// Manufacturer.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Total reported thefts.
    pub total: u64,
    /// Share of all thefts, in percent.
    pub percentage: f64,
    /// Risk score from 0 to 1.
    pub model_risk: f64,
}

/// Sort keys accepted by `/models`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ModelSort {
    /// Highest risk first.
    RiskDesc,
    /// Lowest risk first.
    RiskAsc,
    /// Most thefts first.
    TotalDesc,
    /// Fewest thefts first.
    TotalAsc,
    /// Alphabetical by brand.
    Brand,
    /// Alphabetical by model.
    Model,
}

/// Filters for `/models`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelQuery {
    /// Substring match on brand.
    pub brand: Option<String>,
    /// Substring match on model.
    pub model: Option<String>,
    /// Minimum theft count.
    pub min_total: Option<u64>,
    /// Sort key.
    pub sort: Option<ModelSort>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
}

impl ModelQuery {
    /// Returns the set filters as query pairs, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(brand) = &self.brand {
            pairs.push(("brand".to_string(), brand.clone()));
        }
        if let Some(model) = &self.model {
            pairs.push(("model".to_string(), model.clone()));
        }
        if let Some(min_total) = self.min_total {
            pairs.push(("min_total".to_string(), min_total.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort".to_string(), sort.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parking_submission_decodes_with_nulls_and_missing_facilities() {
        let body = serde_json::json!({
            "parking_id": 7,
            "address": "1 Lygon St",
            "suburb": "Carlton",
            "postcode": "3053",
            "type": "on-street",
            "lighting": null,
            "cctv": null,
            "created_at": "2025-08-01 10:00:00"
        });
        let submission: ParkingSubmission = serde_json::from_value(body).unwrap();
        assert_eq!(submission.parking_id, 7);
        assert_eq!(submission.parking_type, "on-street");
        assert!(submission.lighting.is_none());
        assert!(submission.cctv.is_none());
        assert!(submission.facilities.is_empty());
    }

    #[test]
    fn parking_request_serializes_type_in_kebab_case() {
        let request = ParkingSubmissionRequest {
            address: "1 Lygon St".to_string(),
            suburb: "Carlton".to_string(),
            postcode: "3053".to_string(),
            parking_type: ParkingType::OffStreet,
            lighting: Some(3),
            cctv: Some(true),
            facilities: vec![1, 2],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "off-street");
        assert_eq!(value["facilities"], serde_json::json!([1, 2]));
    }

    #[test]
    fn risk_data_prefers_comparison_shape() {
        let body = serde_json::json!({
            "base": { "postcode": "3000", "suburb": "Melbourne", "risk_score": 0.8 },
            "defaults": { "risk_score": 0.4 }
        });
        let data: RiskData = serde_json::from_value(body).unwrap();
        let RiskData::Comparison(comparison) = &data else {
            panic!("expected comparison, got {data:?}");
        };
        assert!(comparison.comparisons.is_empty());
        assert!(comparison.defaults.is_some());
        assert_eq!(data.primary().postcode.as_deref(), Some("3000"));
    }

    #[test]
    fn risk_data_falls_back_to_flat_record() {
        let body = serde_json::json!({ "lga": "Yarra", "avg_risk": 0.31, "postcode_count": 9 });
        let data: RiskData = serde_json::from_value(body).unwrap();
        assert!(matches!(data, RiskData::Flat(_)));
        assert_eq!(data.primary().postcode_count, Some(9));
    }

    #[test]
    fn risk_record_keeps_unmodelled_fields() {
        let body = serde_json::json!({ "postcode": "3065", "rank": 4 });
        let record: RiskRecord = serde_json::from_value(body).unwrap();
        assert_eq!(record.extra.get("rank"), Some(&serde_json::json!(4)));
    }

    #[test]
    fn top_risk_params_skip_unset_fields() {
        let params = TopRiskParams {
            scope: Some(RiskScope::Lga),
            order: None,
            limit: Some(5),
        };
        assert_eq!(
            params.query_pairs(),
            vec![
                ("scope".to_string(), "lga".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
        assert!(TopRiskParams::default().query_pairs().is_empty());
    }

    #[test]
    fn stats_summary_accepts_either_revision() {
        let older: StatsSummary = serde_json::from_value(serde_json::json!({
            "total_postcodes": 698,
            "total_lgas": 79,
            "avg_postcode_risk": 0.21,
            "total_models": 310
        }))
        .unwrap();
        assert_eq!(older.total_postcodes, Some(698));
        assert!(older.total_submissions.is_none());

        let newer: StatsSummary = serde_json::from_value(serde_json::json!({
            "total_postcodes": 698,
            "total_addresses": 3_900_000,
            "total_lgas": 79,
            "total_submissions": 12
        }))
        .unwrap();
        assert_eq!(newer.total_addresses, Some(3_900_000));
    }

    #[test]
    fn contact_submission_uses_camel_case_token() {
        let submission = ContactSubmission {
            email: "rider@example.com".to_string(),
            category: "data".to_string(),
            subject: "Wrong suburb".to_string(),
            postcode: None,
            details: "Details".to_string(),
            recaptcha_token: "tok".to_string(),
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["recaptchaToken"], "tok");
        assert!(value.get("postcode").is_none());
    }

    #[test]
    fn model_sort_uses_snake_case() {
        assert_eq!(ModelSort::RiskDesc.to_string(), "risk_desc");
        assert_eq!("total_asc".parse::<ModelSort>().unwrap(), ModelSort::TotalAsc);
    }
}
