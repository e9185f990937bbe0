//! Risk ↔ safety score conversion.
//!
//! The two conversions are inverse only up to rounding: a risk that is not
//! a multiple of `0.01` does not survive a round trip.

/// Converts a risk score in `[0, 1]` to a safety score in `[0, 100]`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn risk_to_safety_score(risk_score: f64) -> i32 {
    ((1.0 - risk_score) * 100.0).round() as i32
}

/// Converts a safety score in `[0, 100]` back to a risk score in `[0, 1]`.
#[must_use]
pub fn safety_to_risk_score(safety_score: f64) -> f64 {
    1.0 - safety_score / 100.0
}

/// Percentage by which `suburb_risk` exceeds `average_risk`.
///
/// Not guarded: an `average_risk` of zero yields `NaN` or an infinity.
#[must_use]
pub fn risk_difference_percent(suburb_risk: f64, average_risk: f64) -> f64 {
    ((suburb_risk - average_risk) / average_risk) * 100.0
}
