//! Three-tier bucketing of safety scores for display.

use strum_macros::{AsRefStr, Display, EnumString};

/// Score at or above which a suburb is shown as low risk.
pub const LOW_RISK_THRESHOLD: i32 = 80;

/// Score at or above which a suburb is shown as medium risk.
pub const MEDIUM_RISK_THRESHOLD: i32 = 50;

/// Display tier for a safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum SafetyTier {
    /// Score of 80 or more.
    #[strum(serialize = "Low Risk")]
    Low,
    /// Score from 50 to 79.
    #[strum(serialize = "Medium Risk")]
    Medium,
    /// Score below 50.
    #[strum(serialize = "High Risk")]
    High,
}

impl SafetyTier {
    /// Buckets a safety score (0-100). Thresholds are inclusive on the
    /// high side.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score >= LOW_RISK_THRESHOLD {
            Self::Low
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// User-facing label, e.g. `"Low Risk"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// Semantic colour name used by the UI theme.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "success",
            Self::Medium => "warning",
            Self::High => "error",
        }
    }
}

/// Label for a safety score.
#[must_use]
pub const fn safety_label(score: i32) -> &'static str {
    SafetyTier::from_score(score).label()
}

/// Colour name for a safety score.
#[must_use]
pub const fn safety_color(score: i32) -> &'static str {
    SafetyTier::from_score(score).color()
}
