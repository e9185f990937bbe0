//! Display formatting for distances, counts, dates and parking attributes.
//!
//! Tenths follow what the web client shows. Distances round like
//! `Number.prototype.toFixed`: on the exact binary value, with exact ties
//! going up. Compact counts round half-up on the integer count.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown for a missing or zero count.
pub const EMPTY_COUNT: &str = "\u{2014}";

/// Formats a distance: whole meters below 1 km, otherwise kilometers to one
/// decimal place.
///
/// `999.0` → `"999m"`, `2500.0` → `"2.5km"`, `1150.0` → `"1.1km"` (1.15 is
/// stored just below the tie), `2250.0` → `"2.3km"` (an exact tie).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        return format!("{}m", meters.round());
    }

    let km = meters / 1000.0;
    let tenths = km * 10.0;
    // Exact ties at one decimal are odd multiples of 0.05 that binary can
    // hold, i.e. quarters. Rust formats those half-to-even.
    if (km * 4.0).fract() == 0.0 && tenths.fract() == 0.5 {
        format!("{:.1}km", tenths.ceil() / 10.0)
    } else {
        format!("{km:.1}km")
    }
}

/// Formats a headline counter compactly: `1250` → `"1.3k+"`,
/// `1_500_000` → `"1.5M+"`, zero or missing → an em-dash.
#[must_use]
pub fn format_compact_count(count: Option<u64>) -> String {
    match count {
        None | Some(0) => EMPTY_COUNT.to_string(),
        Some(n) if n >= 1_000_000 => {
            let tenths = (n + 50_000) / 100_000;
            format!("{}.{}M+", tenths / 10, tenths % 10)
        }
        Some(n) if n >= 1_000 => {
            let tenths = (n + 50) / 100;
            format!("{}.{}k+", tenths / 10, tenths % 10)
        }
        Some(n) => n.to_string(),
    }
}

/// Formats a server timestamp as a short Australian date, e.g.
/// `"2025-08-01 10:00:00"` → `"1 Aug 2025"`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]`, `YYYY-MM-DDTHH:MM:SS[.f]`
/// and bare `YYYY-MM-DD`. Returns `None` for anything else.
#[must_use]
pub fn format_date(timestamp: &str) -> Option<String> {
    let timestamp = timestamp.trim();

    let date = DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(timestamp, "%Y-%m-%d"))
        .ok()?;

    Some(date.format("%-d %b %Y").to_string())
}

/// Human-readable parking type. Unknown kinds are returned unchanged.
#[must_use]
pub fn format_parking_type(parking_type: &str) -> String {
    match parking_type {
        "on-street" => "On Street".to_string(),
        "off-street" => "Off Street".to_string(),
        "secure" => "Secure".to_string(),
        other => other.to_string(),
    }
}

/// Label for a 1-4 lighting rating.
#[must_use]
pub const fn lighting_label(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Excellent",
        _ => "Unknown",
    }
}
