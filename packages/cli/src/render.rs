//! Plain-text rendering of API records for the terminal.

use std::fmt::Write as _;

use hotspot_metrics::{
    SafetyTier, create_slug, format_compact_count, format_date, format_distance,
    format_parking_type, lighting_label, risk_to_safety_score,
};
use hotspot_models::{
    Address, FeedResponse, LgaPostcode, LgaRollup, MotorcycleModel, NearestSuburb,
    ParkingSubmission, RiskData, RiskRecord, SearchResult, StatsSummary, YearlyTheft,
};

/// `58/100 (Medium Risk)` for a risk score.
#[must_use]
pub fn safety(risk_score: f64) -> String {
    let score = risk_to_safety_score(risk_score);
    format!("{score}/100 ({})", SafetyTier::from_score(score))
}

#[must_use]
pub fn search_result(result: &SearchResult) -> String {
    format!(
        "{}  [{}]  {}  safety {}",
        result.label,
        create_slug(&result.suburb, &result.postcode),
        result.lga,
        safety(result.risk_score)
    )
}

#[must_use]
pub fn address(address: &Address) -> String {
    format!("{}, {} {}", address.address, address.suburb, address.postcode)
}

/// Multi-line summary of a parking submission.
#[must_use]
pub fn parking(submission: &ParkingSubmission) -> String {
    let mut out = format!(
        "#{} {}, {} {}\n    {}",
        submission.parking_id,
        submission.address,
        submission.suburb,
        submission.postcode,
        format_parking_type(&submission.parking_type),
    );

    if let Some(lighting) = submission.lighting {
        let _ = write!(out, " · lighting {}", lighting_label(lighting));
    }
    match submission.cctv {
        Some(true) => out.push_str(" · CCTV"),
        Some(false) => out.push_str(" · no CCTV"),
        None => {}
    }
    if let Some(date) = submission.created_at.as_deref().and_then(format_date) {
        let _ = write!(out, " · added {date}");
    }
    if !submission.facilities.is_empty() {
        let names: Vec<&str> = submission
            .facilities
            .iter()
            .map(|f| f.facility_name.as_str())
            .collect();
        let _ = write!(out, "\n    facilities: {}", names.join(", "));
    }

    out
}

#[must_use]
pub fn nearest(suburb: &NearestSuburb) -> String {
    let mut out = format!(
        "{} {} ({})  {}",
        suburb.suburb,
        suburb.postcode,
        suburb.lga,
        format_distance(suburb.distance_in_meters)
    );
    if let Some(risk_score) = suburb.risk_score {
        let _ = write!(out, "  safety {}", safety(risk_score));
    }
    if let Some(count) = suburb.parking_count {
        let _ = write!(out, "  {count} parking spot(s)");
    }
    out
}

#[must_use]
pub fn feed(feed: &FeedResponse) -> String {
    let mut out = format!(
        "{} {}  safety {}\n",
        feed.current.suburb,
        feed.current.postcode,
        safety(feed.current.risk_score)
    );

    out.push_str("\nCommunity parking:\n");
    if feed.parking_submissions.is_empty() {
        out.push_str("  none yet\n");
    }
    for submission in &feed.parking_submissions {
        let _ = writeln!(out, "  {}", parking(submission));
    }

    out.push_str("\nNearby safer suburbs:\n");
    if feed.nearest_safer_suburbs.is_empty() {
        out.push_str("  none found\n");
    }
    for suburb in &feed.nearest_safer_suburbs {
        let _ = writeln!(out, "  {}", nearest(suburb));
    }

    out
}

#[must_use]
pub fn theft(theft: &YearlyTheft) -> String {
    format!("{}: {}", theft.year, theft.thefts)
}

/// One ranking row, postcode or LGA shaped.
#[must_use]
pub fn risk_record(record: &RiskRecord) -> String {
    let place = match (&record.suburb, &record.postcode, &record.lga) {
        (Some(suburb), Some(postcode), _) => format!("{suburb} {postcode}"),
        (None, Some(postcode), _) => postcode.clone(),
        (_, None, Some(lga)) => lga.clone(),
        _ => "(unknown)".to_string(),
    };

    let mut out = place;
    if let Some(risk_score) = record.risk_score.or(record.avg_risk) {
        let _ = write!(out, "  safety {}", safety(risk_score));
    }
    if let Some(count) = record.postcode_count {
        let _ = write!(out, "  {count} postcode(s)");
    }
    out
}

#[must_use]
pub fn risk_data(data: &RiskData) -> String {
    let mut out = risk_record(data.primary());
    if let RiskData::Comparison(comparison) = data {
        for other in &comparison.comparisons {
            let _ = write!(out, "\n  vs {}", risk_record(other));
        }
        let default_risk = comparison
            .defaults
            .as_ref()
            .and_then(|d| d.get("risk_score").or_else(|| d.get("postcode_risk")))
            .and_then(serde_json::Value::as_f64);
        if let (Some(base), Some(default_risk)) = (comparison.base.risk_score, default_risk) {
            let _ = write!(
                out,
                "\n  {:+.0}% vs state average",
                hotspot_metrics::risk_difference_percent(base, default_risk)
            );
        }
    }
    out
}

#[must_use]
pub fn stats(summary: &StatsSummary) -> String {
    let rows = [
        ("Postcodes", summary.total_postcodes),
        ("Councils", summary.total_lgas),
        ("Addresses", summary.total_addresses),
        ("Submissions", summary.total_submissions),
        ("Bike models", summary.total_models),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<12} {}", format_compact_count(value));
    }
    if let Some(avg) = summary.avg_postcode_risk {
        let _ = writeln!(out, "{:<12} {}", "Avg safety", safety(avg));
    }
    out
}

#[must_use]
pub fn lga(rollup: &LgaRollup) -> String {
    format!(
        "{}  {} postcode(s)  avg safety {}",
        rollup.lga,
        rollup.postcode_count,
        safety(rollup.avg_risk)
    )
}

#[must_use]
pub fn lga_postcode(row: &LgaPostcode) -> String {
    format!("{} {}  safety {}", row.suburb, row.postcode, safety(row.risk_score))
}

#[must_use]
pub fn bike_model(model: &MotorcycleModel) -> String {
    format!(
        "{} {}  {} theft(s) ({:.1}%)  safety {}",
        model.brand,
        model.model,
        model.total,
        model.percentage,
        safety(model.model_risk)
    )
}
