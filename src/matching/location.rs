//! Location dimension: country/state/city ladder over structured contact
//! records, with a coarse free-text fallback when either side has no contact
//! section on file.

use super::fold_eq;
use super::scoring::{Degradation, DimensionScore, DimensionStatus};
use crate::ProfileAggregate;

/// Single entry point for the location dimension; the scorer and any future
/// prefilter must both go through this.
pub fn evaluate_location(
    a: &ProfileAggregate,
    b: &ProfileAggregate,
    weight: f64,
) -> DimensionScore {
    match (a.contact_details.as_ref(), b.contact_details.as_ref()) {
        (Some(ca), Some(cb)) => {
            let (country_a, country_b) = (ca.country.as_deref(), cb.country.as_deref());
            match (country_a, country_b) {
                (Some(na), Some(nb)) if fold_eq(na, nb) => {
                    if both_match(ca.city.as_deref(), cb.city.as_deref()) {
                        DimensionScore::new(
                            weight,
                            weight,
                            DimensionStatus::Matched,
                            format!("same city: {}", ca.city.as_deref().unwrap_or("")),
                        )
                    } else if both_match(ca.state.as_deref(), cb.state.as_deref()) {
                        DimensionScore::new(
                            weight * 0.75,
                            weight,
                            DimensionStatus::Partial,
                            format!("same state: {}", ca.state.as_deref().unwrap_or("")),
                        )
                    } else {
                        DimensionScore::new(
                            weight * 0.5,
                            weight,
                            DimensionStatus::Partial,
                            format!("same country: {na}"),
                        )
                    }
                }
                (Some(na), Some(nb)) => DimensionScore::new(
                    0.0,
                    weight,
                    DimensionStatus::Mismatch,
                    format!("different countries: {na} vs {nb}"),
                ),
                _ => DimensionScore::degraded(
                    0.0,
                    weight,
                    DimensionStatus::Unknown,
                    Degradation::MissingValue,
                    "country not stated on at least one side",
                ),
            }
        }
        // No structured contact record on one side: fall back to the coarse
        // current-city field from the profile itself, at half signal.
        _ => match (a.current_city(), b.current_city()) {
            (Some(city_a), Some(city_b)) if fold_eq(city_a, city_b) => DimensionScore::degraded(
                weight * 0.5,
                weight,
                DimensionStatus::Partial,
                Degradation::CoarseLocationFallback,
                format!("coarse city match: {city_a}"),
            ),
            (Some(city_a), Some(city_b)) => DimensionScore::degraded(
                0.0,
                weight,
                DimensionStatus::Mismatch,
                Degradation::CoarseLocationFallback,
                format!("coarse city mismatch: {city_a} vs {city_b}"),
            ),
            _ => DimensionScore::degraded(
                0.0,
                weight,
                DimensionStatus::Unknown,
                Degradation::MissingValue,
                "no location data on at least one side",
            ),
        },
    }
}

fn both_match(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if fold_eq(x, y))
}
