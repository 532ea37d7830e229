use super::scoring::{DimensionScore, MatchingConfig};
use crate::profile::UserProfile;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const OUT_OF_RANGE_DISTANCE: f64 = 0.3;
const AGE_MISMATCH: f64 = 0.2;

/// Great-circle distance between two lat/lon points in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn distance_between(a: &UserProfile, b: &UserProfile) -> f64 {
    haversine_km(a.location_lat, a.location_lon, b.location_lat, b.location_lon)
}

fn distance_term(distance_km: f64, max_km: f64) -> f64 {
    if distance_km > max_km {
        return OUT_OF_RANGE_DISTANCE;
    }
    // max_km == 0 only reaches here at distance 0
    if max_km <= 0.0 {
        return 1.0;
    }
    1.0 - 0.5 * (distance_km / max_km)
}

fn age_accepted(viewer: &UserProfile, other: &UserProfile) -> bool {
    (viewer.preferred_age_min..=viewer.preferred_age_max).contains(&other.age)
}

fn gender_accepted(viewer: &UserProfile, other: &UserProfile) -> bool {
    viewer.preferred_gender.is_empty() || viewer.preferred_gender.iter().any(|g| *g == other.gender)
}

/// Logistics: distance within both radii, mutual age and gender preferences.
pub fn score_circumstantial(
    a: &UserProfile,
    b: &UserProfile,
    config: &MatchingConfig,
) -> DimensionScore {
    let mut evidence = Vec::new();

    let distance_km = distance_between(a, b);
    let max_km = a.max_distance_km.min(b.max_distance_km) as f64;
    let distance = distance_term(distance_km, max_km);
    if distance_km <= max_km && distance_km < config.nearby_distance_km {
        evidence.push("Live nearby".to_string());
    }

    let ages_ok = age_accepted(a, b) && age_accepted(b, a);
    let age = if ages_ok { 1.0 } else { AGE_MISMATCH };
    if ages_ok && a.age.abs_diff(b.age) <= config.similar_age_gap {
        evidence.push("Similar age".to_string());
    }

    let gender = if gender_accepted(a, b) && gender_accepted(b, a) {
        1.0
    } else {
        0.0
    };

    DimensionScore::from_terms(&[distance, age, gender], evidence)
}
