//! Great-circle math on a spherical Earth.
//!
//! Accurate to the usual ~0.5% of the spherical model, which is plenty for
//! proximity thresholds but not for survey work.

use crate::coordinate::Coordinate;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two points in meters.
pub fn distance_m(from: Coordinate, to: Coordinate) -> f64 {
    distance_km(from, to) * 1000.0
}

/// The candidate closest to `origin`, as its index and distance in
/// kilometers. `None` for an empty slice.
pub fn nearest(origin: Coordinate, candidates: &[Coordinate]) -> Option<(usize, f64)> {
    candidates
        .iter()
        .map(|candidate| distance_km(origin, *candidate))
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
}

/// Initial bearing from `from` towards `to`, in degrees within `[0, 360)`.
pub fn initial_bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlng = (to.lng - from.lng).to_radians();

    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}
