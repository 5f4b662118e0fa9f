//! Geodesic distance primitives.
//!
//! A single pure function: great-circle distance between two decimal-degree
//! coordinates via the haversine formula.

/// Mean Earth radius, in meters, used throughout the routing pipeline.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between `(lat1, lon1)` and `(lat2, lon2)`, in
/// meters, via the haversine formula.
///
/// Returns `f64::INFINITY` if any input is non-finite (`NaN` or infinite)
/// rather than propagating a `NaN` result. Pure and thread-safe.
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if !lat1.is_finite() || !lon1.is_finite() || !lat2.is_finite() || !lon2.is_finite() {
        return f64::INFINITY;
    }

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}
