//! Nearest-node selection: squared-Euclidean distance in degree space,
//! over whatever nodes a radius query returned. This is an intentional
//! approximation (not haversine) matching the source's own simplification.

use crate::RawNode;

/// Returns the id of the node in `candidates` closest to `(lat, lon)` under
/// squared-Euclidean distance in degree space, or `-1` if `candidates` is
/// empty.
pub fn nearest_node(lat: f64, lon: f64, candidates: &[RawNode]) -> i64 {
    let mut best_id = -1;
    let mut best_distance = f64::INFINITY;

    for node in candidates {
        let d_lat = lat - node.lat;
        let d_lon = lon - node.lon;
        let distance = d_lat * d_lat + d_lon * d_lon;
        if distance < best_distance {
            best_distance = distance;
            best_id = node.id;
        }
    }

    best_id
}
