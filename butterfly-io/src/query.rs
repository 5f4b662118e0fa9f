//! Overpass QL query builders, mirroring the two queries the routing core
//! depends on: a bounding-polygon way query and a radius-around-a-point
//! nearest-node query.

/// Builds the polygon way query used to fetch every highway inside `bbox`
/// (a sequence of `(lat, lon)` vertices, at least 3 pairs).
pub fn bbox_query(bbox: &[(f64, f64)]) -> String {
    let poly = bbox
        .iter()
        .map(|(lat, lon)| format!("{lat} {lon}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!("[out:json];way['highway'](poly:'{poly}');out body;>;out skel qt;")
}

/// Builds the radius-around-a-point query used for nearest-node resolution,
/// using the fixed radius (in meters) from the request configuration.
pub fn nearest_node_query(lat: f64, lon: f64, radius_m: f64) -> String {
    format!(
        "[out:json];way(around:{radius},{lat},{lon})['highway'];node(w)->.nodes;(._;>;);out body;",
        radius = radius_m,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_query_embeds_each_vertex_as_lat_lon_pair() {
        let q = bbox_query(&[(50.0, 4.0), (50.1, 4.0), (50.1, 4.1)]);
        assert!(q.contains("50 4 50.1 4 50.1 4.1"));
        assert!(q.starts_with("[out:json];way['highway'](poly:'"));
        assert!(q.ends_with("');out body;>;out skel qt;"));
    }

    #[test]
    fn nearest_node_query_uses_the_requested_radius() {
        let q = nearest_node_query(50.85, 4.35, 50.0);
        assert_eq!(
            q,
            "[out:json];way(around:50,50.85,4.35)['highway'];node(w)->.nodes;(._;>;);out body;"
        );
    }
}
