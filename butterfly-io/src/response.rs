//! JSON model for Overpass `elements` responses.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One entry of an Overpass `elements` array. Fields not needed by this
/// system (tags, geometry, timestamps) are not modeled; `serde` ignores
/// them by default.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OverpassElement {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
    },
    /// Relations and any future element types are accepted but ignored —
    /// the routing core never needs them.
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_node_and_way_elements() {
        let json = r#"{
            "elements": [
                {"type": "node", "id": 1, "lat": 50.1, "lon": 4.1},
                {"type": "way", "id": 10, "nodes": [1, 2, 3]},
                {"type": "relation", "id": 99}
            ]
        }"#;

        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.elements.len(), 3);
        assert!(matches!(response.elements[0], OverpassElement::Node { id: 1, .. }));
        assert!(matches!(response.elements[1], OverpassElement::Way { id: 10, .. }));
        assert!(matches!(response.elements[2], OverpassElement::Other));
    }

    #[test]
    fn missing_elements_array_defaults_to_empty() {
        let response: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(response.elements.is_empty());
    }
}
