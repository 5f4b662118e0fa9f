//! Node/way ingestion: §4.2 of the routing contract.

use butterfly_io::{OverpassElement, OverpassResponse};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct RawNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawWay {
    pub id: i64,
    pub nodes: Vec<i64>,
}

/// Walks `response.elements` and builds the insertion-ordered node and way
/// sets. A node id is rejected as a duplicate if its id was already seen;
/// ways are kept verbatim, including node ids that turn out not to be in
/// the node set — the graph builder (not ingestion) is responsible for
/// dropping those edge candidates with a diagnostic, per the contract that
/// ingestion itself never fails.
pub fn ingest(response: &OverpassResponse) -> (Vec<RawNode>, Vec<RawWay>) {
    let mut seen_node_ids = HashSet::new();
    let mut nodes = Vec::new();
    let mut ways = Vec::new();

    for element in &response.elements {
        match element {
            OverpassElement::Node { id, lat, lon } => {
                if seen_node_ids.insert(*id) {
                    nodes.push(RawNode {
                        id: *id,
                        lat: *lat,
                        lon: *lon,
                    });
                } else {
                    tracing::debug!(node_id = id, "duplicate node id skipped");
                }
            }
            OverpassElement::Way { id, nodes: node_ids } => {
                ways.push(RawWay {
                    id: *id,
                    nodes: node_ids.clone(),
                });
            }
            OverpassElement::Other => {}
        }
    }

    (nodes, ways)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(json: &str) -> OverpassResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn duplicate_node_ids_are_rejected() {
        let response = response_from(
            r#"{"elements": [
                {"type": "node", "id": 1, "lat": 1.0, "lon": 1.0},
                {"type": "node", "id": 1, "lat": 2.0, "lon": 2.0}
            ]}"#,
        );
        let (nodes, _) = ingest(&response);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].lat, 1.0);
    }

    #[test]
    fn ways_with_dangling_node_refs_are_kept_for_the_graph_builder_to_drop() {
        let response = response_from(
            r#"{"elements": [
                {"type": "node", "id": 1, "lat": 1.0, "lon": 1.0},
                {"type": "way", "id": 10, "nodes": [1, 999]}
            ]}"#,
        );
        let (nodes, ways) = ingest(&response);
        assert_eq!(nodes.len(), 1);
        assert_eq!(ways.len(), 1);
        assert_eq!(ways[0].nodes, vec![1, 999]);
    }

    #[test]
    fn preserves_insertion_order() {
        let response = response_from(
            r#"{"elements": [
                {"type": "node", "id": 3, "lat": 0.0, "lon": 0.0},
                {"type": "node", "id": 1, "lat": 0.0, "lon": 0.0},
                {"type": "node", "id": 2, "lat": 0.0, "lon": 0.0}
            ]}"#,
        );
        let (nodes, _) = ingest(&response);
        assert_eq!(nodes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
