//! Graph builder (C3): resolves way node-id sequences into an undirected
//! weighted adjacency list.

use butterfly_extract::{RawNode, RawWay};
use std::collections::HashMap;

/// An undirected weighted adjacency list: `edges[i]` holds every
/// `(destination_index, weight_m)` pair for node `i`. Built once per
/// request and never mutated afterward.
pub struct AdjacencyList {
    pub edges: Vec<Vec<(u32, f64)>>,
    /// Node positions, indexed the same way as `edges` — ingestion order.
    pub positions: Vec<(f64, f64)>,
}

impl AdjacencyList {
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }
}

/// Builds the adjacency list from the ingested node and way sets.
///
/// Node ids are resolved to indices through a hash map built once in O(N)
/// (a rearchitecture of the source's per-edge linear scan). A way node id
/// absent from the node set drops that edge candidate with a `tracing::warn!`
/// diagnostic rather than failing the build. Each resolved consecutive pair
/// adds the edge to both endpoints' chains, so parallel edges and self-loops
/// are both admitted exactly as written, never deduplicated.
pub fn build_adjacency_list(nodes: &[RawNode], ways: &[RawWay]) -> AdjacencyList {
    let index_of: HashMap<i64, u32> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id, i as u32))
        .collect();

    let mut edges: Vec<Vec<(u32, f64)>> = vec![Vec::new(); nodes.len()];

    for way in ways {
        for pair in way.nodes.windows(2) {
            let (a_id, b_id) = (pair[0], pair[1]);
            let (Some(&a), Some(&b)) = (index_of.get(&a_id), index_of.get(&b_id)) else {
                tracing::warn!(way_id = way.id, a_id, b_id, "way edge references unknown node, dropped");
                continue;
            };

            let weight = butterfly_geometry::haversine_distance_m(
                nodes[a as usize].lat,
                nodes[a as usize].lon,
                nodes[b as usize].lat,
                nodes[b as usize].lon,
            );

            edges[a as usize].push((b, weight));
            edges[b as usize].push((a, weight));
        }
    }

    let positions = nodes.iter().map(|n| (n.lat, n.lon)).collect();

    AdjacencyList { edges, positions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i64, lat: f64, lon: f64) -> RawNode {
        RawNode { id, lat, lon }
    }

    #[test]
    fn builds_symmetric_edges_for_a_simple_way() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 0.0, 1.0), node(3, 0.0, 2.0)];
        let ways = vec![RawWay { id: 10, nodes: vec![1, 2, 3] }];

        let adj = build_adjacency_list(&nodes, &ways);
        assert_eq!(adj.node_count(), 3);
        assert_eq!(adj.edges[0].len(), 1);
        assert_eq!(adj.edges[1].len(), 2);
        assert_eq!(adj.edges[2].len(), 1);

        // Edge 0<->1 present in both directions with the same weight.
        let (dest, w0) = adj.edges[0][0];
        assert_eq!(dest, 1);
        let (back, w1) = adj.edges[1].iter().find(|(d, _)| *d == 0).unwrap();
        assert_eq!(*back, 0);
        assert_eq!(w0, *w1);
    }

    #[test]
    fn dangling_way_node_reference_is_dropped_not_fatal() {
        let nodes = vec![node(1, 0.0, 0.0)];
        let ways = vec![RawWay { id: 10, nodes: vec![1, 999] }];
        let adj = build_adjacency_list(&nodes, &ways);
        assert_eq!(adj.edges[0].len(), 0);
    }

    #[test]
    fn parallel_edges_and_self_loops_are_both_admitted() {
        let nodes = vec![node(1, 0.0, 0.0), node(2, 0.0, 1.0)];
        let ways = vec![
            RawWay { id: 1, nodes: vec![1, 2] },
            RawWay { id: 2, nodes: vec![1, 2] },
            RawWay { id: 3, nodes: vec![1, 1] },
        ];
        let adj = build_adjacency_list(&nodes, &ways);
        // Two parallel edges to node 2, plus one self-loop.
        assert_eq!(adj.edges[0].len(), 3);
    }
}
