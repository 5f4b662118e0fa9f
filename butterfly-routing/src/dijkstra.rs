//! Dijkstra oracle (C8): an O(N^2) linear-scan reference implementation
//! used to validate the delta-stepping variants, not a performance path.

use crate::csr::Csr;
use crate::delta_stepping::ShortestPaths;

/// Computes single-source shortest paths from `src` by repeated linear
/// scans over a `visited` bit-vector, with no priority queue. If `dest`
/// is `Some`, the scan exits early once that node is extracted; otherwise
/// it runs to completion over every reachable node.
pub fn shortest_paths(csr: &Csr, src: u32, dest: Option<u32>) -> ShortestPaths {
    let n = csr.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![-1i64; n];
    let mut visited = vec![false; n];
    dist[src as usize] = 0.0;

    for _ in 0..n {
        let mut candidate = None;
        let mut best = f64::INFINITY;
        for i in 0..n {
            if !visited[i] && dist[i] < best {
                best = dist[i];
                candidate = Some(i);
            }
        }

        let Some(u) = candidate else {
            break; // every remaining node has dist = +inf
        };
        if dist[u] == f64::INFINITY {
            break;
        }

        visited[u] = true;
        if Some(u as u32) == dest {
            break;
        }

        for edge_idx in csr.edges_of(u as u32) {
            let v = csr.destinations[edge_idx] as usize;
            let w = csr.weights[edge_idx];
            let nd = dist[u] + w;
            if nd < dist[v] {
                dist[v] = nd;
                prev[v] = u as i64;
            }
        }
    }

    ShortestPaths { dist, prev }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;

    fn csr_from_undirected(edges: &[(u32, u32, f64)], n: usize) -> Csr {
        let mut adj = AdjacencyList {
            edges: vec![Vec::new(); n],
            positions: vec![(0.0, 0.0); n],
        };
        for &(a, b, w) in edges {
            adj.edges[a as usize].push((b, w));
            adj.edges[b as usize].push((a, w));
        }
        crate::csr::flatten(&adj)
    }

    #[test]
    fn five_node_chain_matches_expected_distances() {
        let csr = csr_from_undirected(&[(0, 1, 10.0), (1, 2, 10.0), (2, 3, 10.0), (3, 4, 10.0)], 5);
        let result = shortest_paths(&csr, 0, None);
        assert_eq!(result.dist, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn diamond_takes_the_shorter_side() {
        let csr = csr_from_undirected(&[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 10.0), (2, 3, 10.0)], 4);
        let result = shortest_paths(&csr, 0, None);
        assert_eq!(result.dist[3], 2.0);
        assert_eq!(result.prev[3], 1);
    }

    #[test]
    fn early_exit_on_destination_still_yields_correct_distance() {
        let csr = csr_from_undirected(&[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)], 4);
        let result = shortest_paths(&csr, 0, Some(2));
        assert_eq!(result.dist[2], 2.0);
    }

    #[test]
    fn unreachable_node_stays_at_infinity() {
        let csr = csr_from_undirected(&[(0, 1, 1.0)], 3);
        let result = shortest_paths(&csr, 0, None);
        assert_eq!(result.dist[2], f64::INFINITY);
    }
}
