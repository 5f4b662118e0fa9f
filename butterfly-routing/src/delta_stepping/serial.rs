//! Serial delta-stepping (C6): bucket relaxation loop, never reopening a
//! past bucket, no light/heavy edge split.

use super::{Delta, ShortestPaths};
use crate::buckets::Buckets;
use crate::csr::Csr;

/// Runs single-source delta-stepping from `src` over `csr` with bucket
/// width `delta`. Computes the full distance/predecessor arrays for every
/// node — no early exit on destination extraction, so the result can be
/// diffed against the Dijkstra oracle.
pub fn shortest_paths(csr: &Csr, src: u32, delta: Delta) -> ShortestPaths {
    let n = csr.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![-1i64; n];
    dist[src as usize] = 0.0;

    let mut buckets = Buckets::new();
    buckets.append(0, src);

    let mut b = 0usize;
    while b < buckets.len() {
        // `snapshot` is re-taken every pass through this bucket: a
        // relaxation below can append a node back into `b` itself (a
        // neighbor close enough that it still falls in `b`'s range), and
        // that fresh entry needs a further pass over `b` before we can
        // move on to `b + 1` below.
        let nodes: Vec<u32> = buckets.snapshot(b).to_vec();
        if nodes.is_empty() {
            b += 1;
            continue;
        }
        let size_before = nodes.len();

        for n_idx in nodes {
            // Stale entry: the node has since been relaxed to a smaller
            // distance and requeued under its new bucket.
            if delta.bucket_of(dist[n_idx as usize]) != b {
                continue;
            }

            for edge_idx in csr.edges_of(n_idx) {
                let m = csr.destinations[edge_idx];
                let w = csr.weights[edge_idx];
                let nd = dist[n_idx as usize] + w;

                if nd < dist[m as usize] {
                    dist[m as usize] = nd;
                    prev[m as usize] = n_idx as i64;
                    // nd >= dist[n_idx], and dist[n_idx] is already in
                    // bucket b, so bucket_of(nd) is never less than b --
                    // appending here never reopens a past bucket.
                    buckets.append(delta.bucket_of(nd), m);
                }
            }
        }

        // New entries landed back in `b` itself; reprocess it before
        // advancing.
        if buckets.size(b) > size_before {
            continue;
        }

        b += 1;
    }

    buckets.free();
    ShortestPaths { dist, prev }
}
