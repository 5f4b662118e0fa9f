//! Data-parallel delta-stepping (C7): the serial algorithm restructured so
//! each outer bucket iteration launches one parallel work-item per node in
//! `snapshot(b)`, using `rayon` as the CPU-many-core substitute for the
//! original OpenCL device kernel.
//!
//! `dist`/`prev`/`pending` are atomics rather than plain `Vec`s: Rust's
//! aliasing rules make an actual unsynchronized write from multiple
//! threads undefined behavior, unlike C where the source tolerates the
//! race informally. The compare-exchange loop below only ever installs a
//! value strictly smaller than what it read, so a losing writer's retry is
//! itself a correct relaxation against the new winner — the "any winner
//! yields a legal relaxation" property the contract asks for survives
//! intact under Rust's stricter memory model.

use super::{Delta, ShortestPaths};
use crate::buckets::Buckets;
use crate::csr::Csr;
use rayon::prelude::*;
use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU64, Ordering};

/// Runs the same single-source computation as
/// [`super::serial::shortest_paths`], parallelizing each bucket's
/// relaxation pass across a rayon pool bounded to `thread_count` threads
/// (sized ahead of time by `butterfly_plan::for_request`). Any panic
/// inside a rayon worker is caught and surfaced as
/// [`butterfly_common::Error::ResourceExhaustion`], matching the
/// contract's "device error is fatal, no serial fallback" policy.
pub fn shortest_paths(
    csr: &Csr,
    src: u32,
    delta: Delta,
    thread_count: usize,
) -> butterfly_common::Result<ShortestPaths> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(|e| butterfly_common::Error::ResourceExhaustion(e.to_string()))?;

    let n = csr.node_count();
    let dist: Vec<AtomicU64> = (0..n).map(|_| AtomicU64::new(f64::INFINITY.to_bits())).collect();
    let prev: Vec<AtomicI64> = (0..n).map(|_| AtomicI64::new(-1)).collect();
    let pending: Vec<AtomicI32> = (0..n).map(|_| AtomicI32::new(-1)).collect();

    dist[src as usize].store(0.0f64.to_bits(), Ordering::Relaxed);

    let mut buckets = Buckets::new();
    buckets.append(0, src);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pool.install(|| {
            let mut b = 0usize;
            while b < buckets.len() {
                let bucket_nodes = buckets.snapshot(b).to_vec();
                if bucket_nodes.is_empty() {
                    b += 1;
                    continue;
                }
                let size_before = bucket_nodes.len();

                // Synchronization point 1 (implicit): work-items below read
                // `bucket_nodes` (uploaded) and the reset `pending` array.
                bucket_nodes.par_iter().for_each(|&n_idx| {
                    let current = f64::from_bits(dist[n_idx as usize].load(Ordering::Relaxed));
                    if delta.bucket_of(current) != b {
                        return; // stale entry, node already moved on
                    }

                    for edge_idx in csr.edges_of(n_idx) {
                        let m = csr.destinations[edge_idx] as usize;
                        let w = csr.weights[edge_idx];
                        let nd = current + w;

                        relax(&dist[m], &prev[m], nd, n_idx);

                        // nd >= current, and current is already in bucket
                        // b, so bucket_of(nd) is never less than b.
                        let b_prime = delta.bucket_of(nd) as i32;
                        pending[m].fetch_max(b_prime, Ordering::Relaxed);
                    }
                });

                // Synchronization point 2: host downloads `pending` and
                // moves nodes into their target buckets.
                for (i, slot) in pending.iter().enumerate() {
                    let target = slot.swap(-1, Ordering::Relaxed);
                    if target >= 0 {
                        buckets.append(target as usize, i as u32);
                    }
                }

                // New entries landed back in `b` itself; reprocess it
                // before advancing, same as the serial reference.
                if buckets.size(b) > size_before {
                    continue;
                }

                b += 1;
            }
        });
    }));

    buckets.free();

    if outcome.is_err() {
        return Err(butterfly_common::Error::ResourceExhaustion(
            "parallel delta-stepping worker panicked".to_string(),
        ));
    }

    let dist = dist.into_iter().map(|a| f64::from_bits(a.load(Ordering::Relaxed))).collect();
    let prev = prev.into_iter().map(|a| a.load(Ordering::Relaxed)).collect();

    Ok(ShortestPaths { dist, prev })
}

/// Compare-exchange retry loop: installs `nd` as the new tentative
/// distance for `m` only while it remains an improvement, then records
/// `n_idx` as its predecessor. A concurrent winner can interleave between
/// the two stores; the contract tolerates the resulting brief mismatch
/// since a stale `prev` is corrected by the next successful relaxation.
fn relax(dist_m: &AtomicU64, prev_m: &AtomicI64, nd: f64, n_idx: u32) {
    let mut current_bits = dist_m.load(Ordering::Relaxed);
    loop {
        let current = f64::from_bits(current_bits);
        if nd >= current {
            return;
        }
        match dist_m.compare_exchange_weak(
            current_bits,
            nd.to_bits(),
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => {
                prev_m.store(n_idx as i64, Ordering::Relaxed);
                return;
            }
            Err(observed) => current_bits = observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta_stepping::serial;
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
    fn matches_serial_result_on_a_chain() {
        let csr = csr_from_undirected(&[(0, 1, 10.0), (1, 2, 10.0), (2, 3, 10.0), (3, 4, 10.0)], 5);
        let delta = Delta::new(40.0).unwrap();
        let parallel_result = shortest_paths(&csr, 0, delta, 4).unwrap();
        let serial_result = serial::shortest_paths(&csr, 0, delta);
        assert_eq!(parallel_result.dist, serial_result.dist);
        assert_eq!(parallel_result.prev, serial_result.prev);
    }

    #[test]
    fn matches_serial_result_on_a_diamond() {
        let csr = csr_from_undirected(&[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 10.0), (2, 3, 10.0)], 4);
        let delta = Delta::new(5.0).unwrap();
        let parallel_result = shortest_paths(&csr, 0, delta, 4).unwrap();
        let serial_result = serial::shortest_paths(&csr, 0, delta);
        assert_eq!(parallel_result.dist, serial_result.dist);
    }

    #[test]
    fn disconnected_node_remains_unreachable() {
        let csr = csr_from_undirected(&[(0, 1, 5.0)], 3);
        let result = shortest_paths(&csr, 0, Delta::new(40.0).unwrap(), 4).unwrap();
        assert_eq!(result.dist[2], f64::INFINITY);
    }

    #[test]
    fn single_thread_pool_still_produces_correct_results() {
        let csr = csr_from_undirected(&[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 10.0), (2, 3, 10.0)], 4);
        let delta = Delta::new(5.0).unwrap();
        let result = shortest_paths(&csr, 0, delta, 1).unwrap();
        assert_eq!(result.dist[3], 2.0);
    }
}
