//! Resource planning for a single routing request: picks a rayon thread
//! count for the parallel algorithm and validates the request's size and
//! delta before any host resources are committed.

use butterfly_common::config::{DELTA_MAX_M, DELTA_MIN_M};
use butterfly_common::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Serial,
    Parallel,
}

/// The decisions made ahead of a single shortest-path computation:
/// which algorithm to run it with, how many threads a parallel run
/// should use, and the delta-stepping bucket width.
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub algorithm: Algorithm,
    pub thread_count: usize,
    pub delta_m: f64,
}

/// `u32` indices are used throughout the CSR; a node or edge count that
/// would not fit is rejected up front rather than overflowing deep inside
/// the flattener.
const MAX_INDEXABLE: usize = u32::MAX as usize;

/// Builds a [`Plan`] for a request of `node_count`/`edge_count`, validating
/// `delta_m` against the documented 10-200m tuning range (falling back to
/// the crate default when `None`) and sizing the parallel thread pool to
/// the host's core count, capped so tiny graphs don't pay spawn overhead
/// for threads that would sit idle.
pub fn for_request(
    node_count: usize,
    edge_count: usize,
    algorithm: Algorithm,
    delta_m: Option<f64>,
) -> Result<Plan> {
    if node_count > MAX_INDEXABLE || edge_count > MAX_INDEXABLE {
        return Err(Error::ResourceExhaustion(format!(
            "graph of {node_count} nodes / {edge_count} edges exceeds the u32 CSR index range"
        )));
    }

    let delta_m = delta_m.unwrap_or(butterfly_common::config::DEFAULT_DELTA_M);
    if !(DELTA_MIN_M..=DELTA_MAX_M).contains(&delta_m) {
        return Err(Error::InputMalformed(format!(
            "delta {delta_m}m is outside the supported {DELTA_MIN_M}-{DELTA_MAX_M}m range"
        )));
    }

    let thread_count = match algorithm {
        Algorithm::Serial => 1,
        Algorithm::Parallel => thread_count_for(node_count),
    };

    tracing::debug!(node_count, edge_count, thread_count, delta_m, "routing plan chosen");

    Ok(Plan {
        algorithm,
        thread_count,
        delta_m,
    })
}

/// Caps the host thread count so a handful of nodes doesn't pay full
/// thread-spawn overhead: one thread per roughly 64 nodes, up to the
/// number of available cores.
fn thread_count_for(node_count: usize) -> usize {
    let cores = num_cpus::get();
    let useful = (node_count / 64).max(1);
    useful.min(cores)
}
