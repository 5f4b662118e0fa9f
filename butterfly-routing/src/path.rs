//! Path reconstruction (C9): walks the predecessor array from destination
//! back to source, emitting an ordered polyline.

use butterfly_common::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// `(lat, lon)` pairs in source-to-destination order.
    pub polyline: Vec<(f64, f64)>,
    pub length_m: f64,
}

/// Reconstructs the path from `src` to `dest` given `dist`/`prev` (as
/// produced by delta-stepping or the Dijkstra oracle) and the node
/// position table. Returns [`Error::UnreachableDestination`] if
/// `dist[dest]` is infinite, and [`Error::InvariantViolation`] if a cycle
/// is detected while walking `prev` (a predecessor visited twice is
/// structural corruption, not a normal routing outcome).
pub fn reconstruct(
    dist: &[f64],
    prev: &[i64],
    positions: &[(f64, f64)],
    src: u32,
    dest: u32,
) -> Result<Path> {
    if dist[dest as usize].is_infinite() {
        return Err(Error::UnreachableDestination(dest));
    }

    let mut visited = vec![false; prev.len()];
    let mut indices = vec![dest];
    let mut current = dest;

    while current != src {
        if visited[current as usize] {
            return Err(Error::InvariantViolation(format!(
                "cycle detected while reconstructing path through node {current}"
            )));
        }
        visited[current as usize] = true;

        let p = prev[current as usize];
        if p < 0 {
            return Err(Error::InvariantViolation(format!(
                "node {current} has no predecessor but is not the source"
            )));
        }

        current = p as u32;
        indices.push(current);
    }

    indices.reverse();
    let polyline = indices.into_iter().map(|i| positions[i as usize]).collect();

    Ok(Path {
        polyline,
        length_m: dist[dest as usize],
    })
}
