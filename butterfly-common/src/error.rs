//! Error taxonomy shared by every butterfly-route crate.
//!
//! Variants map onto the six error kinds of the routing contract: the first
//! four are recoverable and meant to be surfaced to a caller as structured
//! failure; the last two are fatal and expected to abort the process.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bounding box under-specified or coordinates non-numeric.
    #[error("malformed input: {0}")]
    InputMalformed(String),

    /// Map-data endpoint unreachable or returned unparseable JSON.
    #[error("upstream map-data service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// No node within the nearest-node radius of the requested point.
    #[error("no node found near ({lat}, {lon})")]
    NearestNodeNotFound { lat: f64, lon: f64 },

    /// Destination node exists in the graph but is not reachable from the source.
    #[error("destination node {0} is unreachable from the source")]
    UnreachableDestination(u32),

    /// Any failed allocation, host or device side. Fatal.
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(String),

    /// An internal invariant was violated (non-monotone CSR offsets, a cycle
    /// found during path reconstruction, etc). Fatal.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the four kinds a caller is expected to recover from by
    /// reporting structured failure rather than aborting the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InputMalformed(_)
                | Error::UpstreamUnavailable(_)
                | Error::NearestNodeNotFound { .. }
                | Error::UnreachableDestination(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_kinds_are_the_first_four() {
        assert!(Error::InputMalformed("bad bbox".into()).is_recoverable());
        assert!(Error::UpstreamUnavailable("timeout".into()).is_recoverable());
        assert!(Error::NearestNodeNotFound { lat: 0.0, lon: 0.0 }.is_recoverable());
        assert!(Error::UnreachableDestination(3).is_recoverable());
        assert!(!Error::ResourceExhaustion("oom".into()).is_recoverable());
        assert!(!Error::InvariantViolation("cycle".into()).is_recoverable());
    }
}
