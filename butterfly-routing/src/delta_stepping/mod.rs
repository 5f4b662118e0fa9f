//! Delta-stepping single-source shortest paths: a serial reference
//! implementation and a data-parallel variant over the same CSR.

pub mod parallel;
pub mod serial;

/// Delta-stepping bucket width, in meters. Valid range 10-200m
/// (see `butterfly_common::config`); correctness does not depend on the
/// chosen value, only performance does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta(f64);

impl Delta {
    pub fn new(meters: f64) -> butterfly_common::Result<Self> {
        if !meters.is_finite() || meters <= 0.0 {
            return Err(butterfly_common::Error::InputMalformed(format!(
                "delta must be a positive finite number of meters, got {meters}"
            )));
        }
        Ok(Delta(meters))
    }

    pub fn meters(self) -> f64 {
        self.0
    }

    /// `⌊distance / Δ⌋` as used by the bucket-assignment rule.
    pub fn bucket_of(self, distance: f64) -> usize {
        (distance / self.0).floor() as usize
    }
}

/// Result of a single-source shortest-path computation: `dist[i]` is the
/// best known distance to node `i`, `prev[i]` its predecessor index (or
/// `-1`).
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub dist: Vec<f64>,
    pub prev: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_rejects_non_positive_or_non_finite() {
        assert!(Delta::new(0.0).is_err());
        assert!(Delta::new(-5.0).is_err());
        assert!(Delta::new(f64::NAN).is_err());
        assert!(Delta::new(40.0).is_ok());
    }

    #[test]
    fn bucket_of_floors_distance_over_delta() {
        let delta = Delta::new(40.0).unwrap();
        assert_eq!(delta.bucket_of(0.0), 0);
        assert_eq!(delta.bucket_of(39.9), 0);
        assert_eq!(delta.bucket_of(40.0), 1);
        assert_eq!(delta.bucket_of(79.9), 1);
    }
}
