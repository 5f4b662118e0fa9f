//! Request-scoped configuration, layered flags over environment over defaults.

/// Default Overpass-compatible endpoint used when neither a flag nor an
/// environment variable overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Default nearest-node search radius, in meters, matching the original
/// `around:50` query.
pub const DEFAULT_NEAREST_NODE_RADIUS_M: f64 = 50.0;

/// Default delta-stepping bucket width, in meters.
pub const DEFAULT_DELTA_M: f64 = 40.0;

pub const DELTA_MIN_M: f64 = 10.0;
pub const DELTA_MAX_M: f64 = 200.0;

/// Environment variable that overrides [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV_VAR: &str = "BUTTERFLY_ROUTE_ENDPOINT";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub nearest_node_radius_m: f64,
    pub delta_m: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: std::env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            nearest_node_radius_m: DEFAULT_NEAREST_NODE_RADIUS_M,
            delta_m: DEFAULT_DELTA_M,
        }
    }
}

impl Config {
    /// Overrides the endpoint, e.g. from a `--endpoint` CLI flag.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    /// Overrides the nearest-node radius, e.g. from a `--radius` CLI flag.
    pub fn with_radius(mut self, radius_m: Option<f64>) -> Self {
        if let Some(radius_m) = radius_m {
            self.nearest_node_radius_m = radius_m;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_compiled_in_endpoint_when_env_unset() {
        std::env::remove_var(ENDPOINT_ENV_VAR);
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.delta_m, DEFAULT_DELTA_M);
    }

    #[test]
    fn with_endpoint_overrides_default() {
        let config = Config::default().with_endpoint(Some("http://localhost:1234".into()));
        assert_eq!(config.endpoint, "http://localhost:1234");
    }
}
