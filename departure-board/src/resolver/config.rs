//! Resolution configuration.

/// Configuration parameters for departure resolution.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Maximum number of departures to return for one stop query.
    ///
    /// The ceiling is deliberately generous: in practice a stop sees far
    /// fewer departures per day, so legitimate results are never
    /// truncated, while worst-case query cost stays bounded.
    pub max_departures: usize,
}

impl BoardConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_departures: usize) -> Self {
        Self { max_departures }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_departures: 1000,
        }
    }
}
