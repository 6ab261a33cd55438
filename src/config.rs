//! Environment configuration module
//!
//! Resolves the listen address from the `PORT` and `HOST` environment
//! variables with hard-coded defaults. Missing or malformed values
//! silently fall back to the defaults; loading never fails and never
//! logs an error.

use std::env;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8003;

/// Network binding configuration, resolved once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `PORT` must parse as a non-zero `u16`; anything else (absent,
    /// empty, non-numeric, out of range) yields the default `8003`
    /// rather than an error. `HOST` defaults to `localhost` when
    /// absent or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|port| *port > 0)
            .unwrap_or(DEFAULT_PORT);

        let host = lookup("HOST")
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self { host, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = config_from(&[]);
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 8003);
    }

    #[test]
    fn test_explicit_values() {
        let cfg = config_from(&[("PORT", "9000"), ("HOST", "0.0.0.0")]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9000);
    }

    #[test]
    fn test_non_numeric_port_falls_back() {
        let cfg = config_from(&[("PORT", "abc")]);
        assert_eq!(cfg.port, 8003);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let cfg = config_from(&[("PORT", ""), ("HOST", "")]);
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 8003);
    }

    #[test]
    fn test_out_of_range_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "0")]).port, 8003);
        assert_eq!(config_from(&[("PORT", "70000")]).port, 8003);
        assert_eq!(config_from(&[("PORT", "-1")]).port, 8003);
    }

    #[test]
    fn test_port_whitespace_tolerated() {
        assert_eq!(config_from(&[("PORT", " 8080 ")]).port, 8080);
    }
}
