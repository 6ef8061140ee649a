//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Unparseable or empty values fall back to the defaults.
    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: host
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: port
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(AppConfig::from_values(None, None), AppConfig::default());
    }

    #[test]
    fn test_values_applied() {
        let config = AppConfig::from_values(Some("0.0.0.0".into()), Some("8080".into()));

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = AppConfig::from_values(None, Some("eighty".into()));

        assert_eq!(config.port, 3000);
    }
}
