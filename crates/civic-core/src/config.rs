//! Client configuration resolved from arguments and the environment.

use std::env;

/// Environment variable naming the backend origin.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Settings for one API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve the base URL: explicit argument, then `API_BASE_URL`, then
    /// the local default.
    pub fn from_env(explicit: Option<&str>) -> Self {
        Self::resolve(explicit, env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    /// Resolution without touching the process environment.
    ///
    /// Empty values count as unset. The chosen value is otherwise used as
    /// given, except that trailing slashes are dropped so endpoint paths can
    /// be appended without producing `//`.
    pub fn resolve(explicit: Option<&str>, env_value: Option<&str>) -> Self {
        let base_url = [explicit, env_value]
            .into_iter()
            .flatten()
            .find(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_localhost() {
        let config = ClientConfig::resolve(None, None);

        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_explicit_wins_over_env() {
        let config = ClientConfig::resolve(
            Some("https://api.popmanagement.gov.kh"),
            Some("http://staging:3001"),
        );

        assert_eq!(config.base_url, "https://api.popmanagement.gov.kh");
    }

    #[test]
    fn test_env_used_when_no_explicit() {
        let config = ClientConfig::resolve(None, Some("http://staging:3001"));

        assert_eq!(config.base_url, "http://staging:3001");
    }

    #[test]
    fn test_empty_values_fall_through() {
        let config = ClientConfig::resolve(Some(""), Some(""));

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_value_otherwise_kept_verbatim() {
        let config = ClientConfig::resolve(Some("http://api.local:8080/v1"), None);

        assert_eq!(config.base_url, "http://api.local:8080/v1");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::resolve(Some("http://api.local:8080/v1/"), None);

        assert_eq!(config.base_url, "http://api.local:8080/v1");
    }
}
