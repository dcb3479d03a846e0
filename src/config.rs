use std::fmt;

use tracing::warn;

use crate::error::{FootballError, Result};

/// Base URL of the API-Football service behind RapidAPI.
pub const DEFAULT_BASE_URL: &str = "https://api-football-vl.p.rapidapi.com/v3";

/// Number of upcoming fixtures requested per league.
pub const DEFAULT_FIXTURES_NEXT: u32 = 20;

pub const HOST_ENV: &str = "RAPIDAPI_HOST";
pub const KEY_ENV: &str = "RAPIDAPI_KEY";
pub const BASE_URL_ENV: &str = "FOOTBALL_API_BASE_URL";
pub const FIXTURES_NEXT_ENV: &str = "FOOTBALL_API_FIXTURES_NEXT";

/// Connection settings and static credentials for the API.
///
/// Credentials are not validated; a missing host or key simply results in
/// requests the API rejects, which the client reports as empty tables.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub host_header: String,
    pub key_header: String,
    pub host: String,
    pub key: String,
    pub fixtures_next: u32,
}

impl ApiConfig {
    /// Create a config with the default base URL and header names.
    pub fn new(host: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host_header: "x-rapidapi-host".to_string(),
            key_header: "x-rapidapi-key".to_string(),
            host: host.into(),
            key: key.into(),
            fixtures_next: DEFAULT_FIXTURES_NEXT,
        }
    }

    /// Load the config from the process environment, reading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).unwrap_or_else(|| {
            warn!(var = HOST_ENV, "api host not set");
            String::new()
        });
        let key = lookup(KEY_ENV).unwrap_or_else(|| {
            warn!(var = KEY_ENV, "api key not set");
            String::new()
        });

        let mut config = Self::new(host, key);
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        if let Some(next) = lookup(FIXTURES_NEXT_ENV) {
            let next = next
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    FootballError::Config(format!(
                        "{FIXTURES_NEXT_ENV} must be a positive integer, got {next:?}"
                    ))
                })?;
            config = config.with_fixtures_next(next);
        }
        Ok(config)
    }

    /// Point the client at another base URL, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_fixtures_next(mut self, next: u32) -> Self {
        self.fixtures_next = next;
        self
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("host_header", &self.host_header)
            .field("key_header", &self.key_header)
            .field("host", &self.host)
            .field("key", &"<redacted>")
            .field("fixtures_next", &self.fixtures_next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config =
            ApiConfig::from_lookup(lookup(&[(HOST_ENV, "h.example"), (KEY_ENV, "k")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.host, "h.example");
        assert_eq!(config.key, "k");
        assert_eq!(config.host_header, "x-rapidapi-host");
        assert_eq!(config.key_header, "x-rapidapi-key");
        assert_eq!(config.fixtures_next, 20);
    }

    #[test]
    fn test_missing_credentials_are_not_validated() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.host.is_empty());
        assert!(config.key.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://localhost:8080/v3/"),
            (FIXTURES_NEXT_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v3");
        assert_eq!(config.fixtures_next, 5);
    }

    #[test]
    fn test_invalid_fixtures_next() {
        for bad in ["zero", "0", "-3"] {
            let err = ApiConfig::from_lookup(lookup(&[(FIXTURES_NEXT_ENV, bad)])).unwrap_err();
            assert!(matches!(err, FootballError::Config(_)));
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ApiConfig::new("host", "super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
