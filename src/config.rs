//! Runtime configuration, read from the environment (and `.env` if present).

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Connection details for the hosted backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` runs against the built-in demo catalogue
    pub backend: Option<BackendConfig>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Load `.env`, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("SUPABASE_URL").filter(|v| !v.trim().is_empty());
        let key = lookup("SUPABASE_ANON_KEY").filter(|v| !v.trim().is_empty());

        let backend = match (url, key) {
            (Some(url), Some(anon_key)) => Some(BackendConfig {
                url: url.trim().trim_end_matches('/').to_string(),
                anon_key: anon_key.trim().to_string(),
            }),
            (None, None) => None,
            (Some(_), None) => bail!("SUPABASE_URL is set but SUPABASE_ANON_KEY is missing"),
            (None, Some(_)) => bail!("SUPABASE_ANON_KEY is set but SUPABASE_URL is missing"),
        };

        let log_level = lookup("ESTATES_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let timeout_secs = match lookup("ESTATES_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid ESTATES_HTTP_TIMEOUT_SECS: {}", raw))?,
            None => 30,
        };

        Ok(Self {
            backend,
            log_level,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert!(config.backend.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_backend_config() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("ESTATES_LOG_LEVEL", "debug"),
            ("ESTATES_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        let backend = config.backend.unwrap();
        assert_eq!(backend.url, "https://demo.supabase.co");
        assert_eq!(backend.anon_key, "anon");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_half_configured_backend_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("SUPABASE_URL", "https://x")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SUPABASE_ANON_KEY", "k")])).is_err());
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("ESTATES_HTTP_TIMEOUT_SECS", "soon")])).is_err());
    }
}
