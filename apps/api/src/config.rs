//! Runtime configuration read from the environment
//!
//! `main` loads a `.env` file first (via `dotenv`), so every variable below can
//! live there during development.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite://football.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `DATABASE_URL`
    pub database_url: String,
    /// `DATABASE_MAX_CONNECTIONS`
    pub max_connections: u32,
    /// `HOST` and `PORT`
    pub bind_addr: SocketAddr,
    /// `SEED_DATABASE`
    pub seed_database: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            seed_database: true,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// Missing values use the defaults; unparsable values log a warning and
    /// use the defaults too.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!("DATABASE_URL not set, using default");
            defaults.database_url.clone()
        });

        let host = parse_or(&lookup, "HOST", defaults.bind_addr.ip());
        let port = parse_or(&lookup, "PORT", defaults.bind_addr.port());
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections);
        let seed_database = parse_or(&lookup, "SEED_DATABASE", defaults.seed_database);

        Self {
            database_url,
            max_connections,
            bind_addr: SocketAddr::new(host, port),
            seed_database,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, fallback = %default, "Invalid configuration value");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_all_values() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("SEED_DATABASE", "false"),
        ]);

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.max_connections, 2);
        assert!(!config.seed_database);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "eighty"), ("SEED_DATABASE", "maybe")]);

        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert!(config.seed_database);
    }
}
