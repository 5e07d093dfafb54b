//! Environment-backed configuration.
//!
//! [`ConfigService`] snapshots the process environment (after an optional
//! `.env` file is loaded) into a concurrent map that code and tests can
//! override. [`ServerConfig`] is the typed view the HTTP service reads.

use crate::error::{Result, ShopgraphError};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";

/// Key/value configuration store
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Empty store, nothing read from the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` if present, then copy every environment variable.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "failed to read .env file"),
        }

        let service = Self::new();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ShopgraphError::config(key, format!("expected a boolean, got '{raw}'"))),
            },
        }
    }
}

/// Settings for the GraphQL HTTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub graphql_path: String,
    /// Serve the GraphiQL explorer on `GET graphql_path`
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            graphql_path: DEFAULT_GRAPHQL_PATH.to_string(),
            graphiql: true,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `GRAPHQL_PATH` and `GRAPHIQL`.
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let port = match config.get("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ShopgraphError::config("PORT", format!("'{raw}': {e}")))?,
        };

        let graphql_path = config.get_or("GRAPHQL_PATH", DEFAULT_GRAPHQL_PATH);
        if !graphql_path.starts_with('/') {
            return Err(ShopgraphError::config(
                "GRAPHQL_PATH",
                format!("'{graphql_path}' must start with '/'"),
            ));
        }

        Ok(Self {
            host: config.get_or("HOST", DEFAULT_HOST),
            port,
            graphql_path,
            graphiql: config.get_bool("GRAPHIQL", true)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_config(&ConfigService::new()).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:4000");
    }

    #[test]
    fn test_overrides() {
        let service = ConfigService::new();
        service.set("HOST", "127.0.0.1");
        service.set("PORT", "8080");
        service.set("GRAPHQL_PATH", "/api");
        service.set("GRAPHIQL", "off");

        let config = ServerConfig::from_config(&service).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.graphql_path, "/api");
        assert!(!config.graphiql);
    }

    #[test]
    fn test_invalid_port() {
        let service = ConfigService::new();
        service.set("PORT", "forty");
        let err = ServerConfig::from_config(&service).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_path_must_be_absolute() {
        let service = ConfigService::new();
        service.set("GRAPHQL_PATH", "graphql");
        assert!(ServerConfig::from_config(&service).is_err());
    }
}
