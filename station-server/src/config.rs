//! Server configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;
use crate::matcher::{DEFAULT_LIMIT, DEFAULT_MIN_QUERY_LEN, MatchConfig};
use crate::stations::{StationCatalog, StationError};

pub const ADDR_VAR: &str = "STATION_SERVER_ADDR";
pub const CATALOG_PATH_VAR: &str = "STATION_CATALOG_PATH";
pub const MIN_QUERY_LEN_VAR: &str = "STATION_MIN_QUERY_LEN";
pub const LIMIT_VAR: &str = "STATION_SUGGESTION_LIMIT";
pub const STATIC_DIR_VAR: &str = "STATION_STATIC_DIR";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,

    /// Matching threshold and default suggestion count.
    pub matcher: MatchConfig,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Suggestion cache sizing.
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let addr = match get(ADDR_VAR) {
            Some(v) => v.trim().parse::<SocketAddr>().map_err(|e| ConfigError {
                var: ADDR_VAR,
                value: v.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.addr,
        };

        let min_query_len = match get(MIN_QUERY_LEN_VAR) {
            Some(v) => parse_count(MIN_QUERY_LEN_VAR, &v)?,
            None => DEFAULT_MIN_QUERY_LEN,
        };

        let limit = match get(LIMIT_VAR) {
            Some(v) => parse_count(LIMIT_VAR, &v)?,
            None => DEFAULT_LIMIT,
        };
        if limit == 0 {
            return Err(ConfigError {
                var: LIMIT_VAR,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            addr,
            catalog_path: get(CATALOG_PATH_VAR).map(PathBuf::from),
            matcher: MatchConfig::new(min_query_len, limit),
            static_dir: get(STATIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cache: defaults.cache,
        })
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<StationCatalog, StationError> {
        match &self.catalog_path {
            Some(path) => StationCatalog::from_json_file(path),
            None => StationCatalog::builtin(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
            matcher: MatchConfig::default(),
            static_dir: PathBuf::from("static"),
            cache: CacheConfig::default(),
        }
    }
}

fn parse_count(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse::<usize>().map_err(|e| ConfigError {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.matcher, MatchConfig::new(2, 8));
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (CATALOG_PATH_VAR, "/etc/stations.json"),
            (MIN_QUERY_LEN_VAR, "1"),
            (LIMIT_VAR, " 12 "),
            (STATIC_DIR_VAR, "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/stations.json"))
        );
        assert_eq!(config.matcher, MatchConfig::new(1, 12));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[(LIMIT_VAR, ""), (CATALOG_PATH_VAR, "  ")]))
                .unwrap();

        assert_eq!(config.matcher.limit, 8);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = ServerConfig::from_lookup(lookup(&[(MIN_QUERY_LEN_VAR, "two")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid STATION_MIN_QUERY_LEN=\"two\""));
    }

    #[test]
    fn rejects_zero_limit() {
        let err = ServerConfig::from_lookup(lookup(&[(LIMIT_VAR, "0")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid STATION_SUGGESTION_LIMIT=\"0\": must be at least 1"
        );
    }

    #[test]
    fn rejects_bad_address() {
        assert!(ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).is_err());
    }

    #[test]
    fn loads_builtin_catalog_by_default() {
        let catalog = ServerConfig::default().load_catalog().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn loads_catalog_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, r#"{"stations": [{"code": "KLK", "name": "Kalka"}]}"#).unwrap();

        let config = ServerConfig {
            catalog_path: Some(path),
            ..ServerConfig::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
