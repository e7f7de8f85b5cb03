//! Runtime settings read from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

/// Which repository implementation backs the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err("expected postgres or memory".into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err("expected text or json".into()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub store: StoreKind,
    /// Schema holding the sport table. Must be a plain identifier.
    pub schema: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub body_limit: usize,
    /// Purge and seed fixture sports at startup.
    pub load_fixtures: bool,
    /// Replace 500 error text with a generic message.
    pub redact_internal_errors: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: "postgres://localhost/sport_api".into(),
            store: StoreKind::Postgres,
            schema: "public".into(),
            max_connections: 5,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            body_limit: 64 * 1024,
            load_fixtures: false,
            redact_internal_errors: false,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(v) = lookup("SPORT_STORE") {
            config.store = parse("SPORT_STORE", v)?;
        }
        if let Some(v) = lookup("SPORT_SCHEMA") {
            if !is_identifier(&v) {
                return Err(ConfigError::Invalid {
                    key: "SPORT_SCHEMA",
                    value: v,
                    reason: "not a valid identifier".into(),
                });
            }
            config.schema = v;
        }
        if let Some(v) = lookup("DB_MAX_CONNECTIONS") {
            config.max_connections = parse("DB_MAX_CONNECTIONS", v)?;
        }
        if let Some(v) = lookup("BIND_ADDR") {
            config.bind_addr = parse("BIND_ADDR", v)?;
        }
        if let Some(v) = lookup("BODY_LIMIT_BYTES") {
            config.body_limit = parse("BODY_LIMIT_BYTES", v)?;
        }
        if let Some(v) = lookup("LOAD_FIXTURES") {
            config.load_fixtures = parse_bool("LOAD_FIXTURES", v)?;
        }
        if let Some(v) = lookup("REDACT_INTERNAL_ERRORS") {
            config.redact_internal_errors = parse_bool("REDACT_INTERNAL_ERRORS", v)?;
        }
        if let Some(v) = lookup("LOG_FORMAT") {
            config.log_format = parse("LOG_FORMAT", v)?;
        }
        Ok(config)
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            reason: "expected a boolean".into(),
        }),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && s.len() <= 63
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.store, StoreKind::Postgres);
        assert_eq!(config.schema, "public");
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(!config.load_fixtures);
        assert!(!config.redact_internal_errors);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SPORT_STORE", "memory"),
            ("SPORT_SCHEMA", "sports"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("LOAD_FIXTURES", "true"),
            ("REDACT_INTERNAL_ERRORS", "1"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.schema, "sports");
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert!(config.load_fixtures);
        assert!(config.redact_internal_errors);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_values_naming_the_key() {
        let err = config_from(&[("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
        let err = config_from(&[("SPORT_STORE", "redis")]).unwrap_err();
        assert!(err.to_string().contains("SPORT_STORE"));
        let err = config_from(&[("LOAD_FIXTURES", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("LOAD_FIXTURES"));
    }

    #[test]
    fn rejects_schema_that_is_not_an_identifier() {
        assert!(config_from(&[("SPORT_SCHEMA", "public; drop table sport")]).is_err());
        assert!(config_from(&[("SPORT_SCHEMA", "1abc")]).is_err());
        assert!(config_from(&[("SPORT_SCHEMA", "app_data")]).is_ok());
    }
}
