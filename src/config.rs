//! Process configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `HOST` | `0.0.0.0` | HTTP bind address |
//! | `PORT` | `8080` | HTTP port |
//! | `SEED_DB` | `true` | load demo data on startup |
//! | `ACTOR_MAILBOX_CAPACITY` | `32` | slots per actor mailbox, must be > 0 |
//!
//! A `.env` file in the working directory is loaded first if present.

use crate::lifecycle::DEFAULT_MAILBOX_CAPACITY;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_db: bool,
    pub mailbox_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed_db: true,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            }),
        },
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`; unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;
        let seed_db = parse_var(&lookup, "SEED_DB", defaults.seed_db)?;
        let mailbox_capacity =
            parse_var(&lookup, "ACTOR_MAILBOX_CAPACITY", defaults.mailbox_capacity)?;
        if mailbox_capacity == 0 {
            return Err(ConfigError::Invalid {
                var: "ACTOR_MAILBOX_CAPACITY",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            seed_db,
            mailbox_capacity,
        })
    }

    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("SEED_DB", "false"),
            ("ACTOR_MAILBOX_CAPACITY", "128"),
        ])
        .unwrap();
        assert_eq!(
            config,
            AppConfig {
                host: "127.0.0.1".into(),
                port: 3000,
                seed_db: false,
                mailbox_capacity: 128,
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        let err = config(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

        let err = config(&[("SEED_DB", "yes please")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "SEED_DB", .. }));

        let err = config(&[("ACTOR_MAILBOX_CAPACITY", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "ACTOR_MAILBOX_CAPACITY",
                ..
            }
        ));
    }
}
