use std::env;

use crate::error::AppError;

pub const DEFAULT_LISTEN_PORT: u16 = 8889;
pub const DEFAULT_MONITORED_PORT: u16 = 8888;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the status server binds to (`HEALTH_PORT`).
    pub listen_port: u16,
    /// Port of the co-located notebook service (`PORT`). Recorded only;
    /// request handling never dials it.
    pub monitored_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup, so tests can pass
    /// fixed values instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let listen_port = parse_port(lookup("HEALTH_PORT"), "HEALTH_PORT", DEFAULT_LISTEN_PORT)?;
        let monitored_port = parse_port(lookup("PORT"), "PORT", DEFAULT_MONITORED_PORT)?;

        Ok(Self {
            listen_port,
            monitored_port,
        })
    }
}

fn parse_port(raw: Option<String>, name: &'static str, default: u16) -> Result<u16, AppError> {
    match raw {
        Some(value) => value.parse().map_err(|source| AppError::InvalidPort {
            name,
            value,
            source,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.listen_port, 8889);
        assert_eq!(cfg.monitored_port, 8888);
    }

    #[test]
    fn env_values_override_defaults() {
        let cfg = Config::from_lookup(|name| match name {
            "HEALTH_PORT" => Some("9100".to_string()),
            "PORT" => Some("9000".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.listen_port, 9100);
        assert_eq!(cfg.monitored_port, 9000);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = Config::from_lookup(|name| match name {
            "HEALTH_PORT" => Some("not-a-port".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidPort {
                name: "HEALTH_PORT",
                ..
            }
        ));
    }
}
