//! Process configuration read from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DATA_PATH_ENV: &str = "INVOICELENS_DATA_PATH";
pub const BIND_ADDR_ENV: &str = "INVOICELENS_BIND_ADDR";

pub const DEFAULT_DATA_PATH: &str = "cleaned_data.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid socket address: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str, default: &str| match lookup(key) {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => {
                tracing::info!(key, default, "config not set; using default");
                default.to_string()
            }
        };

        let data_path = PathBuf::from(get(DATA_PATH_ENV, DEFAULT_DATA_PATH));
        let raw_addr = get(BIND_ADDR_ENV, DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            data_path,
            bind_addr,
        })
    }
}
