// Runtime configuration read from the process environment.
//
// - TABLE_NAME: name of the employee event table. Required.
// - HTTP_ADDR: socket address to listen on. Defaults to 0.0.0.0:8080.

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table_name: String,
    pub http_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("TABLE_NAME")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("TABLE_NAME"))?;

        let raw_addr = lookup("HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "HTTP_ADDR",
            value: raw_addr.clone(),
        })?;

        Ok(Self {
            table_name,
            http_addr,
        })
    }
}
