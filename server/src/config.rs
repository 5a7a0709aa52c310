use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use lostark_siblings::config::API_BASE;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug)]
#[error("Invalid {key} value '{value}': {reason}")]
pub struct ConfigError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub api_base: String,
}

impl Config {
    /// Read `LOSTARK_WEB_ADDR` and `LOSTARK_API_BASE`, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            addr: try_load(&lookup, "LOSTARK_WEB_ADDR", DEFAULT_ADDR)?,
            api_base: try_load(&lookup, "LOSTARK_API_BASE", API_BASE)?,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError {
        key: key.to_string(),
        reason: e.to_string(),
        value,
    })
}
