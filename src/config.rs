//! Server settings read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CATALOG_BIND` | `127.0.0.1:8000` | Listen address |
//! | `CATALOG_CHANNEL_CAPACITY` | `32` | Product actor mailbox size |

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_VAR: &str = "CATALOG_BIND";
pub const CHANNEL_CAPACITY_VAR: &str = "CATALOG_CHANNEL_CAPACITY";
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value}")]
    InvalidCapacity { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset variables take their defaults;
    /// set but malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind {
                var: BIND_VAR,
                value: bind.clone(),
            })?;

        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            None => DEFAULT_CHANNEL_CAPACITY,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: CHANNEL_CAPACITY_VAR,
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            bind,
            channel_capacity,
        })
    }
}
