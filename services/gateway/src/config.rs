use std::net::SocketAddr;

use fee_engine::history::DEFAULT_HISTORY_CAPACITY;
use thiserror::Error;

pub const ADDR_VAR: &str = "LANDS_GATEWAY_ADDR";
pub const HISTORY_CAPACITY_VAR: &str = "LANDS_HISTORY_CAPACITY";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value}")]
    InvalidCapacity { var: &'static str, value: String },
}

/// Gateway settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    pub history_capacity: usize,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let listen_addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: addr.clone(),
        })?;

        let history_capacity = match lookup(HISTORY_CAPACITY_VAR) {
            None => DEFAULT_HISTORY_CAPACITY,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: HISTORY_CAPACITY_VAR,
                        value: raw,
                    });
                }
            },
        };

        Ok(Self {
            listen_addr,
            history_capacity,
        })
    }
}
