//! Configuration handling for the application.
//!
//! Only hosting concerns are configurable: where the HTTP server binds.
//! `Config::from_env` reads them with development defaults.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

/// Environment variable names.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
/// Port injected by PaaS hosts; used only when `BIND_ADDR` is absent.
pub const ENV_PORT: &str = "PORT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: SocketAddr,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = match (env::var(ENV_BIND_ADDR), env::var(ENV_PORT)) {
            (Ok(addr), _) => addr,
            (Err(_), Ok(port)) => format!("0.0.0.0:{}", port.trim()),
            (Err(_), Err(_)) => DEFAULT_BIND_ADDR.to_string(),
        };

        let bind_addr = raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidValue {
                field: ENV_BIND_ADDR,
                reason: format!("'{}' is not a socket address: {}", raw, err),
            })?;

        Ok(Self { bind_addr })
    }

    /// TCP bind address for the HTTP server.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
