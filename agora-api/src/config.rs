use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SERVER_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SERVER_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
}

/// Settings read from `SERVER_ADDRESS` and `SERVER_PORT`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
pub struct Env {
    #[serde(default = "default_server_address")]
    pub server_address: IpAddr,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

fn default_server_address() -> IpAddr {
    DEFAULT_SERVER_ADDRESS
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

impl Env {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if e.not_found() {
                debug!("No .dotenv file found");
            } else {
                return Err(e.into());
            }
        }

        envy::from_env().map_err(ConfigError::from)
    }

    #[must_use]
    pub fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.server_address, self.server_port)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
