use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "CAMPS_HOST";
pub const PORT_VAR: &str = "CAMPS_PORT";
pub const SEED_VAR: &str = "CAMPS_SEED_SAMPLE_DATA";
pub const CORS_VAR: &str = "CAMPS_ENABLE_CORS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an IP address, got {value:?}")]
    InvalidHost { var: &'static str, value: String },
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed_sample_data: bool,
    pub enable_cors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            seed_sample_data: true,
            enable_cors: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = match lookup(HOST_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => defaults.port,
        };
        let seed_sample_data = flag(&lookup, SEED_VAR, defaults.seed_sample_data)?;
        let enable_cors = flag(&lookup, CORS_VAR, defaults.enable_cors)?;

        Ok(Self {
            host,
            port,
            seed_sample_data,
            enable_cors,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn flag<F>(lookup: &F, var: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}
