//! Host server configuration parsed from environment variables.
//!
//! The listening socket defaults to the Leptos `site-addr` (from
//! `[[workspace.metadata.leptos]]`, or `LEPTOS_SITE_ADDR` when set); `HOST`
//! and `PORT` override its parts individually.

use std::net::{IpAddr, SocketAddr};

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `HOST` is set but blank.
    #[error("HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: defaults to the IP of `site_addr`
    /// - `PORT`: defaults to the port of `site_addr`
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` is blank or `PORT` is not a valid port.
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ConfigError> {
        Self::resolve(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref(), site_addr)
    }

    fn resolve(host: Option<&str>, port: Option<&str>, site_addr: SocketAddr) -> Result<Self, ConfigError> {
        let host = parse_host(host, site_addr.ip())?;
        let port = parse_port(port, site_addr.port())?;
        Ok(Self { host, port })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

fn parse_host(raw: Option<&str>, default: IpAddr) -> Result<String, ConfigError> {
    match raw {
        None => Ok(default.to_string()),
        Some(host) if host.trim().is_empty() => Err(ConfigError::EmptyHost),
        Some(host) => Ok(host.trim().to_owned()),
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(default),
        Some(port) => port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
