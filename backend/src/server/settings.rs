//! Process settings loaded via OrthoConfig.
//!
//! Every value can come from the command line, a configuration file or a
//! `REGISTRY_*` environment variable. Only the database URL has no default.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use registry_backend::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Conventional variable consulted when `REGISTRY_DATABASE_URL` is unset.
const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Configuration values controlling the server process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRY")]
pub struct RegistrySettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: String,
    /// Maximum pooled connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: u32,
    /// Seconds to wait for a pooled connection.
    #[ortho_config(default = DEFAULT_POOL_CONNECTION_TIMEOUT_SECS)]
    pub pool_connection_timeout_secs: u64,
    /// Seconds allowed for in-flight requests to drain on shutdown.
    #[ortho_config(default = DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    pub shutdown_timeout_secs: u64,
}

impl RegistrySettings {
    /// Return the database URL, falling back to `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when neither source is set.
    pub fn database_url(&self) -> io::Result<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(FALLBACK_DATABASE_URL_VAR).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "database URL missing: set REGISTRY_DATABASE_URL or DATABASE_URL",
                )
            })
    }

    /// Return the parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let raw = self.bind_addr.trim();
        raw.parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Build the pool configuration for `database_url`.
    pub fn pool_config(&self, database_url: String) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size)
            .with_connection_timeout(Duration::from_secs(self.pool_connection_timeout_secs))
    }

    /// Return the graceful shutdown window.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
