//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL_SECS};

/// Default HTTP port.
const DEFAULT_PORT: u16 = 3000;

/// Default interval between background sweeps, in seconds.
const DEFAULT_SWEEP_INTERVAL: u64 = 60;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of pages the cache can hold
    pub capacity: usize,
    /// Seconds a page stays valid without a refresh
    pub ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 disables the sweeper
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached pages (default: 32)
    /// - `CACHE_TTL` - Page TTL in seconds (default: 180)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, 0 = off (default: 60)
    pub fn from_env() -> Self {
        Self {
            capacity: env_or("CACHE_CAPACITY", DEFAULT_CAPACITY),
            ttl: env_or("CACHE_TTL", DEFAULT_TTL_SECS),
            server_port: env_or("SERVER_PORT", DEFAULT_PORT),
            sweep_interval: env_or("SWEEP_INTERVAL", DEFAULT_SWEEP_INTERVAL),
        }
    }

    /// TTL as a `Duration`.
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: DEFAULT_TTL_SECS,
            server_port: DEFAULT_PORT,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
