//! Configuration for restkv
//!
//! Centralized configuration with sensible defaults.

use crate::error::{RestError, Result};

/// Main configuration for a restkv server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Number of worker threads serving requests
    pub worker_threads: usize,

    /// Max received requests waiting for a worker
    pub queue_capacity: usize,

    // -------------------------------------------------------------------------
    // Request Configuration
    // -------------------------------------------------------------------------
    /// Largest request body accepted (in bytes)
    pub max_body_size: usize,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Pre-populate the collections with fixture records on startup
    pub seed_fixtures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            worker_threads: 8,
            queue_capacity: 1024,
            max_body_size: 1024 * 1024, // 1 MB
            seed_fixtures: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.trim().is_empty() {
            return Err(RestError::Config("listen address is empty".to_string()));
        }
        if self.worker_threads == 0 {
            return Err(RestError::Config(
                "worker_threads must be at least 1".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(RestError::Config(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the number of worker threads
    pub fn worker_threads(mut self, count: usize) -> Self {
        self.config.worker_threads = count;
        self
    }

    /// Set how many requests may wait for a worker
    pub fn queue_capacity(mut self, count: usize) -> Self {
        self.config.queue_capacity = count;
        self
    }

    /// Set the request body limit (in bytes)
    pub fn max_body_size(mut self, bytes: usize) -> Self {
        self.config.max_body_size = bytes;
        self
    }

    /// Set the request body limit in KB
    ///
    /// Fails if the limit in bytes does not fit in a `usize`.
    pub fn max_body_kb(self, kb: usize) -> Result<Self> {
        let bytes = kb
            .checked_mul(1024)
            .ok_or_else(|| RestError::Config(format!("max body size of {} KB is too large", kb)))?;
        Ok(self.max_body_size(bytes))
    }

    /// Enable or disable fixture seeding
    pub fn seed_fixtures(mut self, seed: bool) -> Self {
        self.config.seed_fixtures = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
