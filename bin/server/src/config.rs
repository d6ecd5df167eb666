//! Centralized server configuration.
//!
//! Loaded via the `config` crate from an optional `table-finder.toml` in the
//! working directory, overridden by `TABLE_FINDER_*` environment variables
//! (nested keys joined with `__`, e.g. `TABLE_FINDER_ROSTER__PATH`).
//!
//! See [`RosterConfig`](table_finder_roster::RosterConfig) for the seating
//! list settings.

use serde::Deserialize;
use std::net::SocketAddr;
use table_finder_roster::RosterConfig;

/// Server configuration composed from library configs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Seating list configuration.
    pub roster: RosterConfig,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Minutes of inactivity after which a visitor's remembered choices
    /// are dropped. Must be at least 1.
    #[serde(default = "default_idle_minutes")]
    pub idle_minutes: u32,

    /// Interval between session cleanup runs, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_idle_minutes() -> u32 {
    120
}

fn default_cleanup_interval_seconds() -> u64 {
    300
}

fn default_secure_cookies() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_minutes: default_idle_minutes(),
            cleanup_interval_seconds: default_cleanup_interval_seconds(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from `table-finder.toml` (if present) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("table-finder").required(false))
            .add_source(
                config::Environment::with_prefix("TABLE_FINDER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, config::ConfigError> {
        if self.session.idle_minutes == 0 {
            return Err(config::ConfigError::Message(
                "session.idle_minutes must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
