//! Application configuration - environment loading
//!
//! Values come from (highest first) explicit overrides, environment
//! variables, a `.env` file, then per-app defaults:
//! - `BIND_ADDR`: listen address
//! - `DATABASE_URL`: sqlx connection string
//! - `SECRET_KEY`: secret carried in the app context

use std::net::SocketAddr;

/// Secret used when `SECRET_KEY` is not set.
pub const FALLBACK_SECRET: &str = "fallback-secret";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Hardcoded fallbacks for one app.
#[derive(Debug, Clone, Copy)]
pub struct AppDefaults {
    pub bind_addr: &'static str,
    pub database_url: &'static str,
}

impl AppDefaults {
    pub const SCHOOL: Self = Self {
        bind_addr: "127.0.0.1:5000",
        database_url: "sqlite://school.db",
    };

    pub const CATALOG: Self = Self {
        bind_addr: "127.0.0.1:5001",
        database_url: "sqlite://catalog.db",
    };

    pub const INVENTORY: Self = Self {
        bind_addr: "127.0.0.1:5002",
        database_url: "sqlite://inventory.db",
    };
}

/// Resolved configuration for one app process
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// sqlx connection string (`sqlite://...`)
    pub database_url: String,
    /// Secret value (defaults to [`FALLBACK_SECRET`])
    pub secret_key: String,
    /// Pool size
    pub max_connections: u32,
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl AppConfig {
    /// Load `.env` (if present) and read the environment, falling back to
    /// `defaults` for anything unset.
    pub fn from_env(defaults: AppDefaults) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        Self::resolve(
            defaults,
            std::env::var("BIND_ADDR").ok(),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("SECRET_KEY").ok(),
        )
    }

    /// Build a config from optional explicit values.
    pub fn resolve(
        defaults: AppDefaults,
        bind_addr: Option<String>,
        database_url: Option<String>,
        secret_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind = bind_addr.unwrap_or_else(|| defaults.bind_addr.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::BindAddr { value: bind, source })?;

        Ok(Self {
            bind_addr,
            database_url: database_url.unwrap_or_else(|| defaults.database_url.to_string()),
            secret_key: secret_key.unwrap_or_else(|| FALLBACK_SECRET.to_string()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }

    /// Config for tests: in-memory database, ephemeral port.
    pub fn in_memory() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database_url: "sqlite::memory:".to_string(),
            secret_key: FALLBACK_SECRET.to_string(),
            max_connections: 1,
        }
    }

    /// True when no secret was configured.
    pub fn uses_fallback_secret(&self) -> bool {
        self.secret_key == FALLBACK_SECRET
    }
}
