//! Serve one of the record-keeping apps in this process

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use recordkeep_core::{AppConfig, AppDefaults};

/// Which app to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    School,
    Catalog,
    Inventory,
}

impl App {
    pub fn name(&self) -> &'static str {
        match self {
            Self::School => "school",
            Self::Catalog => "catalog",
            Self::Inventory => "inventory",
        }
    }

    pub fn defaults(&self) -> AppDefaults {
        match self {
            Self::School => AppDefaults::SCHOOL,
            Self::Catalog => AppDefaults::CATALOG,
            Self::Inventory => AppDefaults::INVENTORY,
        }
    }
}

/// Arguments shared by every app subcommand
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (overrides BIND_ADDR and the app default)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides DATABASE_URL and the app default)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Secret key (overrides SECRET_KEY)
    #[arg(long)]
    pub secret_key: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,
}

impl ServeArgs {
    /// Environment and `.env` first, then flags on top.
    pub fn into_config(self, app: App) -> Result<AppConfig> {
        let mut config = AppConfig::from_env(app.defaults())
            .with_context(|| format!("invalid {} configuration", app.name()))?;

        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(url) = self.database_url {
            config.database_url = url;
        }
        if let Some(secret) = self.secret_key {
            config.secret_key = secret;
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max.max(1);
        }
        Ok(config)
    }
}

/// Run the HTTP server for `app` (blocks until shutdown)
pub async fn run_serve(app: App, args: ServeArgs) -> Result<()> {
    let config = args.into_config(app)?;

    if config.uses_fallback_secret() {
        tracing::warn!(app = app.name(), "SECRET_KEY not set, using built-in fallback secret");
    }
    tracing::info!(app = app.name(), "Starting {} on {}", app.name(), config.bind_addr);

    match app {
        App::School => recordkeep_school::serve(config).await,
        App::Catalog => recordkeep_catalog::serve(config).await,
        App::Inventory => recordkeep_inventory::serve(config).await,
    }
    .with_context(|| format!("{} server error", app.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            bind: Some("127.0.0.1:9999".parse().unwrap()),
            database_url: Some("sqlite://flag.db".into()),
            secret_key: Some("from-flag".into()),
            max_connections: Some(0),
        };
        let config = args.into_config(App::Inventory).unwrap();
        assert_eq!(config.bind_addr.port(), 9999);
        assert_eq!(config.database_url, "sqlite://flag.db");
        assert_eq!(config.secret_key, "from-flag");
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn apps_have_distinct_defaults() {
        assert_eq!(App::School.defaults().bind_addr, "127.0.0.1:5000");
        assert_eq!(App::Catalog.defaults().database_url, "sqlite://catalog.db");
        assert_eq!(App::Inventory.name(), "inventory");
    }
}
