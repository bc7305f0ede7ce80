//! Axum server bootstrap - the composition root.
//!
//! Opens the database, builds the repositories and services, and hands the
//! resulting `AxumContext` to the router.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use carshop_core::AppCore;
use carshop_db::{CoreFactory, DEFAULT_TABLE, setup_database};

use crate::routes::create_router;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Database file used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "carshop.db";

/// Configuration for the Axum server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Name of the car table.
    pub table: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the database file.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the car table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

/// Fully-initialized Axum context.
///
/// Handlers reach the services through this struct.
pub struct AxumContext {
    /// Core application services.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap already-composed core services.
    pub fn new(core: AppCore) -> Self {
        Self {
            core: Arc::new(core),
        }
    }
}

/// Bootstrap the Axum server with all services.
///
/// Creates the database file and car table if they do not exist yet.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    info!(
        target: "carshop.config",
        port = config.port,
        database_path = %config.database_path.display(),
        table = %config.table,
        "Axum bootstrap resolved configuration"
    );

    let pool = setup_database(&config.database_path, &config.table).await?;
    let core = CoreFactory::build_app_core(pool, &config.table)?;

    Ok(AxumContext::new(core))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("carshop web server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_builders() {
        let config = ServerConfig::default()
            .with_port(9090)
            .with_database_path("/tmp/shop.db")
            .with_table("inventory");

        assert_eq!(config.port, 9090);
        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.table, "inventory");
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_invalid_table_name() {
        let dir = std::env::temp_dir().join("carshop-bootstrap-invalid-table");
        let config = ServerConfig::default()
            .with_database_path(dir.join("shop.db"))
            .with_table("car; DROP TABLE car");

        assert!(bootstrap(&config).await.is_err());
    }
}
