//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use carshop_axum::ServerConfig;
use carshop_axum::bootstrap::DEFAULT_DATABASE_PATH;
use carshop_db::DEFAULT_TABLE;
use clap::Parser;

/// Command-line interface for the car inventory server.
///
/// Every option can also come from the environment (or a `.env` file).
#[derive(Parser, Debug)]
#[command(name = "carshop")]
#[command(about = "Serve the car inventory HTTP API")]
#[command(version)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "CARSHOP_PORT", default_value_t = carshop_axum::DEFAULT_PORT)]
    pub port: u16,

    /// Path to the SQLite database file (created if missing)
    #[arg(long, env = "CARSHOP_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Name of the car table
    #[arg(long, env = "CARSHOP_TABLE", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Server configuration resolved from the parsed arguments.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::default()
            .with_port(self.port)
            .with_database_path(&self.database)
            .with_table(&self.table)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_args() {
        let cli = Cli::parse_from([
            "carshop",
            "--port",
            "9000",
            "--database",
            "/tmp/shop.db",
            "--table",
            "inventory",
            "--verbose",
        ]);

        let config = cli.server_config();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.table, "inventory");
        assert_eq!(cli.default_log_filter(), "debug");
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["carshop", "--port", "not-a-port"]).is_err());
    }
}
