//! CLI command implementations
//!
//! `init` creates the SQLite schema and seeds the six starter categories;
//! `serve` opens the store (or an empty in-memory one) and runs the HTTP
//! server until interrupted.

use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{MemoryStore, SqliteStore, TriviaStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// The canonical starter categories
const STARTER_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Parse arguments and run the selected command
pub async fn run() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse_args();
    run_command(cli.command).await
}

/// Run a single CLI command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { database } => init(&database),
        Command::Serve {
            database,
            host,
            port,
        } => serve(database.as_deref(), host, port).await,
    }
}

/// Initialize tracing from `RUST_LOG`, defaulting to info
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// `init` command: create the database file and seed starter categories
pub fn init(database: &Path) -> CliResult<()> {
    if database.exists() {
        return Err(CliError::AlreadyInitialized(
            database.display().to_string(),
        ));
    }

    let store = SqliteStore::open(database)?;
    for label in STARTER_CATEGORIES {
        store.insert_category(label)?;
    }

    tracing::info!("initialized trivia database at {}", database.display());
    Ok(())
}

/// `serve` command: open the store and run the server
async fn serve(database: Option<&Path>, host: String, port: u16) -> CliResult<()> {
    let store: Arc<dyn TriviaStore> = match database {
        Some(path) => Arc::new(SqliteStore::open(path)?),
        None => {
            tracing::warn!("no --database given; serving an empty in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let config = HttpServerConfig { host, port };
    let server = HttpServer::with_config(config, store);
    server.start().await?;
    Ok(())
}
