//! CLI argument definitions using clap
//!
//! Commands:
//! - trivia-api init --database <path>
//! - trivia-api serve [--database <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// trivia-api - A small trivia question and category API server
#[derive(Parser, Debug)]
#[command(name = "trivia-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a SQLite database file and seed the starter categories
    Init {
        /// Path to the database file
        #[arg(long, default_value = "./trivia.db")]
        database: PathBuf,
    },

    /// Start the trivia API server
    Serve {
        /// Path to the database file; omitted means an empty in-memory store
        #[arg(long)]
        database: Option<PathBuf>,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
