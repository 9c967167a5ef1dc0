//! CLI module for trivia-api
//!
//! Provides command-line interface for:
//! - init: Create and seed a SQLite database file
//! - serve: Start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
