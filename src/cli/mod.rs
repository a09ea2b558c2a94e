//! CLI module for rosterdb
//!
//! Provides command-line interface for:
//! - init: Create an empty student file
//! - start: Serve JSON requests from stdin until EOF
//! - exec: Execute one JSON request and exit

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{exec, init, run, run_command, serve, start};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_requests, write_error, write_json, write_response};
