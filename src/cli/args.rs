//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb init --config <path>
//! - rosterdb start --config <path>
//! - rosterdb exec --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterdb - A small, strict, single-user student record manager
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty student file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,
    },

    /// Serve JSON requests from stdin, one per line, until EOF
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,
    },

    /// Execute a single JSON request from stdin and exit
    Exec {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
