//! Configuration file for the rosterdb CLI
//!
//! ```json
//! {
//!   "data_file": "./data/students.json",
//!   "id_prefix": "STU",
//!   "id_strategy": "sequential",
//!   "log_level": "info"
//! }
//! ```
//!
//! Only `data_file` is required.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::Severity;
use crate::store::{IdGenerator, IdStrategy, DEFAULT_ID_PREFIX};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Student file (required)
    pub data_file: String,

    /// Prefix for generated student ids (optional, default "STU")
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Id generation strategy (optional, default "sequential")
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Lowest log severity written (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.id_prefix.is_empty() || self.id_prefix.chars().any(char::is_whitespace) {
            return Err(CliError::config_error(format!(
                "Invalid id_prefix: '{}'. Must be non-empty with no whitespace.",
                self.id_prefix
            )));
        }

        self.severity()?;

        Ok(())
    }

    /// Get the student file as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }

    /// Parsed log level
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Id generator configured from `id_prefix` and `id_strategy`
    pub fn id_generator(&self) -> IdGenerator {
        IdGenerator::new(self.id_prefix.clone(), self.id_strategy)
    }
}
