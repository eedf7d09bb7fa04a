//! Configuration management
//!
//! This module handles loading, validation, and merging of logging
//! configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::{
    DEFAULT_FILE_MODE, MAX_HOST_LENGTH, MAX_PATH_LENGTH, Validate, validate_file_mode,
    validate_log_path, validate_syslog_host, validate_syslog_port,
};

use std::path::Path;

use tracing::{debug, info};

use crate::environment::Environment;
use crate::error::{ConfigError, Result};

/// Top-level configuration for logger construction
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let logging: LoggingConfig = serde_yaml::from_str(content)?;
        Ok(Self { logging })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let logging = LoggingConfig::from_env()?;
        Ok(Self { logging })
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Validate the configuration and return the normalized values the
    /// sinks are built from.
    ///
    /// Path, host, and port failures abort logger construction; the file
    /// mode always resolves, falling back to [`DEFAULT_FILE_MODE`] when
    /// malformed.
    pub fn validate(&self, environment: Environment) -> Result<ValidatedLogging> {
        debug!("Validating configuration");

        let logging = &self.logging;

        let file_path = logging
            .file
            .path
            .as_deref()
            .map(validation::validate_log_path)
            .transpose()?;
        let file_mode = validation::validate_file_mode(logging.file.mode.as_ref());

        if logging.syslog.enabled && logging.syslog.host.is_none() {
            return Err(ConfigError::InvalidInput {
                field: "syslog host",
            });
        }
        let syslog_host = logging
            .syslog
            .host
            .as_deref()
            .map(|host| validation::validate_syslog_host(host, environment))
            .transpose()?;
        let syslog_port = validation::validate_syslog_port(logging.syslog.port, environment)?;

        debug!("Configuration validation completed");
        Ok(ValidatedLogging {
            file_path,
            file_mode,
            syslog_host,
            syslog_port,
        })
    }
}

/// Normalized configuration values produced by validation, ready for sink
/// construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLogging {
    /// Lexically normalized log file path, when a file sink is configured
    pub file_path: Option<String>,
    /// Permission bits applied to newly created log files
    pub file_mode: u32,
    /// Normalized syslog host, when configured
    pub syslog_host: Option<String>,
    /// Validated syslog port
    pub syslog_port: Option<u16>,
}
