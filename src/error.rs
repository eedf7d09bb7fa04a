//! Configuration error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Categorized errors produced while loading and validating logging
/// configuration.
///
/// Path, host, and port failures are fatal to logger construction; file-mode
/// problems never surface here because they degrade to a safe default
/// instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a non-empty string")]
    InvalidInput { field: &'static str },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("log path cannot contain parent directory references ('..'): {path}")]
    TraversalRejected { path: String },

    #[error("log path is inside the restricted system directory {directory}: {path}")]
    RestrictedDirectory {
        directory: &'static str,
        path: String,
    },

    #[error("log path contains a null byte")]
    NullByte,

    #[error("{field} exceeds the maximum length of {limit} characters (got {length})")]
    TooLong {
        field: &'static str,
        limit: usize,
        length: usize,
    },

    #[error("'{host}' is not a valid hostname or IP address")]
    InvalidHostname { host: String },

    #[error("syslog port must be an integer, got {value}")]
    NotInteger { value: String },

    #[error("syslog port must be between 1 and 65535, got {value}")]
    OutOfRange { value: i64 },

    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to initialize logging: {0}")]
    Init(String),
}
