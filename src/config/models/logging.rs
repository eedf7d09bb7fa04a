//! Logging configuration
//!
//! Raw, caller-supplied logging settings. Fields that carry untrusted input
//! (file path, file mode, syslog endpoint) are kept loosely typed here so
//! the validator owns the rejection policy instead of serde.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Verbosity level for the subscriber filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl LogLevel {
    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human-oriented output
    Pretty,
    /// Single-line output, the default
    #[default]
    Compact,
    /// Newline-delimited JSON records
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Top-level logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Subscriber filter level
    #[serde(default)]
    pub level: LogLevel,
    /// Output format for the console sink
    #[serde(default)]
    pub format: LogFormat,
    /// Console sink configuration
    #[serde(default)]
    pub console: ConsoleConfig,
    /// File sink configuration
    #[serde(default)]
    pub file: FileConfig,
    /// Syslog endpoint configuration
    #[serde(default)]
    pub syslog: SyslogConfig,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables.
    ///
    /// Reads `LOG_LEVEL`, `LOG_FORMAT`, `LOG_FILE`, `LOG_FILE_MODE`,
    /// `LOG_SYSLOG_HOST`, and `LOG_SYSLOG_PORT`. Unset variables keep their
    /// defaults; values are carried raw and rejected during validation, not
    /// here, except for level and format which have a closed set of names.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.level = level.parse().map_err(|_| ConfigError::InvalidValue {
                field: "LOG_LEVEL",
                value: level,
            })?;
        }

        if let Ok(format) = env::var("LOG_FORMAT") {
            config.format = format.parse().map_err(|_| ConfigError::InvalidValue {
                field: "LOG_FORMAT",
                value: format,
            })?;
        }

        if let Ok(path) = env::var("LOG_FILE") {
            config.file.path = Some(path);
        }

        if let Ok(mode) = env::var("LOG_FILE_MODE") {
            config.file.mode = Some(FileMode::Text(mode));
        }

        if let Ok(host) = env::var("LOG_SYSLOG_HOST") {
            config.syslog.enabled = true;
            config.syslog.host = Some(host);
        }

        if let Ok(port) = env::var("LOG_SYSLOG_PORT") {
            let parsed = port
                .parse::<f64>()
                .map_err(|_| ConfigError::NotInteger { value: port })?;
            config.syslog.port = Some(parsed);
        }

        Ok(config)
    }

    /// Merge logging configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != LogLevel::default() {
            self.level = other.level;
        }
        if other.format != LogFormat::default() {
            self.format = other.format;
        }
        self.console = self.console.merge(other.console);
        self.file = self.file.merge(other.file);
        self.syslog = self.syslog.merge(other.syslog);
        self
    }
}

/// Console sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Enable the console sink
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ConsoleConfig {
    /// Merge console configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        self
    }
}

/// File sink configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Log file path; the file sink is disabled when unset
    pub path: Option<String>,
    /// Permission bits for newly created log files
    pub mode: Option<FileMode>,
}

impl FileConfig {
    /// Merge file sink configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.path.is_some() {
            self.path = other.path;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        self
    }
}

/// Raw file permission mode as it appears in configuration.
///
/// Numbers are taken literally (`0o640` stays `0o640`); strings are read as
/// octal digits (`"640"` and `"0640"` both mean `0o640`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileMode {
    /// Literal numeric mode
    Numeric(i64),
    /// Octal digit string
    Text(String),
}

/// Syslog endpoint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyslogConfig {
    /// Enable forwarding to syslog
    #[serde(default)]
    pub enabled: bool,
    /// Syslog hostname or IP literal
    pub host: Option<String>,
    /// Raw port value; integrality and bounds are checked during validation
    pub port: Option<f64>,
}

impl SyslogConfig {
    /// Merge syslog configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.enabled {
            self.enabled = other.enabled;
        }
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.port.is_some() {
            self.port = other.port;
        }
        self
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();

        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.console.enabled);
        assert!(config.file.path.is_none());
        assert!(config.file.mode.is_none());
        assert!(!config.syslog.enabled);
        assert!(config.syslog.host.is_none());
        assert!(config.syslog.port.is_none());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("debug".parse(), Ok(LogLevel::Debug));
        assert_eq!("WARNING".parse(), Ok(LogLevel::Warn));
        assert_eq!("Error".parse(), Ok(LogLevel::Error));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse(), Ok(LogFormat::Json));
        assert_eq!("PRETTY".parse(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let base = LoggingConfig::default();
        let mut other = LoggingConfig::default();
        other.level = LogLevel::Debug;
        other.file.path = Some("/var/log/app/app.log".to_string());
        other.syslog.enabled = true;
        other.syslog.host = Some("syslog.example.com".to_string());

        let merged = base.merge(other);

        assert_eq!(merged.level, LogLevel::Debug);
        assert_eq!(merged.file.path.as_deref(), Some("/var/log/app/app.log"));
        assert!(merged.syslog.enabled);
        assert_eq!(merged.syslog.host.as_deref(), Some("syslog.example.com"));
    }

    #[test]
    fn test_merge_keeps_base_when_other_is_default() {
        let mut base = LoggingConfig::default();
        base.level = LogLevel::Warn;
        base.file.mode = Some(FileMode::Text("0600".to_string()));

        let merged = base.merge(LoggingConfig::default());

        assert_eq!(merged.level, LogLevel::Warn);
        assert_eq!(merged.file.mode, Some(FileMode::Text("0600".to_string())));
    }

    #[test]
    fn test_file_mode_deserializes_both_forms() {
        let numeric: FileMode = serde_yaml::from_str("416").unwrap();
        assert_eq!(numeric, FileMode::Numeric(0o640));

        let text: FileMode = serde_yaml::from_str("\"0640\"").unwrap();
        assert_eq!(text, FileMode::Text("0640".to_string()));
    }
}
