//! Logger bootstrap
//!
//! Validates the logging configuration, then installs the global `tracing`
//! subscriber: a console fmt layer honoring the configured format, and an
//! optional file sink opened with the validated permission mode.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{Config, LogFormat, ValidatedLogging};
use crate::environment::Environment;
use crate::error::{ConfigError, Result};

/// Validate the configuration and install the global subscriber.
///
/// Any path, host, or port validation failure aborts initialization before
/// a single sink is constructed. Returns the normalized values the sinks
/// were built from. Fails if a global subscriber is already installed.
pub fn init(config: &Config, environment: Environment) -> Result<ValidatedLogging> {
    let validated = config.validate(environment)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = Vec::new();

    if config.logging.console.enabled {
        layers.push(console_layer(config.logging.format));
    }

    if let Some(path) = &validated.file_path {
        let file = open_log_file(Path::new(path), validated.file_mode)?;
        layers.push(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .boxed(),
        );
    }

    let level = LevelFilter::from_level(config.logging.level.into());
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| ConfigError::Init(e.to_string()))?;

    debug!(
        environment = %environment,
        config = %effective_config(config),
        "logging initialized"
    );

    Ok(validated)
}

/// Build the console layer for the configured format
fn console_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    match format {
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
        LogFormat::Json => fmt::layer().json().boxed(),
    }
}

/// Open (or create) the log file, applying the validated mode to newly
/// created files on Unix. Parent directories are created as needed.
fn open_log_file(path: &Path, mode: u32) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    options.open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Render the effective logging configuration for the startup breadcrumb
fn effective_config(config: &Config) -> String {
    serde_json::to_string(&config.logging).unwrap_or_else(|_| "<unserializable>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/app.log");

        let file = open_log_file(&path, 0o640).unwrap();
        drop(file);

        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_log_file_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let file = open_log_file(&path, 0o640).unwrap();
        drop(file);

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // The umask can only clear bits, never add them
        assert_eq!(mode & 0o007, 0, "no world access expected, got 0o{:o}", mode);
        assert_eq!(mode & 0o600, 0o600, "owner read/write expected, got 0o{:o}", mode);
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let mut file = open_log_file(&path, 0o640).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(&path, 0o640).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }

    #[test]
    fn test_effective_config_is_json() {
        let rendered = effective_config(&Config::default());
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["level"], "info");
    }
}
