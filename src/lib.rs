//! # Logwarden
//!
//! Hardened logging configuration for long-running services.
//!
//! Raw configuration values (log file paths, syslog endpoints, file
//! permission modes) are untrusted input: they arrive from environment
//! variables, config files, and deploy tooling, and a bad value can redirect
//! logs into `/etc`, leak records to the wrong host, or leave a world-readable
//! audit trail. Logwarden validates every value before a single sink is
//! constructed.
//!
//! ## Features
//!
//! - **Path hardening**: rejects traversal segments, null bytes, over-long
//!   paths, and restricted system directories
//! - **Endpoint validation**: hostname/IP grammar checks with advisory
//!   warnings for loopback targets in production
//! - **Safe permission fallback**: malformed file modes degrade to `0o640`
//!   instead of failing startup, with a warning for world-accessible modes
//! - **Fail fast**: path, host, and port problems abort logger construction
//!   with a categorized error
//! - **Tracing bootstrap**: installs a `tracing-subscriber` stack (console
//!   and file sinks) from the validated configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logwarden::{Config, Environment, logger};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/logwarden.yaml")?;
//!     let environment = Environment::detect();
//!     logger::init(&config, environment)?;
//!
//!     tracing::info!("service started");
//!     Ok(())
//! }
//! ```
//!
//! ## Validators
//!
//! The validation functions are exported directly for callers that manage
//! their own subscriber:
//!
//! ```rust
//! use logwarden::config::{validate_log_path, validate_syslog_port};
//! use logwarden::Environment;
//!
//! let path = validate_log_path("logs/app.log").unwrap();
//! assert_eq!(path, "logs/app.log");
//!
//! let port = validate_syslog_port(Some(514.0), Environment::Development).unwrap();
//! assert_eq!(port, Some(514));
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod environment;
pub mod error;
pub mod logger;

// Re-export main types
pub use config::{Config, LoggingConfig, ValidatedLogging};
pub use environment::Environment;
pub use error::{ConfigError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "logwarden");
        assert!(!DESCRIPTION.is_empty());
    }
}
