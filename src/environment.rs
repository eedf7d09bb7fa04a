//! Environment mode handling
//!
//! Advisory warnings (localhost syslog targets, privileged ports, permissive
//! file modes) only matter when a process runs somewhere production-like.
//! The mode is detected once at the edge, from the `ENVIRONMENT` variable,
//! and passed into the validators explicitly so they stay pure and testable.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Runtime environment the process operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development, the default when nothing is configured
    #[default]
    Development,
    /// Automated test runs
    Testing,
    /// Production and production-like deployments
    Production,
}

impl Environment {
    /// Detect the environment from the `ENVIRONMENT` variable.
    ///
    /// Unknown or missing values resolve to [`Environment::Development`].
    pub fn detect() -> Self {
        env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Whether advisory warnings about risky-but-legal values should fire
    pub fn is_production_like(self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}
