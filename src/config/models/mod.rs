//! Configuration data models
//!
//! This module defines the configuration structures consumed by the
//! validator and the logger bootstrap.

pub mod logging;

// Re-export all configuration types
pub use logging::*;
