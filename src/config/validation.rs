//! Configuration validation
//!
//! Hardens raw logging configuration against path traversal, hostname
//! injection, and permission misconfiguration. Every check is synchronous
//! and stateless; risky-but-legal values are reported through
//! `tracing::warn!` without failing validation.

use std::net::IpAddr;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use super::models::{FileConfig, FileMode, LoggingConfig, SyslogConfig};
use crate::environment::Environment;
use crate::error::{ConfigError, Result};

/// Maximum accepted length for a log file path, in characters
pub const MAX_PATH_LENGTH: usize = 4096;

/// Maximum accepted length for a hostname, in characters (RFC 1035 bound)
pub const MAX_HOST_LENGTH: usize = 253;

/// Mode applied when the configured file mode is absent or malformed
pub const DEFAULT_FILE_MODE: u32 = 0o640;

/// System directories a log file must never land in
const RESTRICTED_DIRECTORIES: &[&str] = &[
    "/etc",
    "/usr",
    "/boot",
    "/root",
    "/sys",
    "/proc",
    "/dev",
    "C:\\Windows",
    "C:\\Program Files",
];

/// Validate a log file path and return its lexically normalized form.
///
/// Rejects empty input, embedded null bytes, paths longer than
/// [`MAX_PATH_LENGTH`], any `..` segment (checked on the raw string and
/// again after normalization), and paths under a restricted system
/// directory. Unicode content and control characters other than null are
/// accepted.
pub fn validate_log_path(input: &str) -> Result<String> {
    debug!("Validating log file path");

    if input.is_empty() {
        return Err(ConfigError::InvalidInput { field: "log path" });
    }

    if input.contains('\0') {
        return Err(ConfigError::NullByte);
    }

    let length = input.chars().count();
    if length > MAX_PATH_LENGTH {
        return Err(ConfigError::TooLong {
            field: "log path",
            limit: MAX_PATH_LENGTH,
            length,
        });
    }

    // Raw-string check first, on both separator styles, so no amount of
    // normalization can mask an escape segment
    if input.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(ConfigError::TraversalRejected {
            path: input.to_string(),
        });
    }

    let normalized = normalize_lexically(Path::new(input))?;

    if let Some(directory) = restricted_directory(&normalized) {
        return Err(ConfigError::RestrictedDirectory {
            directory,
            path: input.to_string(),
        });
    }

    Ok(normalized.to_string_lossy().into_owned())
}

/// Normalize a path lexically: drop `.` components, reject `..`.
///
/// No filesystem access happens here; symlinks are deliberately not
/// resolved so validation stays pure.
fn normalize_lexically(path: &Path) -> Result<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(ConfigError::TraversalRejected {
                    path: path.display().to_string(),
                });
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Return the restricted directory a path falls under, if any
fn restricted_directory(path: &Path) -> Option<&'static str> {
    let raw = path.to_string_lossy();
    for directory in RESTRICTED_DIRECTORIES.iter().copied() {
        if path.starts_with(directory) {
            return Some(directory);
        }

        // Windows roots compare case-insensitively, including when the
        // value is validated on a foreign host
        if directory.contains(':') && raw.len() >= directory.len() && raw.is_char_boundary(directory.len()) {
            let head = &raw[..directory.len()];
            let rest = &raw[directory.len()..];
            if head.eq_ignore_ascii_case(directory)
                && (rest.is_empty() || rest.starts_with('\\') || rest.starts_with('/'))
            {
                return Some(directory);
            }
        }
    }
    None
}

/// Validate a syslog host and return its normalized form.
///
/// Accepts IPv4/IPv6 literals and syntactically valid hostnames; hostnames
/// are lowercased. Warns (without failing) when the target is loopback in a
/// production-like environment.
pub fn validate_syslog_host(input: &str, environment: Environment) -> Result<String> {
    debug!("Validating syslog host");

    if input.is_empty() {
        return Err(ConfigError::InvalidInput {
            field: "syslog host",
        });
    }

    let length = input.chars().count();
    if length > MAX_HOST_LENGTH {
        return Err(ConfigError::TooLong {
            field: "syslog host",
            limit: MAX_HOST_LENGTH,
            length,
        });
    }

    // IP literals bypass the hostname grammar
    if let Ok(ip) = input.parse::<IpAddr>() {
        if environment.is_production_like() && ip.is_loopback() {
            warn!(
                host = %input,
                "syslog host is a loopback address in a production-like environment; log records will not leave this machine"
            );
        }
        return Ok(input.to_string());
    }

    let host = input.to_lowercase();
    if !is_valid_hostname(&host) {
        return Err(ConfigError::InvalidHostname {
            host: input.to_string(),
        });
    }

    if environment.is_production_like() && host == "localhost" {
        warn!(
            "syslog host is 'localhost' in a production-like environment; log records will not leave this machine"
        );
    }

    Ok(host)
}

/// Check a hostname against the label grammar: dot-separated labels of
/// 1..=63 ASCII alphanumerics or hyphens, with no hyphen at a label edge.
/// The empty-label rule also rejects consecutive, leading, and trailing
/// dots.
fn is_valid_hostname(host: &str) -> bool {
    host.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Validate an optional syslog port.
///
/// `None` means "unset" and succeeds as `None`. The raw value must be an
/// integer in [1, 65535]. Warns (without failing) on privileged ports in a
/// production-like environment.
pub fn validate_syslog_port(input: Option<f64>, environment: Environment) -> Result<Option<u16>> {
    let Some(raw) = input else {
        return Ok(None);
    };

    if raw.is_nan() || raw.is_infinite() || raw.fract() != 0.0 {
        return Err(ConfigError::NotInteger {
            value: raw.to_string(),
        });
    }

    let port = raw as i64;
    if !(1..=65535).contains(&port) {
        return Err(ConfigError::OutOfRange { value: port });
    }

    if environment.is_production_like() && port < 1024 {
        warn!(
            port,
            "syslog port is a privileged port; binding it requires elevated privileges"
        );
    }

    Ok(Some(port as u16))
}

/// Resolve a file permission mode, never failing.
///
/// Absent, negative, over-range, and non-octal inputs all fall back to
/// [`DEFAULT_FILE_MODE`]; a logging pipeline must not stop a process from
/// starting over its file permissions. Modes granting access beyond
/// owner/group are returned as configured, with a warning.
pub fn validate_file_mode(input: Option<&FileMode>) -> u32 {
    let mode = match input {
        None => DEFAULT_FILE_MODE,
        Some(FileMode::Numeric(raw)) => {
            if (0..=0o777).contains(raw) {
                *raw as u32
            } else {
                warn!(
                    value = *raw,
                    "file mode is outside the valid POSIX range; falling back to 0o{:o}",
                    DEFAULT_FILE_MODE
                );
                DEFAULT_FILE_MODE
            }
        }
        Some(FileMode::Text(raw)) => match parse_octal_mode(raw) {
            Some(mode) => mode,
            None => {
                warn!(
                    value = %raw,
                    "file mode is not an octal digit string; falling back to 0o{:o}",
                    DEFAULT_FILE_MODE
                );
                DEFAULT_FILE_MODE
            }
        },
    };

    if mode & 0o007 != 0 {
        warn!(
            "file mode 0o{:o} will allow access to other users on this machine",
            mode
        );
    }

    mode
}

/// Parse an octal digit string such as `"640"`, `"0640"`, or `"0o640"`
fn parse_octal_mode(raw: &str) -> Option<u32> {
    let digits = raw.trim();
    let digits = digits.strip_prefix("0o").unwrap_or(digits);
    if digits.is_empty() {
        return None;
    }
    let mode = u32::from_str_radix(digits, 8).ok()?;
    (mode <= 0o777).then_some(mode)
}

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self, environment: Environment) -> Result<()>;
}

impl Validate for LoggingConfig {
    fn validate(&self, environment: Environment) -> Result<()> {
        debug!("Validating logging configuration");

        self.file.validate(environment)?;
        self.syslog.validate(environment)?;

        debug!("Logging configuration validation completed");
        Ok(())
    }
}

impl Validate for FileConfig {
    fn validate(&self, _environment: Environment) -> Result<()> {
        if let Some(path) = &self.path {
            validate_log_path(path)?;
        }
        validate_file_mode(self.mode.as_ref());
        Ok(())
    }
}

impl Validate for SyslogConfig {
    fn validate(&self, environment: Environment) -> Result<()> {
        if self.enabled && self.host.is_none() {
            return Err(ConfigError::InvalidInput {
                field: "syslog host",
            });
        }
        if let Some(host) = self.host.as_deref() {
            validate_syslog_host(host, environment)?;
        }
        validate_syslog_port(self.port, environment)?;
        Ok(())
    }
}
