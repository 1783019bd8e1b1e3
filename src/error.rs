//! Error types for `siteconf`
//!
//! Settings loading has exactly one advisory (non-error) path: a missing
//! generated header file. Everything else that goes wrong while reading or
//! validating the site settings surfaces through `ConfigError`.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Settings loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file that exists could not be read.
    ///
    /// Absence of the optional header file is NOT this error; that path is
    /// advisory and produces a `LoadWarning` instead.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing of the override file failed
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the override file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Settings validation failed
    #[error("validation failed for {path}")]
    Validation {
        /// Site root the settings were loaded for
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during settings validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Path to the problematic setting (e.g., "plugins[2]")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - prevents the settings from being handed to the build engine
    Error,
    /// Warning - potential issue that does not prevent loading
    Warning,
}

/// Result type alias for `siteconf` operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ============================================================================
// Tests
// ============================================================================
