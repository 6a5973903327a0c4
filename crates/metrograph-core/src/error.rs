//! Error types and exit codes for metrograph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing database, unknown stop, malformed import)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing database, unknown stop (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during metrograph operations
#[derive(Error, Debug)]
pub enum MetroError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("database not found at {path:?}")]
    DatabaseNotFound { path: PathBuf },

    #[error("database already exists at {path:?}")]
    DatabaseExists { path: PathBuf },

    #[error("duplicate stop id: {id}")]
    DuplicateStop { id: i64 },

    #[error("unknown stop id: {id}")]
    UnknownStop { id: i64 },

    #[error("duplicate connection: {from} -> {to}")]
    DuplicateConnection { from: i64, to: i64 },

    #[error("connection from stop {id} to itself")]
    SelfLoop { id: i64 },

    #[error("no route from stop {from} to stop {to}")]
    NoRoute { from: i64, to: i64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MetroError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            MetroError::UnknownFormat(_) | MetroError::UsageError(_) => ExitCode::Usage,

            // Data errors
            MetroError::DatabaseNotFound { .. }
            | MetroError::DatabaseExists { .. }
            | MetroError::DuplicateStop { .. }
            | MetroError::UnknownStop { .. }
            | MetroError::DuplicateConnection { .. }
            | MetroError::SelfLoop { .. }
            | MetroError::NoRoute { .. } => ExitCode::Data,

            // Generic failures
            MetroError::Io(_)
            | MetroError::Json(_)
            | MetroError::Toml(_)
            | MetroError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MetroError::UnknownFormat(_) => "unknown_format",
            MetroError::UsageError(_) => "usage_error",
            MetroError::DatabaseNotFound { .. } => "database_not_found",
            MetroError::DatabaseExists { .. } => "database_exists",
            MetroError::DuplicateStop { .. } => "duplicate_stop",
            MetroError::UnknownStop { .. } => "unknown_stop",
            MetroError::DuplicateConnection { .. } => "duplicate_connection",
            MetroError::SelfLoop { .. } => "self_loop",
            MetroError::NoRoute { .. } => "no_route",
            MetroError::Io(_) => "io_error",
            MetroError::Json(_) => "json_error",
            MetroError::Toml(_) => "toml_error",
            MetroError::Other(_) => "other",
        }
    }
}

/// Result type alias for metrograph operations
pub type Result<T> = std::result::Result<T, MetroError>;
