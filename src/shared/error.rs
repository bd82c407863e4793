use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report generated, or no high-risk dependencies above threshold
    Success = 0,
    /// High-risk dependencies were found and `--fail-on-high-risk` was requested
    HighRiskDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, unreadable export, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::HighRiskDetected => write!(f, "High-Risk Dependencies Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the catalogs and the report pipeline.
///
/// The first three variants are raised by the dependency catalog and are
/// matched on by callers; the remaining ones come from the outer layers and
/// carry a hint for the user.
#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("Dependency already in catalog: {key}")]
    DuplicateDependency { key: String },

    #[error("Dependency not found in catalog: {key}")]
    NotFound { key: String },

    #[error("Malformed dependency record: {reason}")]
    MalformedRecord { reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid directory: {path}\nReason: {reason}\n\n💡 Hint: Check the jsonDir and reportsDir settings in your config file")]
    InvalidPath { path: PathBuf, reason: String },

    /// Validation error for config and request values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
