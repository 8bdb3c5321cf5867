/// Error types for the taxcalc batch job.
///
/// Every failure the job can hit is an I/O failure in the broad sense: an input
/// file that cannot be opened, an output file that cannot be written, or a
/// salary line that does not parse. The variants only sharpen the message; the
/// caller decides whether a failure aborts the run or is reported and skipped.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for taxcalc operations
pub type TaxResult<T> = Result<T, TaxError>;

/// Errors that can occur while loading, reporting or persisting records
#[derive(Error, Debug)]
pub enum TaxError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Invalid salary on line {line}: {value:?}")]
    InvalidSalary { line: usize, value: String },
    #[error("Unexpected end of input: expected {expected} lines, found {found}")]
    UnexpectedEof { expected: usize, found: usize },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl TaxError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn invalid_salary(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidSalary {
            line,
            value: value.into(),
        }
    }

    pub fn unexpected_eof(expected: usize, found: usize) -> Self {
        Self::UnexpectedEof { expected, found }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Attaches the offending path to the common open/create failures
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::file_not_found(path),
            io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::IoError(err),
        }
    }
}

impl From<config::ConfigError> for TaxError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
