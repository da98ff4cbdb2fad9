//! Error types and path context for label generation and sheet output

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all label operations
#[derive(Debug)]
pub enum LabelError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operator cell token could not be resolved against the sheet geometry
    InvalidCell {
        /// Token as typed by the operator
        token: String,
        /// Why the token was rejected
        reason: String,
    },

    /// Every cell of a sheet was excluded while labels still need placing
    SheetFullyExcluded {
        /// Zero-based sheet index
        sheet: usize,
    },

    /// Placement needed more sheets than allowed
    SheetLimitExceeded {
        /// Maximum number of sheets
        limit: usize,
        /// Labels still waiting for a cell
        remaining: usize,
    },

    /// Placement operation called in the wrong state
    InvalidTransition {
        /// State the operation requires
        expected: &'static str,
        /// State the placer was in
        actual: &'static str,
    },

    /// Failed to build or write a sheet PDF
    PdfExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a sheet preview image
    PreviewExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system or terminal I/O failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Operator chose to exit before all labels were placed
    Cancelled,
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCell { token, reason } => {
                write!(f, "Invalid cell '{token}': {reason}")
            }
            Self::SheetFullyExcluded { sheet } => {
                write!(
                    f,
                    "Sheet {sheet} has every cell excluded but labels remain to be placed"
                )
            }
            Self::SheetLimitExceeded { limit, remaining } => {
                write!(
                    f,
                    "Sheet limit of {limit} reached with {remaining} labels still unplaced"
                )
            }
            Self::InvalidTransition { expected, actual } => {
                write!(f, "Placement expected state {expected} but was {actual}")
            }
            Self::PdfExport { path, reason } => {
                write!(f, "Failed to export PDF to '{}': {reason}", path.display())
            }
            Self::PreviewExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Cancelled => write!(f, "Cancelled by operator"),
        }
    }
}

impl std::error::Error for LabelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PreviewExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for label results
pub type Result<T> = std::result::Result<T, LabelError>;

impl From<std::io::Error> for LabelError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Replace an unknown path with the one being operated on
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| LabelError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Self {
        self.map_err(|error| match error {
            LabelError::FileSystem { source, .. } => LabelError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LabelError {
    LabelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid cell token error
pub fn invalid_cell(token: &str, reason: &impl ToString) -> LabelError {
    LabelError::InvalidCell {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}
