//! Error types for feeds, rendering and configuration

use std::fmt;
use std::path::PathBuf;

/// Main error type for all wall operations
#[derive(Debug)]
pub enum WallError {
    /// Transport failure while talking to the image API
    Network {
        /// Requested URL
        url: String,
        /// Underlying HTTP client error
        source: reqwest::Error,
    },

    /// Request did not settle within the configured timeout
    Timeout {
        /// Requested URL
        url: String,
    },

    /// Response arrived but lacked expected fields or carried a non-200 code
    Format {
        /// Description of what's wrong with the response
        reason: String,
    },

    /// Catalog file is not valid JSON for the catalog schema
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save the layout preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Logger could not be started
    Logging {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },
}

/// The two recoverable fetch failure kinds
///
/// Both are handled identically by the page loader; they differ only in the
/// message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure or timeout
    Network,
    /// Malformed response or non-200 code
    Format,
}

impl WallError {
    /// Classify this error as one of the recoverable fetch failure kinds
    pub const fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => FailureKind::Network,
            _ => FailureKind::Format,
        }
    }

    /// Wrap an HTTP client error, separating timeouts from other transport failures
    pub fn from_request(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if source.is_decode() {
            Self::Format {
                reason: format!("undecodable response from '{url}': {source}"),
            }
        } else {
            Self::Network {
                url: url.to_string(),
                source,
            }
        }
    }
}

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { url, source } => {
                write!(f, "Network error requesting '{url}': {source}")
            }
            Self::Timeout { url } => write!(f, "Request to '{url}' timed out"),
            Self::Format { reason } => write!(f, "Malformed response: {reason}"),
            Self::CatalogParse { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Logging { source } => write!(f, "Failed to start logger: {source}"),
        }
    }
}

impl std::error::Error for WallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network { source, .. } => Some(source),
            Self::CatalogParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            Self::Timeout { .. } | Self::Format { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for wall results
pub type Result<T> = std::result::Result<T, WallError>;

impl From<flexi_logger::FlexiLoggerError> for WallError {
    fn from(source: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging { source }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WallError {
    WallError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a format error
pub fn format_error(reason: &impl ToString) -> WallError {
    WallError::Format {
        reason: reason.to_string(),
    }
}
