//! Error types for trim operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for trim operations
pub type Result<T> = std::result::Result<T, TrimError>;

/// Error types for trim operations
#[derive(Error, Debug)]
pub enum TrimError {
    /// The input path does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The format was recognized but its codec was not compiled into this build
    #[error("Required image codec is unavailable: {format} ({operation}). Rebuild with the matching `image` crate feature enabled")]
    CodecUnavailable { format: String, operation: String },

    /// Input/output errors (permission denied, disk full, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode, encode or format errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TrimError {
    /// Create a new input-not-found error
    pub fn input_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::InputNotFound(path.as_ref().to_path_buf())
    }

    /// Create a new codec-unavailable error
    pub fn codec_unavailable(format: image::ImageFormat, operation: &str) -> Self {
        Self::CodecUnavailable {
            format: format!("{format:?}"),
            operation: operation.to_string(),
        }
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<Path>>(operation: &str, path: P, error: &std::io::Error) -> Self {
        Self::Io(std::io::Error::new(
            error.kind(),
            format!(
                "Failed to {} '{}': {}",
                operation,
                path.as_ref().display(),
                error
            ),
        ))
    }

    /// Create configuration error with valid ranges
    pub fn config_value_error<T: std::fmt::Display>(
        parameter: &str,
        value: T,
        valid_range: &str,
        recommended: Option<T>,
    ) -> Self {
        let recommendation = match recommended {
            Some(rec) => format!(" Recommended: {rec}"),
            None => String::new(),
        };

        Self::InvalidConfig(format!(
            "Invalid {parameter}: {value} (valid range: {valid_range}).{recommendation}"
        ))
    }
}
