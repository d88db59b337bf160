//! Error handling module for SoftSub

use thiserror::Error;

use crate::probe::FileRole;

/// Main error type for SoftSub operations
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Input file not found or inaccessible
    #[error("{role} file not found: {path}")]
    NotFound { role: FileRole, path: String },

    /// File extension not in the supported set for its role
    #[error("Unsupported {role} format '.{extension}' (supported: {supported})")]
    UnsupportedFormat {
        role: FileRole,
        extension: String,
        supported: String,
    },

    /// Malformed subtitle track specification
    #[error("Invalid subtitle spec '{spec}': {message}")]
    InvalidSpec { spec: String, message: String },

    /// FFmpeg binary not available on PATH
    #[error("FFmpeg is not installed or not in PATH. Install it from https://ffmpeg.org/download.html")]
    ToolMissing,

    /// FFmpeg ran but returned a non-zero status
    #[error("FFmpeg failed with exit code {status}:\n{stderr}")]
    ExecutionFailure { status: i32, stderr: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for SoftSub operations
pub type EmbedResult<T> = std::result::Result<T, EmbedError>;
