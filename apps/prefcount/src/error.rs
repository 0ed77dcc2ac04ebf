use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;

/// Adapter-level error: everything the command-line tool can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid game sheet: {detail}")]
    InvalidSheet { detail: String },
    #[error("Output error: {detail}")]
    Output { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io { .. } => ErrorCode::IoError,
            AppError::InvalidSheet { .. } => ErrorCode::InvalidSheet,
            AppError::Output { .. } => ErrorCode::OutputError,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_sheet(detail: impl Into<String>) -> Self {
        Self::InvalidSheet {
            detail: detail.into(),
        }
    }

    pub fn output(detail: impl Into<String>) -> Self {
        Self::Output {
            detail: detail.into(),
        }
    }
}
