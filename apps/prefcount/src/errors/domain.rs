//! Domain-level error type used by the score engine and its adapters.
//!
//! This error type is IO- and presentation-agnostic. Adapters should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::error_code::ErrorCode;

/// Validation error kinds: bad raw input or a violated compute precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MissingMountain,
    MissingPool,
    MissingWhist,
    ParseNumber,
    ValueOutOfRange,
    SeatNotActive,
    ResultsNotReady,
    Other(String),
}

/// Configuration error kinds, raised while a game is being set up.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    UnsupportedPlayerCount,
    AdjustmentSeatInactive,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or compute precondition violation
    Validation(ValidationKind, String),
    /// Invalid game configuration
    Config(ConfigKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Config(kind, d) => write!(f, "config error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Config(kind, detail.into())
    }

    /// Canonical error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::MissingMountain => ErrorCode::MissingMountain,
                ValidationKind::MissingPool => ErrorCode::MissingPool,
                ValidationKind::MissingWhist => ErrorCode::MissingWhist,
                ValidationKind::ParseNumber => ErrorCode::ParseNumber,
                ValidationKind::ValueOutOfRange => ErrorCode::ValueOutOfRange,
                ValidationKind::SeatNotActive => ErrorCode::SeatNotActive,
                ValidationKind::ResultsNotReady => ErrorCode::ResultsNotReady,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Config(kind, _) => match kind {
                ConfigKind::UnsupportedPlayerCount => ErrorCode::UnsupportedPlayerCount,
                ConfigKind::AdjustmentSeatInactive => ErrorCode::AdjustmentSeatInactive,
                ConfigKind::Other(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// True for errors caused by missing raw input.
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(
                ValidationKind::MissingMountain
                    | ValidationKind::MissingPool
                    | ValidationKind::MissingWhist,
                _
            )
        )
    }
}
