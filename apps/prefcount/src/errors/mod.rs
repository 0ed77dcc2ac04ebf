//! Error handling for the prefcount scoring engine.

pub mod domain;
pub mod error_code;

pub use domain::{ConfigKind, DomainError, ValidationKind};
pub use error_code::ErrorCode;
