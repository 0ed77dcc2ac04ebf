//! Error codes for the prefcount engine and its command-line adapter.
//!
//! This module defines all error codes used throughout the crate.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! printed by the command-line tool.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Raw input / compute preconditions
    /// A player's mountain has not been entered
    MissingMountain,
    /// A player's pool has not been entered
    MissingPool,
    /// A whist count against an opponent has not been entered
    MissingWhist,
    /// Raw input text is not an integer
    ParseNumber,
    /// Raw tally outside the accepted range
    ValueOutOfRange,
    /// Seat is not part of the current game
    SeatNotActive,
    /// Final results requested before a compute pass
    ResultsNotReady,
    /// General validation error
    ValidationError,

    // Game configuration
    /// Only 3 and 4 player games are supported
    UnsupportedPlayerCount,
    /// Adjustment seat is not part of the current game
    AdjustmentSeatInactive,
    /// General configuration error
    ConfigError,

    // Adapter
    /// Game sheet could not be read
    IoError,
    /// Game sheet is not valid JSON
    InvalidSheet,
    /// Results could not be serialised
    OutputError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingMountain => "MISSING_MOUNTAIN",
            Self::MissingPool => "MISSING_POOL",
            Self::MissingWhist => "MISSING_WHIST",
            Self::ParseNumber => "PARSE_NUMBER",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::SeatNotActive => "SEAT_NOT_ACTIVE",
            Self::ResultsNotReady => "RESULTS_NOT_READY",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::UnsupportedPlayerCount => "UNSUPPORTED_PLAYER_COUNT",
            Self::AdjustmentSeatInactive => "ADJUSTMENT_SEAT_INACTIVE",
            Self::ConfigError => "CONFIG_ERROR",

            Self::IoError => "IO_ERROR",
            Self::InvalidSheet => "INVALID_SHEET",
            Self::OutputError => "OUTPUT_ERROR",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 14] = [
        Self::MissingMountain,
        Self::MissingPool,
        Self::MissingWhist,
        Self::ParseNumber,
        Self::ValueOutOfRange,
        Self::SeatNotActive,
        Self::ResultsNotReady,
        Self::ValidationError,
        Self::UnsupportedPlayerCount,
        Self::AdjustmentSeatInactive,
        Self::ConfigError,
        Self::IoError,
        Self::InvalidSheet,
        Self::OutputError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
