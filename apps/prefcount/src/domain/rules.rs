use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{ConfigKind, DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 4;

/// Whists per mountain point in the final conversion.
pub const WHISTS_PER_MOUNTAIN: f64 = 10.0;

/// Largest magnitude accepted for any raw tally. Keeps every derived sum,
/// difference and x10 conversion well inside `i32`.
pub const MAX_TALLY: i32 = 1_000_000;

/// Scoring variant. Decides how a pool difference converts to mountain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefType {
    /// 1 pool = 2 mountain ("Leningradka").
    #[default]
    Leningrad,
    /// 1 pool = 1 mountain ("Sochinka").
    Sochi,
}

impl PrefType {
    pub fn from_leningradka(leningradka: bool) -> Self {
        if leningradka {
            PrefType::Leningrad
        } else {
            PrefType::Sochi
        }
    }

    pub fn is_leningradka(self) -> bool {
        self == PrefType::Leningrad
    }

    pub fn pool_multiplier(self) -> i32 {
        match self {
            PrefType::Leningrad => 2,
            PrefType::Sochi => 1,
        }
    }
}

impl fmt::Display for PrefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefType::Leningrad => f.write_str("leningrad"),
            PrefType::Sochi => f.write_str("sochi"),
        }
    }
}

impl FromStr for PrefType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leningrad" | "leningradka" => Ok(PrefType::Leningrad),
            "sochi" | "sochinka" => Ok(PrefType::Sochi),
            other => Err(DomainError::config(
                ConfigKind::Other(format!("pref type {other}")),
                format!("Unknown pref type: {s}"),
            )),
        }
    }
}

pub fn validate_player_count(player_count: usize) -> Result<(), DomainError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(DomainError::config(
            ConfigKind::UnsupportedPlayerCount,
            format!("Only 3 and 4 players supported, got {player_count}"),
        ))
    }
}

/// Rejects raw tallies outside `-MAX_TALLY..=MAX_TALLY`.
pub fn check_tally(value: i32, what: &str) -> Result<i32, DomainError> {
    if (-MAX_TALLY..=MAX_TALLY).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::validation(
            ValidationKind::ValueOutOfRange,
            format!("{what} value {value} is outside -{MAX_TALLY}..={MAX_TALLY}"),
        ))
    }
}

/// Whist fix that compensates a single-seat mountain adjustment.
#[inline]
pub fn divisible_fix_whists(player_count: usize) -> i32 {
    player_count as i32 - 1
}

/// Half-up rounding to the nearest integer (`floor(x + 0.5)`).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Rounds to 2 decimal digits on the scaled value.
#[inline]
pub fn round2(x: f64) -> f64 {
    round_half_up(x * 100.0) / 100.0
}
