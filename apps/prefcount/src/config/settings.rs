use std::env;
use std::str::FromStr;

use crate::domain::game_state::{GameState, DEFAULT_ADJUSTMENT_PLACE};
use crate::domain::place::Place;
use crate::domain::rules::PrefType;
use crate::error::AppError;

pub const PLAYERS_VAR: &str = "PREFCOUNT_PLAYERS";
pub const PREF_TYPE_VAR: &str = "PREFCOUNT_PREF_TYPE";
pub const DIVISIBLE_VAR: &str = "PREFCOUNT_DIVISIBLE_BY_N";
pub const ADJUSTMENT_VAR: &str = "PREFCOUNT_ADJUSTMENT_PLAYER";

/// Defaults applied to a freshly started game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub players: usize,
    pub pref_type: PrefType,
    pub divisible_by_n: bool,
    pub adjustment_place: Place,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: 3,
            pref_type: PrefType::Leningrad,
            divisible_by_n: true,
            adjustment_place: DEFAULT_ADJUSTMENT_PLACE,
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            players: parsed_var(PLAYERS_VAR)?.unwrap_or(defaults.players),
            pref_type: parsed_var(PREF_TYPE_VAR)?.unwrap_or(defaults.pref_type),
            divisible_by_n: bool_var(DIVISIBLE_VAR)?.unwrap_or(defaults.divisible_by_n),
            adjustment_place: parsed_var(ADJUSTMENT_VAR)?.unwrap_or(defaults.adjustment_place),
        })
    }

    /// Starts an empty game with these defaults.
    pub fn new_game(&self) -> Result<GameState, AppError> {
        let mut state = GameState::new(self.players)?;
        state.set_pref_type(self.pref_type);
        state.set_divisibility_mode(self.divisible_by_n, self.adjustment_place)?;
        Ok(state)
    }
}

/// Get an optional environment variable; blank counts as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed_var<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional_var(name)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| {
                AppError::config(format!("Invalid value '{raw}' for '{name}': {e}"))
            })
        })
        .transpose()
}

fn bool_var(name: &str) -> Result<Option<bool>, AppError> {
    optional_var(name)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::config(format!(
                "Invalid boolean '{raw}' for '{name}'"
            ))),
        })
        .transpose()
}
