//! Per-player raw tallies and the values derived from them.

use crate::domain::place::Place;
use crate::domain::rules::{check_tally, round_half_up, WHISTS_PER_MOUNTAIN};
use crate::domain::seat_map::SeatMap;
use crate::errors::domain::{DomainError, ValidationKind};

/// Group-level values a player's mountain is normalized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountainBasis {
    /// 2 for Leningradka, 1 otherwise.
    pub pool_multiplier: i32,
    /// Largest pool across the active players.
    pub max_pool: i32,
}

/// Group standing produced by a compute pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing {
    pub average_mountain: f64,
    pub min_mountain: i32,
}

/// Raw inputs and derived results for one seat.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    place: Place,
    name: String,
    mountain: Option<i32>,
    pool: Option<i32>,
    /// Whists this player holds against each opponent.
    whists: SeatMap<i32>,
    /// "Divisible by N" adjustment to this player's mountain (-1 or +1).
    pub(crate) mount_fix: Option<i32>,
    /// "Divisible by N" whist adjustments this player holds against opponents.
    pub(crate) whist_fixes: SeatMap<i32>,
    /// Balance against each opponent; the total is stored under the own seat.
    pub(crate) whist_saldo: SeatMap<i32>,
}

impl PlayerRecord {
    pub fn new(place: Place) -> Self {
        Self {
            place,
            name: String::new(),
            mountain: None,
            pool: None,
            whists: SeatMap::new(),
            mount_fix: None,
            whist_fixes: SeatMap::new(),
            whist_saldo: SeatMap::new(),
        }
    }

    pub fn place(&self) -> Place {
        self.place
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Capitalized first letter of the name, or an empty string.
    pub fn name_letter(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn mountain(&self) -> Option<i32> {
        self.mountain
    }

    pub fn set_mountain(&mut self, mountain: Option<i32>) -> Result<(), DomainError> {
        self.mountain = mountain.map(|m| check_tally(m, "mountain")).transpose()?;
        Ok(())
    }

    pub fn set_mountain_from_input(&mut self, raw: &str) -> Result<(), DomainError> {
        self.mountain = parse_raw(raw, "mountain")?;
        Ok(())
    }

    pub fn pool(&self) -> Option<i32> {
        self.pool
    }

    pub fn set_pool(&mut self, pool: Option<i32>) -> Result<(), DomainError> {
        self.pool = pool.map(|p| check_tally(p, "pool")).transpose()?;
        Ok(())
    }

    pub fn set_pool_from_input(&mut self, raw: &str) -> Result<(), DomainError> {
        self.pool = parse_raw(raw, "pool")?;
        Ok(())
    }

    pub fn whists_against(&self, opponent: Place) -> Option<i32> {
        self.whists.value(opponent)
    }

    pub fn set_whists_against(
        &mut self,
        opponent: Place,
        whists: Option<i32>,
    ) -> Result<(), DomainError> {
        let whists = whists.map(|w| check_tally(w, "whists")).transpose()?;
        self.whists.set(opponent, whists);
        Ok(())
    }

    /// Parses and stores the whist count against `opponent`, returning the stored value.
    pub fn set_whist_for_opponent(
        &mut self,
        opponent: Place,
        raw: &str,
    ) -> Result<Option<i32>, DomainError> {
        let value = parse_raw(raw, "whists")?;
        self.whists.set(opponent, value);
        Ok(value)
    }

    /// Whists against `opponent` for display: `"72."`, or empty when unset.
    pub fn whist_display_string(&self, opponent: Place) -> String {
        self.whists_against(opponent)
            .map(|w| format!("{w}."))
            .unwrap_or_default()
    }

    pub fn mount_fix(&self) -> Option<i32> {
        self.mount_fix
    }

    pub fn whist_fix_against(&self, opponent: Place) -> Option<i32> {
        self.whist_fixes.value(opponent)
    }

    pub fn whist_fixes(&self) -> &SeatMap<i32> {
        &self.whist_fixes
    }

    pub fn whist_saldo_against(&self, opponent: Place) -> Option<i32> {
        self.whist_saldo.value(opponent)
    }

    /// Total saldo across all opponents (stored under the own seat).
    pub fn total_whist_saldo(&self) -> Option<i32> {
        self.whist_saldo.value(self.place)
    }

    pub fn whist_saldo(&self) -> &SeatMap<i32> {
        &self.whist_saldo
    }

    /// Whists against `opponent` including any divisibility fix.
    pub(crate) fn effective_whists_against(&self, opponent: Place) -> Option<i32> {
        self.whists_against(opponent)
            .map(|w| w + self.whist_fix_against(opponent).unwrap_or(0))
    }

    pub(crate) fn clear_derived(&mut self) {
        self.mount_fix = None;
        self.whist_fixes.clear();
        self.whist_saldo.clear();
    }

    /// Mountain normalized as if this player had played to the largest pool.
    ///
    /// Unset raw values count as 0 here; the compute pass rejects them first.
    pub fn new_mountain(&self, basis: MountainBasis) -> i32 {
        let mountain = self.mountain.unwrap_or(0);
        let pool = self.pool.unwrap_or(0);
        mountain - basis.pool_multiplier * (pool - basis.max_pool)
    }

    /// Normalized, fix-adjusted mountain relative to the group, in whists (x10).
    pub fn final_mountain_in_whists(&self, basis: MountainBasis, standing: Standing) -> i32 {
        let adjusted = self.new_mountain(basis) + self.mount_fix.unwrap_or(0);
        let relative = f64::from(adjusted - standing.min_mountain);
        round_half_up((standing.average_mountain - relative) * WHISTS_PER_MOUNTAIN) as i32
    }

    /// Final mountain plus total whist saldo.
    pub fn final_score_in_whists(&self, basis: MountainBasis, standing: Standing) -> i32 {
        self.final_mountain_in_whists(basis, standing) + self.total_whist_saldo().unwrap_or(0)
    }
}

/// Parses raw integer text. Blank text means "not entered".
fn parse_raw(raw: &str, what: &str) -> Result<Option<i32>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed.parse::<i32>().map_err(|e| {
        DomainError::validation(
            ValidationKind::ParseNumber,
            format!("Invalid {what} value '{trimmed}': {e}"),
        )
    })?;
    check_tally(value, what).map(Some)
}
