//! Session-level container: options, players and computed aggregates.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::domain::place::{require_active, Place};
use crate::domain::player::{MountainBasis, PlayerRecord, Standing};
use crate::domain::rules::{validate_player_count, PrefType};
use crate::domain::seat_map::SeatMap;
use crate::errors::domain::{ConfigKind, DomainError, ValidationKind};

/// Seat that receives the divisibility adjustment unless told otherwise.
pub const DEFAULT_ADJUSTMENT_PLACE: Place = Place::East;

/// A raw value that still has to be entered before computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Mountain(Place),
    Pool(Place),
    Whist { holder: Place, opponent: Place },
}

impl MissingInput {
    pub fn to_error(self) -> DomainError {
        match self {
            MissingInput::Mountain(p) => DomainError::validation(
                ValidationKind::MissingMountain,
                format!("Mountain for {p} is not entered"),
            ),
            MissingInput::Pool(p) => DomainError::validation(
                ValidationKind::MissingPool,
                format!("Pool for {p} is not entered"),
            ),
            MissingInput::Whist { holder, opponent } => DomainError::validation(
                ValidationKind::MissingWhist,
                format!("Whists of {holder} against {opponent} are not entered"),
            ),
        }
    }
}

/// Entire scoring session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// true: 1 pool = 2 mountain; false: 1 pool = 1 mountain.
    leningradka: bool,
    mount_divisible_by_n: bool,
    adjustment_place: Place,
    player_count: usize,
    players: SeatMap<PlayerRecord>,
    pub(crate) min_mountain: i32,
    pub(crate) average_mountain: f64,
    pub(crate) final_scores_ready: bool,
}

impl GameState {
    /// New session for 3 or 4 players; Leningradka, no divisibility adjustment.
    pub fn new(player_count: usize) -> Result<Self, DomainError> {
        validate_player_count(player_count)?;
        let mut state = Self {
            leningradka: true,
            mount_divisible_by_n: false,
            adjustment_place: DEFAULT_ADJUSTMENT_PLACE,
            player_count,
            players: SeatMap::new(),
            min_mountain: 0,
            average_mountain: 0.0,
            final_scores_ready: false,
        };
        state.seat_players()?;
        Ok(state)
    }

    /// Discards all player data and seats `player_count` fresh players.
    pub fn reset_number_of_players(&mut self, player_count: usize) -> Result<(), DomainError> {
        validate_player_count(player_count)?;
        if !self.adjustment_place.is_active_in(player_count) {
            self.adjustment_place = DEFAULT_ADJUSTMENT_PLACE;
        }
        self.player_count = player_count;
        self.seat_players()?;
        self.min_mountain = 0;
        self.average_mountain = 0.0;
        self.final_scores_ready = false;
        info!(player_count, "Reset players for a new game");
        Ok(())
    }

    fn seat_players(&mut self) -> Result<(), DomainError> {
        self.players.clear();
        for &place in Place::places(self.player_count)? {
            self.players.insert(place, PlayerRecord::new(place));
        }
        Ok(())
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Active seats in seat order.
    pub fn places(&self) -> impl Iterator<Item = Place> + '_ {
        self.players.iter().map(|(place, _)| place)
    }

    pub fn player(&self, place: Place) -> Result<&PlayerRecord, DomainError> {
        self.players.get(place).ok_or_else(|| inactive(place, self.player_count))
    }

    fn player_mut(&mut self, place: Place) -> Result<&mut PlayerRecord, DomainError> {
        let count = self.player_count;
        self.players.get_mut(place).ok_or_else(|| inactive(place, count))
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.values()
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut PlayerRecord> {
        self.players.values_mut()
    }

    pub(crate) fn player_slot_mut(&mut self, place: Place) -> Option<&mut PlayerRecord> {
        self.players.get_mut(place)
    }

    // ── Options ────────────────────────────────────────────────────────

    pub fn is_leningradka(&self) -> bool {
        self.leningradka
    }

    pub fn pref_type(&self) -> PrefType {
        PrefType::from_leningradka(self.leningradka)
    }

    pub fn set_variant(&mut self, leningradka: bool) {
        self.leningradka = leningradka;
        self.invalidate();
    }

    pub fn set_pref_type(&mut self, pref_type: PrefType) {
        self.set_variant(pref_type.is_leningradka());
    }

    pub fn is_mount_divisible_by_n(&self) -> bool {
        self.mount_divisible_by_n
    }

    pub fn adjustment_place(&self) -> Place {
        self.adjustment_place
    }

    /// Turns the "divisible by N" option on or off and nominates the adjustment seat.
    pub fn set_divisibility_mode(
        &mut self,
        enabled: bool,
        adjustment_place: Place,
    ) -> Result<(), DomainError> {
        if !adjustment_place.is_active_in(self.player_count) {
            return Err(DomainError::config(
                ConfigKind::AdjustmentSeatInactive,
                format!(
                    "Adjustment seat {adjustment_place} is not seated in a {}-player game",
                    self.player_count
                ),
            ));
        }
        self.mount_divisible_by_n = enabled;
        self.adjustment_place = adjustment_place;
        self.invalidate();
        Ok(())
    }

    // ── Raw input ──────────────────────────────────────────────────────

    pub fn set_player_name(&mut self, place: Place, name: impl Into<String>) -> Result<(), DomainError> {
        self.player_mut(place)?.set_name(name);
        Ok(())
    }

    /// Updates display labels; seats not listed keep their names.
    pub fn set_player_names<'a, I>(&mut self, names: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = (Place, &'a str)>,
    {
        for (place, name) in names {
            self.set_player_name(place, name)?;
        }
        Ok(())
    }

    pub fn set_raw_mountain(&mut self, place: Place, mountain: i32) -> Result<(), DomainError> {
        self.player_mut(place)?.set_mountain(Some(mountain))?;
        self.invalidate();
        Ok(())
    }

    pub fn set_raw_pool(&mut self, place: Place, pool: i32) -> Result<(), DomainError> {
        self.player_mut(place)?.set_pool(Some(pool))?;
        self.invalidate();
        Ok(())
    }

    pub fn set_raw_whist(
        &mut self,
        place: Place,
        opponent: Place,
        whists: i32,
    ) -> Result<(), DomainError> {
        self.check_opponent(place, opponent)?;
        self.player_mut(place)?
            .set_whists_against(opponent, Some(whists))?;
        self.invalidate();
        Ok(())
    }

    pub fn set_mountain_from_input(&mut self, place: Place, raw: &str) -> Result<(), DomainError> {
        self.player_mut(place)?.set_mountain_from_input(raw)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_pool_from_input(&mut self, place: Place, raw: &str) -> Result<(), DomainError> {
        self.player_mut(place)?.set_pool_from_input(raw)?;
        self.invalidate();
        Ok(())
    }

    pub fn set_whist_from_input(
        &mut self,
        place: Place,
        opponent: Place,
        raw: &str,
    ) -> Result<(), DomainError> {
        self.check_opponent(place, opponent)?;
        self.player_mut(place)?.set_whist_for_opponent(opponent, raw)?;
        self.invalidate();
        Ok(())
    }

    fn check_opponent(&self, place: Place, opponent: Place) -> Result<(), DomainError> {
        require_active(opponent, self.player_count)?;
        if place == opponent {
            return Err(DomainError::validation_other(format!(
                "{place} cannot hold whists against itself"
            )));
        }
        Ok(())
    }

    /// Any raw edit sends the session back to input mode.
    fn invalidate(&mut self) {
        if self.final_scores_ready {
            for player in self.players.values_mut() {
                player.whist_saldo.clear();
            }
            self.final_scores_ready = false;
        }
    }

    /// Every raw value still missing, in seat order.
    pub fn missing_inputs(&self) -> Vec<MissingInput> {
        let mut missing = Vec::new();
        for (place, player) in self.players.iter() {
            if player.mountain().is_none() {
                missing.push(MissingInput::Mountain(place));
            }
            if player.pool().is_none() {
                missing.push(MissingInput::Pool(place));
            }
            for opponent in place.opponents(self.player_count) {
                if player.whists_against(opponent).is_none() {
                    missing.push(MissingInput::Whist {
                        holder: place,
                        opponent,
                    });
                }
            }
        }
        missing
    }

    // ── Aggregates ─────────────────────────────────────────────────────

    /// Largest entered pool, never below 0.
    pub fn max_pool(&self) -> i32 {
        self.players
            .values()
            .filter_map(PlayerRecord::pool)
            .fold(0, i32::max)
    }

    pub fn mountain_basis(&self) -> MountainBasis {
        MountainBasis {
            pool_multiplier: self.pref_type().pool_multiplier(),
            max_pool: self.max_pool(),
        }
    }

    pub fn standing(&self) -> Standing {
        Standing {
            average_mountain: self.average_mountain,
            min_mountain: self.min_mountain,
        }
    }

    pub fn min_mountain(&self) -> i32 {
        self.min_mountain
    }

    pub fn average_mountain(&self) -> f64 {
        self.average_mountain
    }

    pub fn is_final_scores_ready(&self) -> bool {
        self.final_scores_ready
    }

    // ── Per-seat results ───────────────────────────────────────────────

    pub fn new_mountain(&self, place: Place) -> Result<i32, DomainError> {
        Ok(self.player(place)?.new_mountain(self.mountain_basis()))
    }

    pub fn final_mountain_in_whists(&self, place: Place) -> Result<i32, DomainError> {
        Ok(self
            .player(place)?
            .final_mountain_in_whists(self.mountain_basis(), self.standing()))
    }

    pub fn final_score_in_whists(&self, place: Place) -> Result<i32, DomainError> {
        Ok(self
            .player(place)?
            .final_score_in_whists(self.mountain_basis(), self.standing()))
    }

    /// Snapshot of every derived value; only available after a compute pass.
    pub fn final_scores(&self) -> Result<FinalScores, DomainError> {
        if !self.final_scores_ready {
            return Err(DomainError::validation(
                ValidationKind::ResultsNotReady,
                "Final scores have not been computed",
            ));
        }
        let basis = self.mountain_basis();
        let standing = self.standing();
        let players = self
            .players
            .iter()
            .map(|(place, p)| PlayerResult {
                place,
                name: p.name().to_string(),
                new_mountain: p.new_mountain(basis),
                mount_fix: p.mount_fix(),
                final_mountain: p.final_mountain_in_whists(basis, standing),
                whist_saldo: p.total_whist_saldo().unwrap_or(0),
                saldo_against: place
                    .opponents(self.player_count)
                    .map(|o| (o, p.whist_saldo_against(o).unwrap_or(0)))
                    .collect(),
                final_score: p.final_score_in_whists(basis, standing),
            })
            .collect();
        Ok(FinalScores {
            pref_type: self.pref_type(),
            divisible_by_n: self.mount_divisible_by_n,
            average_mountain: self.average_mountain,
            min_mountain: self.min_mountain,
            players,
        })
    }
}

fn inactive(place: Place, player_count: usize) -> DomainError {
    DomainError::validation(
        ValidationKind::SeatNotActive,
        format!("{place} is not seated in a {player_count}-player game"),
    )
}

/// Computed results for the whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalScores {
    pub pref_type: PrefType,
    pub divisible_by_n: bool,
    pub average_mountain: f64,
    pub min_mountain: i32,
    pub players: Vec<PlayerResult>,
}

/// Computed results for one seat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerResult {
    pub place: Place,
    pub name: String,
    pub new_mountain: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_fix: Option<i32>,
    pub final_mountain: i32,
    pub whist_saldo: i32,
    pub saldo_against: BTreeMap<Place, i32>,
    pub final_score: i32,
}
