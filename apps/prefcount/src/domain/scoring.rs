//! Final score computation for a scoring session.

use tracing::{debug, warn};

use crate::domain::game_state::GameState;
use crate::domain::place::Place;
use crate::domain::rules::{divisible_fix_whists, round2};
use crate::errors::domain::{DomainError, ValidationKind};

/// Single-seat mountain adjustment chosen for a "divisible by N" remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisibleFix {
    /// Sum already divisible, or not fixable with one seat.
    NoFix,
    /// Take 1 from the adjustment seat; every opponent gets whists against it.
    Subtract,
    /// Add 1 to the adjustment seat; it gets whists against every opponent.
    Add,
}

impl DivisibleFix {
    pub fn for_remainder(remainder: i32, player_count: usize) -> Self {
        match (player_count, remainder) {
            (_, 1) => DivisibleFix::Subtract,
            (3, 2) | (4, 3) => DivisibleFix::Add,
            // 4 players with remainder 2 would need a second adjustment seat.
            _ => DivisibleFix::NoFix,
        }
    }

    pub fn mount_fix(self) -> i32 {
        match self {
            DivisibleFix::NoFix => 0,
            DivisibleFix::Subtract => -1,
            DivisibleFix::Add => 1,
        }
    }
}

/// Computes every derived value from the raw inputs.
///
/// Always starts from cleared fixes and saldo, so repeated calls give identical
/// results. Rejects the call, leaving `state` untouched, if any raw input is
/// missing.
pub fn compute_final_results(state: &mut GameState) -> Result<(), DomainError> {
    if let Some(missing) = state.missing_inputs().first() {
        let err = missing.to_error();
        warn!(error = %err, "Rejecting compute pass with incomplete input");
        return Err(err);
    }

    let player_count = state.player_count();
    let n = player_count as i32;
    let basis = state.mountain_basis();

    let mut sum = 0;
    let mut min = i32::MAX;
    for player in state.players_mut() {
        let mountain = player.new_mountain(basis);
        sum += mountain;
        min = min.min(mountain);
        player.clear_derived();
    }
    state.min_mountain = min;

    let mut mount_fix_total = 0;
    if state.is_mount_divisible_by_n() {
        let remainder = (sum - min * n).rem_euclid(n);
        let fix = DivisibleFix::for_remainder(remainder, player_count);
        mount_fix_total = apply_divisible_fix(state, fix)?;
        debug!(
            remainder,
            ?fix,
            adjustment = %state.adjustment_place(),
            "Applied divisible-by-N fix"
        );
    }

    state.average_mountain = round2(f64::from(sum + mount_fix_total) / f64::from(n) - f64::from(min));
    debug!(
        sum,
        min,
        average = state.average_mountain,
        "Computed mountain aggregates"
    );

    resolve_whist_saldo(state)?;
    state.final_scores_ready = true;
    Ok(())
}

/// Drops every saldo and marks the results as stale. Raw inputs are kept.
pub fn clear_final_results(state: &mut GameState) {
    for player in state.players_mut() {
        player.whist_saldo.clear();
    }
    state.final_scores_ready = false;
}

fn apply_divisible_fix(state: &mut GameState, fix: DivisibleFix) -> Result<i32, DomainError> {
    let place = state.adjustment_place();
    let whists = divisible_fix_whists(state.player_count());
    match fix {
        DivisibleFix::NoFix => return Ok(0),
        DivisibleFix::Subtract => add_whists_fix_against_self(state, place, whists),
        DivisibleFix::Add => add_whists_fix_against_others(state, place, whists)?,
    }
    let player = state
        .player_slot_mut(place)
        .ok_or_else(|| seat_not_active(place))?;
    player.mount_fix = Some(fix.mount_fix());
    Ok(fix.mount_fix())
}

/// Every other seat records a fix it holds against `place`.
fn add_whists_fix_against_self(state: &mut GameState, place: Place, value: i32) {
    for player in state.players_mut() {
        if player.place() != place {
            player.whist_fixes.insert(place, value);
        }
    }
}

/// `place` records a fix it holds against every other seat.
fn add_whists_fix_against_others(
    state: &mut GameState,
    place: Place,
    value: i32,
) -> Result<(), DomainError> {
    let count = state.player_count();
    let player = state
        .player_slot_mut(place)
        .ok_or_else(|| seat_not_active(place))?;
    for opponent in place.opponents(count) {
        player.whist_fixes.insert(opponent, value);
    }
    Ok(())
}

/// Resolves each unordered pair once and mirrors it, then stores per-seat totals.
fn resolve_whist_saldo(state: &mut GameState) -> Result<(), DomainError> {
    let places: Vec<Place> = state.places().collect();

    let mut pairs = Vec::with_capacity(places.len() * (places.len() - 1) / 2);
    for (i, &a) in places.iter().enumerate() {
        for &b in &places[i + 1..] {
            let a_to_b = effective_whists(state, a, b)?;
            let b_to_a = effective_whists(state, b, a)?;
            pairs.push((a, b, a_to_b - b_to_a));
        }
    }

    for (a, b, saldo) in pairs {
        if let Some(player) = state.player_slot_mut(a) {
            player.whist_saldo.insert(b, saldo);
        }
        if let Some(player) = state.player_slot_mut(b) {
            player.whist_saldo.insert(a, -saldo);
        }
    }

    let count = state.player_count();
    for player in state.players_mut() {
        let place = player.place();
        let total: i32 = place
            .opponents(count)
            .filter_map(|o| player.whist_saldo.value(o))
            .sum();
        player.whist_saldo.insert(place, total);
    }
    Ok(())
}

fn effective_whists(state: &GameState, holder: Place, opponent: Place) -> Result<i32, DomainError> {
    state
        .player(holder)?
        .effective_whists_against(opponent)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingWhist,
                format!("Whists of {holder} against {opponent} are not entered"),
            )
        })
}

fn seat_not_active(place: Place) -> DomainError {
    DomainError::validation(
        ValidationKind::SeatNotActive,
        format!("Adjustment seat {place} is not seated"),
    )
}
