//! Domain layer: pure scoring types and the score engine.

pub mod game_state;
pub mod place;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod seat_map;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_props_scoring;

// Re-exports for ergonomics
pub use game_state::{FinalScores, GameState, MissingInput, PlayerResult, DEFAULT_ADJUSTMENT_PLACE};
pub use place::Place;
pub use player::{MountainBasis, PlayerRecord, Standing};
pub use rules::PrefType;
pub use scoring::{clear_final_results, compute_final_results, DivisibleFix};
pub use seat_map::SeatMap;
