//! JSON game sheet: the on-disk form of one scoring session.
//!
//! ```json
//! {
//!   "pref_type": "leningrad",
//!   "divisible_by_n": true,
//!   "adjustment_player": "EAST",
//!   "players": {
//!     "EAST":  { "name": "dima", "mountain": 74, "pool": 76, "whists": { "SOUTH": 84, "WEST": 136 } },
//!     "SOUTH": { "name": "kolya", "mountain": 60, "pool": 74, "whists": { "EAST": 60, "WEST": 0 } },
//!     "WEST":  { "name": "fedya", "mountain": 34, "pool": 32, "whists": { "EAST": 220, "SOUTH": 192 } }
//!   }
//! }
//! ```
//!
//! Absent or `null` tallies stay unset so the compute pass reports them.
//! Absent options fall back to [`Settings`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::settings::Settings;
use crate::domain::game_state::GameState;
use crate::domain::place::Place;
use crate::domain::rules::PrefType;
use crate::error::AppError;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref_type: Option<PrefType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisible_by_n: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_player: Option<Place>,
    pub players: BTreeMap<Place, SeatSheet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeatSheet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mountain: Option<i32>,
    #[serde(default)]
    pub pool: Option<i32>,
    #[serde(default)]
    pub whists: BTreeMap<Place, Option<i32>>,
}

impl GameSheet {
    pub fn parse(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::invalid_sheet(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json =
            fs::read_to_string(path).map_err(|e| AppError::io(path.display().to_string(), e))?;
        debug!(path = %path.display(), bytes = json.len(), "Loaded game sheet");
        Self::parse(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::output(e.to_string()))
    }

    /// Blank sheet listing every tally a game of `player_count` needs.
    pub fn template(player_count: usize) -> Result<Self, DomainError> {
        let places = Place::places(player_count)?;
        let players = places
            .iter()
            .map(|&place| {
                let seat = SeatSheet {
                    name: String::new(),
                    mountain: None,
                    pool: None,
                    whists: place.opponents(player_count).map(|o| (o, None)).collect(),
                };
                (place, seat)
            })
            .collect();
        Ok(Self {
            pref_type: Some(PrefType::default()),
            divisible_by_n: Some(false),
            adjustment_player: Some(Place::East),
            players,
        })
    }

    /// Builds the engine state. The player count is the number of listed seats,
    /// which must be exactly the seats of a 3- or 4-player table.
    pub fn into_game_state(self, defaults: &Settings) -> Result<GameState, AppError> {
        let player_count = self.players.len();
        let expected = Place::places(player_count)?;
        if !self.players.keys().copied().eq(expected.iter().copied()) {
            let listed: Vec<String> = self.players.keys().map(Place::to_string).collect();
            return Err(AppError::invalid_sheet(format!(
                "A {player_count}-player sheet must list seats {}, got {}",
                join(expected.iter().map(Place::to_string)),
                listed.join(", ")
            )));
        }

        let mut state = GameState::new(player_count)?;
        state.set_pref_type(self.pref_type.unwrap_or(defaults.pref_type));
        state.set_divisibility_mode(
            self.divisible_by_n.unwrap_or(defaults.divisible_by_n),
            self.adjustment_player.unwrap_or(defaults.adjustment_place),
        )?;

        for (place, seat) in self.players {
            state.set_player_name(place, seat.name)?;
            if let Some(mountain) = seat.mountain {
                state.set_raw_mountain(place, mountain)?;
            }
            if let Some(pool) = seat.pool {
                state.set_raw_pool(place, pool)?;
            }
            for (opponent, whists) in seat.whists {
                if let Some(whists) = whists {
                    state.set_raw_whist(place, opponent, whists)?;
                }
            }
        }
        Ok(state)
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
