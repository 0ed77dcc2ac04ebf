//! Player seats around the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{validate_player_count, MAX_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// A player's seat. A game uses either {East, South, West} or all four.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Place {
    East,
    South,
    West,
    North,
}

const THREE_PLAYERS: [Place; 3] = [Place::East, Place::South, Place::West];
const FOUR_PLAYERS: [Place; 4] = [Place::East, Place::South, Place::West, Place::North];

impl Place {
    pub const ALL: [Place; MAX_PLAYERS] = FOUR_PLAYERS;

    /// Fixed index of this seat (East=0 .. North=3).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Place::East => 0,
            Place::South => 1,
            Place::West => 2,
            Place::North => 3,
        }
    }

    /// Active seats for a game with `player_count` players.
    pub fn places(player_count: usize) -> Result<&'static [Place], DomainError> {
        validate_player_count(player_count)?;
        if player_count == 3 {
            Ok(&THREE_PLAYERS)
        } else {
            Ok(&FOUR_PLAYERS)
        }
    }

    /// Whether this seat takes part in a game of `player_count` players.
    #[inline]
    pub fn is_active_in(self, player_count: usize) -> bool {
        self.index() < player_count
    }

    /// Every other active seat in a game of `player_count` players.
    pub fn opponents(self, player_count: usize) -> impl Iterator<Item = Place> {
        Self::ALL
            .into_iter()
            .take(player_count.min(MAX_PLAYERS))
            .filter(move |p| *p != self)
    }

    pub const fn letter(self) -> char {
        match self {
            Place::East => 'E',
            Place::South => 'S',
            Place::West => 'W',
            Place::North => 'N',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Place::East => "EAST",
            Place::South => "SOUTH",
            Place::West => "WEST",
            Place::North => "NORTH",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Place {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E" | "EAST" => Ok(Place::East),
            "S" | "SOUTH" => Ok(Place::South),
            "W" | "WEST" => Ok(Place::West),
            "N" | "NORTH" => Ok(Place::North),
            _ => Err(DomainError::validation_other(format!("Unknown seat: {s}"))),
        }
    }
}

/// Returns an error unless `place` is seated in a game of `player_count` players.
pub fn require_active(place: Place, player_count: usize) -> Result<(), DomainError> {
    if place.is_active_in(player_count) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::SeatNotActive,
            format!("{place} is not seated in a {player_count}-player game"),
        ))
    }
}
