//! Test-only game state builders for domain unit tests.

use crate::domain::game_state::GameState;
use crate::domain::place::Place;

/// Raw tallies for one seat, in the order players read them off the sheet.
pub struct SeatInput<'a> {
    pub place: Place,
    pub name: &'a str,
    pub pool: i32,
    pub mountain: i32,
    pub whists: &'a [(Place, i32)],
}

/// Builds a fully entered game. Player count is the number of seats given.
pub fn make_game_state(leningradka: bool, seats: &[SeatInput<'_>]) -> GameState {
    let mut state = GameState::new(seats.len()).expect("valid player count");
    state.set_variant(leningradka);
    for seat in seats {
        state.set_player_name(seat.place, seat.name).expect("active seat");
        state.set_raw_pool(seat.place, seat.pool).expect("active seat");
        state
            .set_raw_mountain(seat.place, seat.mountain)
            .expect("active seat");
        for &(opponent, whists) in seat.whists {
            state
                .set_raw_whist(seat.place, opponent, whists)
                .expect("active opponent");
        }
    }
    state
}

/// Four-player Leningradka session with an integer average mountain of 47.
pub fn four_player_game() -> GameState {
    use Place::{East, North, South, West};
    make_game_state(
        true,
        &[
            SeatInput {
                place: East,
                name: "dima",
                pool: 76,
                mountain: 74,
                whists: &[(North, 34), (South, 84), (West, 136)],
            },
            SeatInput {
                place: South,
                name: "kolya",
                pool: 74,
                mountain: 60,
                whists: &[(North, 96), (East, 60), (West, 0)],
            },
            SeatInput {
                place: West,
                name: "fedya",
                pool: 32,
                mountain: 34,
                whists: &[(North, 108), (East, 220), (South, 192)],
            },
            SeatInput {
                place: North,
                name: "grisha",
                pool: 22,
                mountain: 76,
                whists: &[(East, 80), (South, 44), (West, 48)],
            },
        ],
    )
}

/// Four-player session used for the divisible-by-N walk-through.
pub fn four_player_divisible_game() -> GameState {
    use Place::{East, North, South, West};
    make_game_state(
        true,
        &[
            SeatInput {
                place: East,
                name: "Bob",
                pool: 76,
                mountain: 74,
                whists: &[(South, 172), (West, 84), (North, 236)],
            },
            SeatInput {
                place: South,
                name: "Dodge",
                pool: 74,
                mountain: 60,
                whists: &[(West, 60), (North, 88), (East, 234)],
            },
            SeatInput {
                place: West,
                name: "Anya",
                pool: 32,
                mountain: 34,
                whists: &[(North, 192), (East, 108), (South, 220)],
            },
            SeatInput {
                place: North,
                name: "Tim",
                pool: 22,
                mountain: 76,
                whists: &[(East, 180), (South, 132), (West, 48)],
            },
        ],
    )
}

/// Three-player session whose average mountain is not a whole number.
pub fn three_player_fractional_game() -> GameState {
    use Place::{East, South, West};
    make_game_state(
        true,
        &[
            SeatInput {
                place: East,
                name: "Zhenya",
                pool: 14,
                mountain: 38,
                whists: &[(South, 148), (West, 10)],
            },
            SeatInput {
                place: South,
                name: "Petya",
                pool: 26,
                mountain: 41,
                whists: &[(East, 28), (West, 0)],
            },
            SeatInput {
                place: West,
                name: "Vitya",
                pool: 10,
                mountain: 28,
                whists: &[(South, 94), (East, 46)],
            },
        ],
    )
}
