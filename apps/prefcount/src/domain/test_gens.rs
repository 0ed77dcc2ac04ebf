// Proptest generators for domain types.
// Generated game states always have every raw input filled in.

use proptest::prelude::*;

use crate::domain::game_state::GameState;
use crate::domain::place::Place;
use crate::domain::rules::PrefType;

/// Generate a supported player count
pub fn player_count() -> impl Strategy<Value = usize> {
    prop_oneof![Just(3usize), Just(4usize)]
}

/// Generate a random PrefType
pub fn pref_type() -> impl Strategy<Value = PrefType> {
    prop_oneof![Just(PrefType::Leningrad), Just(PrefType::Sochi)]
}

/// Generate a seat that is active in a game of `player_count`
pub fn active_place(player_count: usize) -> impl Strategy<Value = Place> {
    let seats: Vec<Place> = Place::ALL.into_iter().take(player_count).collect();
    prop::sample::select(seats)
}

/// Raw sheet tallies for one seat: (pool, mountain, whists against seats in seat order)
fn seat_tallies() -> impl Strategy<Value = (i32, i32, [i32; 4])> {
    (0..100i32, 0..200i32, prop::array::uniform4(0..300i32))
}

/// Generate a fully entered game with random variant and divisibility options
pub fn game_state() -> impl Strategy<Value = GameState> {
    player_count().prop_flat_map(|n| {
        (
            Just(n),
            pref_type(),
            any::<bool>(),
            active_place(n),
            prop::collection::vec(seat_tallies(), n),
        )
            .prop_map(|(n, pref_type, divisible, adjustment, tallies)| {
                let mut state = GameState::new(n).expect("valid player count");
                state.set_pref_type(pref_type);
                state
                    .set_divisibility_mode(divisible, adjustment)
                    .expect("active adjustment seat");
                for (place, (pool, mountain, whists)) in Place::ALL.into_iter().zip(tallies) {
                    state.set_raw_pool(place, pool).expect("active seat");
                    state.set_raw_mountain(place, mountain).expect("active seat");
                    for opponent in place.opponents(n) {
                        state
                            .set_raw_whist(place, opponent, whists[opponent.index()])
                            .expect("active opponent");
                    }
                }
                state
            })
    })
}
