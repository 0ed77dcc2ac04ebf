#![allow(dead_code)]

pub mod logging;

use std::io::Write;

use tempfile::NamedTempFile;

/// Three players, Leningradka, recorded from a real session.
pub const THREE_PLAYER_SHEET: &str = r#"{
    "pref_type": "leningrad",
    "divisible_by_n": false,
    "players": {
        "EAST":  { "name": "dariya", "mountain": 22, "pool": 56, "whists": { "SOUTH": 24, "WEST": 32 } },
        "SOUTH": { "name": "kolya",  "mountain": 22, "pool": 22, "whists": { "EAST": 100, "WEST": 32 } },
        "WEST":  { "name": "fedya",  "mountain": 34, "pool": 12, "whists": { "EAST": 72, "SOUTH": 56 } }
    }
}"#;

/// Four players whose mountains leave a remainder of 1 when "divisible by N" is on.
pub const FOUR_PLAYER_SHEET: &str = r#"{
    "pref_type": "leningrad",
    "divisible_by_n": true,
    "adjustment_player": "EAST",
    "players": {
        "EAST":  { "name": "Bob",   "mountain": 74, "pool": 76, "whists": { "SOUTH": 172, "WEST": 84, "NORTH": 236 } },
        "SOUTH": { "name": "Dodge", "mountain": 60, "pool": 74, "whists": { "WEST": 60, "NORTH": 88, "EAST": 234 } },
        "WEST":  { "name": "Anya",  "mountain": 34, "pool": 32, "whists": { "NORTH": 192, "EAST": 108, "SOUTH": 220 } },
        "NORTH": { "name": "Tim",   "mountain": 77, "pool": 22, "whists": { "EAST": 180, "SOUTH": 132, "WEST": 48 } }
    }
}"#;

/// Writes `json` to a temporary `.json` file that lives as long as the handle.
pub fn write_sheet(json: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("prefcount-")
        .suffix(".json")
        .tempfile()
        .expect("create temp sheet");
    file.write_all(json.as_bytes()).expect("write temp sheet");
    file.flush().expect("flush temp sheet");
    file
}
