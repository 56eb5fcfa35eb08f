use std::fmt;

use rand::Rng;
use serde::Serialize;

/// Seats in the 8-handed format, in order of preflop action. There is no
/// small blind: the button posts nothing and the big blind is the only
/// forced bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    UTG,
    B7,
    B6,
    B5,
    B4,
    B3,
    BTN,
    BB,
}

pub const ALL_POSITIONS: [Position; 8] = [
    Position::UTG,
    Position::B7,
    Position::B6,
    Position::B5,
    Position::B4,
    Position::B3,
    Position::BTN,
    Position::BB,
];

impl Position {
    pub fn seat_index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::B7 => "B7",
            Position::B6 => "B6",
            Position::B5 => "B5",
            Position::B4 => "B4",
            Position::B3 => "B3",
            Position::BTN => "BTN",
            Position::BB => "BB",
        }
    }

    pub fn from_str(s: &str) -> Option<Position> {
        match s.to_uppercase().as_str() {
            "UTG" => Some(Position::UTG),
            "B7" => Some(Position::B7),
            "B6" => Some(Position::B6),
            "B5" => Some(Position::B5),
            "B4" => Some(Position::B4),
            "B3" => Some(Position::B3),
            "BTN" => Some(Position::BTN),
            "BB" => Some(Position::BB),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Uniform draw over all eight seats.
pub fn assign<R: Rng>(rng: &mut R) -> Position {
    ALL_POSITIONS[rng.gen_range(0..ALL_POSITIONS.len())]
}
