use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::cards::{Card, Deck};
use crate::error::{TrainerError, TrainerResult};
use crate::position::{self, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

pub const ALL_STREETS: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

impl Street {
    /// Community cards on the board at this street.
    pub fn board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }

    pub fn from_str(s: &str) -> TrainerResult<Street> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" => Ok(Street::Preflop),
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(TrainerError::InvalidStreet(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One dealt training spot: a seat, a hole-card pair, and the board as
/// of the requested street. All cards come from a single shuffled deck,
/// so they are mutually distinct.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub street: Street,
    pub position: Position,
    pub hole_cards: [Card; 2],
    pub board: Vec<Card>,
    pub is_join_decision_point: bool,
}

/// Whether this spot asks hero to join the pot. Only preflop poses that
/// question, and the BB has already posted, so it never faces one.
pub fn join_decision_point(street: Street, position: Position) -> bool {
    street == Street::Preflop && position != Position::BB
}

pub fn generate<R: Rng>(street: Street, rng: &mut R) -> TrainerResult<Scenario> {
    let position = position::assign(rng);
    let mut deck = Deck::full();
    deck.shuffle(rng);
    let hole_cards = deck.deal_two()?;
    let board = deck.deal(street.board_cards())?;

    Ok(Scenario {
        street,
        position,
        hole_cards,
        board,
        is_join_decision_point: join_decision_point(street, position),
    })
}
