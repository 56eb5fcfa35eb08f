use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

use crate::cards::Card;
use crate::error::{TrainerError, TrainerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

/// Ranked strength of a five-card hand. Ordering compares the category
/// first, then the tiebreak values lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandStrength {
    pub category: HandCategory,
    pub tiebreaks: Vec<u8>,
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

fn straight_high_card(sorted_desc: &[u8]) -> Option<u8> {
    let mut unique = sorted_desc.to_vec();
    unique.dedup();
    if unique.len() < 5 {
        return None;
    }
    if unique[0] - unique[4] == 4 {
        return Some(unique[0]);
    }
    // Wheel: A-5-4-3-2 plays as a five-high straight.
    if unique == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn rank_five(cards: [Card; 5]) -> HandStrength {
    let mut values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high_card(&values);

    if flush {
        if let Some(high) = straight_high {
            let category = if high == 14 {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandStrength {
                category,
                tiebreaks: vec![high],
            };
        }
    }

    // Group equal values: largest group first, then highest value. The
    // group values in that order are exactly the tiebreaks for every
    // paired category, and all five values for flushes and high cards.
    let mut groups: Vec<(usize, u8)> = values.iter().copied().dedup_with_count().collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let tiebreaks: Vec<u8> = groups.iter().map(|&(_, v)| v).collect();

    let shape: Vec<usize> = groups.iter().map(|&(count, _)| count).collect();
    let category = match shape.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if flush => HandCategory::Flush,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => {
            if let Some(high) = straight_high {
                return HandStrength {
                    category: HandCategory::Straight,
                    tiebreaks: vec![high],
                };
            }
            HandCategory::HighCard
        }
    };

    HandStrength {
        category,
        tiebreaks,
    }
}

/// Best five-card hand from hole cards plus board.
pub fn best_hand(hole_cards: &[Card], board: &[Card]) -> TrainerResult<HandStrength> {
    let all: Vec<Card> = hole_cards.iter().chain(board.iter()).copied().collect();
    let got = all.len();
    all.iter()
        .combinations(5)
        .map(|combo| rank_five([*combo[0], *combo[1], *combo[2], *combo[3], *combo[4]]))
        .max()
        .ok_or(TrainerError::NotEnoughCards { need: 5, got })
}

pub fn showdown(hero: &[Card], villain: &[Card], board: &[Card]) -> TrainerResult<Ordering> {
    Ok(best_hand(hero, board)?.cmp(&best_hand(villain, board)?))
}
