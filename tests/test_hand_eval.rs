use std::cmp::Ordering;

use holdem_trainer::cards::*;
use holdem_trainer::error::TrainerError;
use holdem_trainer::hand_eval::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

#[test]
fn test_royal_flush() {
    let hole = [c("As"), c("Ks")];
    let board = parse_board("QsTsJs2h3d").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::RoyalFlush);
    assert_eq!(result.tiebreaks, vec![14]);
}

#[test]
fn test_straight_flush() {
    let hole = [c("9h"), c("8h")];
    let board = parse_board("7h6h5hAcKd").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::StraightFlush);
    assert_eq!(result.tiebreaks, vec![9]);
}

#[test]
fn test_four_of_a_kind() {
    let hole = [c("Ks"), c("Kh")];
    let board = parse_board("KdKc5s2h3d").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::FourOfAKind);
    assert_eq!(result.tiebreaks, vec![13, 5]);
}

#[test]
fn test_full_house() {
    let hole = [c("As"), c("Ah")];
    let board = parse_board("AdKsKh2c3d").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::FullHouse);
    assert_eq!(result.tiebreaks, vec![14, 13]);
}

#[test]
fn test_flush() {
    let hole = [c("As"), c("Ts")];
    let board = parse_board("8s5s2sKdQh").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::Flush);
    assert_eq!(result.tiebreaks, vec![14, 10, 8, 5, 2]);
}

#[test]
fn test_straight() {
    let hole = [c("9s"), c("8h")];
    let board = parse_board("7d6c5sAhKd").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::Straight);
    assert_eq!(result.tiebreaks, vec![9]);
}

#[test]
fn test_wheel() {
    let hole = [c("As"), c("2h")];
    let board = parse_board("3d4c5sKhQd").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::Straight);
    assert_eq!(result.tiebreaks, vec![5]);
}

#[test]
fn test_three_of_a_kind() {
    let hole = [c("Qs"), c("Qh")];
    let board = parse_board("Qd7s3h2cKd").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::ThreeOfAKind);
    assert_eq!(result.tiebreaks, vec![12, 13, 7]);
}

#[test]
fn test_two_pair() {
    let hole = [c("As"), c("Kh")];
    let board = parse_board("AdKs5c2h3d").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::TwoPair);
    assert_eq!(result.tiebreaks, vec![14, 13, 5]);
}

#[test]
fn test_one_pair() {
    let hole = [c("As"), c("Ah")];
    let board = parse_board("Kd7s3c2h5d").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::OnePair);
    assert_eq!(result.tiebreaks, vec![14, 13, 7, 5]);
}

#[test]
fn test_high_card() {
    let hole = [c("As"), c("Kh")];
    let board = parse_board("Qd9s3c2h5d").unwrap();
    let result = best_hand(&hole, &board).unwrap();
    assert_eq!(result.category, HandCategory::HighCard);
    assert_eq!(result.tiebreaks, vec![14, 13, 12, 9, 5]);
}

#[test]
fn test_not_enough_cards() {
    match best_hand(&[c("As"), c("Kh")], &[c("Qd")]) {
        Err(TrainerError::NotEnoughCards { need, got }) => {
            assert_eq!(need, 5);
            assert_eq!(got, 3);
        }
        other => panic!("expected NotEnoughCards, got {:?}", other),
    }
}

#[test]
fn test_exactly_five_cards() {
    let result = best_hand(&[c("As"), c("Kh")], &parse_board("Qd9s3c").unwrap()).unwrap();
    assert_eq!(result.category, HandCategory::HighCard);
}

#[test]
fn test_flush_beats_straight() {
    let board = parse_board("7s6s5s4dAh").unwrap();
    assert_eq!(
        showdown(&[c("As"), c("2s")], &[c("8h"), c("9h")], &board).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_higher_pair_wins() {
    let board = parse_board("2s5d8cTh3d").unwrap();
    assert_eq!(
        showdown(&[c("As"), c("Ah")], &[c("Ks"), c("Kh")], &board).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_kicker_decides() {
    let board = parse_board("As5d8cTh3d").unwrap();
    assert_eq!(
        showdown(&[c("Ad"), c("Kh")], &[c("Ah"), c("Qd")], &board).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_board_plays_for_both() {
    let board = parse_board("AsKdQhJsTs").unwrap();
    assert_eq!(
        showdown(&[c("2h"), c("3d")], &[c("4h"), c("5d")], &board).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_two_pair_kicker() {
    let board = parse_board("AsAd5s5d2c").unwrap();
    assert_eq!(
        showdown(&[c("Kh"), c("3c")], &[c("Qh"), c("3d")], &board).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn test_category_order() {
    let ladder = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_strength_ordering() {
    let high = HandStrength {
        category: HandCategory::HighCard,
        tiebreaks: vec![14, 13, 12, 11, 9],
    };
    let pair = HandStrength {
        category: HandCategory::OnePair,
        tiebreaks: vec![14, 13, 12, 11],
    };
    assert!(pair > high);

    let better_kicker = HandStrength {
        category: HandCategory::OnePair,
        tiebreaks: vec![14, 13, 12, 11],
    };
    let worse_kicker = HandStrength {
        category: HandCategory::OnePair,
        tiebreaks: vec![14, 13, 12, 10],
    };
    assert!(better_kicker > worse_kicker);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", HandCategory::FullHouse), "Full House");
    assert_eq!(format!("{}", HandCategory::HighCard), "High Card");
}
