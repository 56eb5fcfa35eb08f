use holdem_trainer::cards::{parse_board, parse_hand};
use holdem_trainer::equity::*;
use holdem_trainer::error::TrainerError;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_seeded_runs_are_bit_identical() {
    let hero = parse_hand("AhKh").unwrap();
    let board = parse_board("7c8d9s").unwrap();
    let mut a = StdRng::seed_from_u64(31);
    let mut b = StdRng::seed_from_u64(31);
    let ea = estimate(hero, &board, OpponentModel::Random, 2_000, &mut a).unwrap();
    let eb = estimate(hero, &board, OpponentModel::Random, 2_000, &mut b).unwrap();
    assert_eq!(ea.win_probability, eb.win_probability);
    assert_eq!(ea.trials, 2_000);
    assert!(!ea.partial);
}

fn seeded_spread(trials: u32, seeds: std::ops::Range<u64>) -> f64 {
    let hero = parse_hand("AhKh").unwrap();
    let estimates: Vec<f64> = seeds
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            estimate(hero, &[], OpponentModel::Random, trials, &mut rng)
                .unwrap()
                .win_probability
        })
        .collect();
    let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
    let variance = estimates.iter().map(|p| (p - mean).powi(2)).sum::<f64>()
        / estimates.len() as f64;
    variance.sqrt()
}

#[test]
fn test_more_trials_tighten_the_estimate() {
    let rough = seeded_spread(100, 0..20);
    let tight = seeded_spread(10_000, 100..120);
    assert!(
        tight < rough,
        "spread did not shrink: {:.4} at 100 trials vs {:.4} at 10000",
        rough,
        tight
    );
}

#[test]
fn test_aces_crush_kings_preflop() {
    let hero = parse_hand("AhAs").unwrap();
    let villain = parse_hand("KhKs").unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let est = estimate(hero, &[], OpponentModel::Exact(villain), 10_000, &mut rng).unwrap();
    assert!(
        est.win_probability > 0.75 && est.win_probability < 0.88,
        "AA vs KK came out at {:.3}",
        est.win_probability
    );
    assert_eq!(est.confidence, Confidence::High);
}

#[test]
fn test_locked_river_win_is_certain() {
    // Broadway straight on a dry river vs a pair: no cards left to draw.
    let hero = parse_hand("JdTd").unwrap();
    let villain = parse_hand("9h9c").unwrap();
    let board = parse_board("AsKdQh5c2s").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let est = estimate(hero, &board, OpponentModel::Exact(villain), 500, &mut rng).unwrap();
    assert_eq!(est.win_probability, 1.0);
}

#[test]
fn test_board_playing_for_both_is_half() {
    let hero = parse_hand("2h3d").unwrap();
    let villain = parse_hand("4h5d").unwrap();
    let board = parse_board("AsKdQhJsTs").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let est = estimate(hero, &board, OpponentModel::Exact(villain), 500, &mut rng).unwrap();
    assert_eq!(est.win_probability, 0.5);
}

#[test]
fn test_parallel_path_lands_in_the_ballpark() {
    let hero = parse_hand("AhAs").unwrap();
    let est = estimate_parallel(hero, &[], OpponentModel::Random, 4_000).unwrap();
    assert!(
        est.win_probability > 0.75 && est.win_probability < 0.95,
        "AA vs random came out at {:.3}",
        est.win_probability
    );
    assert_eq!(est.trials, 4_000);
    assert!(!est.partial);
}

#[test]
fn test_zero_trials_is_an_empty_estimate() {
    let hero = parse_hand("AhKh").unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let est = estimate(hero, &[], OpponentModel::Random, 0, &mut rng).unwrap();
    assert_eq!(est.trials, 0);
    assert_eq!(est.win_probability, 0.0);
    assert!(!est.partial);
}

#[test]
fn test_duplicate_between_hero_and_board() {
    let hero = parse_hand("AhKh").unwrap();
    let board = parse_board("Ah7d2c").unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    assert!(matches!(
        estimate(hero, &board, OpponentModel::Random, 100, &mut rng),
        Err(TrainerError::InvalidValue(_))
    ));
}

#[test]
fn test_duplicate_between_hero_and_villain() {
    let hero = parse_hand("AhKh").unwrap();
    let villain = parse_hand("AhQd").unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    assert!(matches!(
        estimate(hero, &[], OpponentModel::Exact(villain), 100, &mut rng),
        Err(TrainerError::InvalidValue(_))
    ));
}

#[test]
fn test_board_longer_than_five_is_rejected() {
    let hero = parse_hand("AhKh").unwrap();
    let board = parse_board("2c3c4c5c6c7c").unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    assert!(matches!(
        estimate(hero, &board, OpponentModel::Random, 100, &mut rng),
        Err(TrainerError::InvalidValue(_))
    ));
}

#[test]
fn test_pre_cancelled_token_returns_an_empty_partial() {
    let hero = parse_hand("AhKh").unwrap();
    let token = CancelToken::new();
    token.cancel();
    let mut rng = StdRng::seed_from_u64(4);
    let est =
        estimate_cancellable(hero, &[], OpponentModel::Random, 5_000, &token, &mut rng).unwrap();
    assert!(est.partial);
    assert_eq!(est.trials, 0);
    assert_eq!(est.win_probability, 0.0);
    assert_eq!(est.confidence, Confidence::Rough);
}

#[test]
fn test_cancel_mid_run_keeps_the_tally_so_far() {
    use std::thread;
    use std::time::Duration;

    let hero = parse_hand("AhKh").unwrap();
    let token = CancelToken::new();
    let remote = token.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(30));
        remote.cancel();
    });

    let mut rng = StdRng::seed_from_u64(4);
    let est = estimate_cancellable(
        hero,
        &[],
        OpponentModel::Random,
        10_000_000,
        &token,
        &mut rng,
    )
    .unwrap();
    canceller.join().unwrap();

    assert!(est.partial);
    assert!(est.trials > 0);
    assert!(est.trials < 10_000_000);
    assert!(est.win_probability > 0.3 && est.win_probability < 1.0);
}

#[test]
fn test_confidence_thresholds() {
    assert_eq!(Confidence::from_trials(0), Confidence::Rough);
    assert_eq!(Confidence::from_trials(999), Confidence::Rough);
    assert_eq!(Confidence::from_trials(1_000), Confidence::Moderate);
    assert_eq!(Confidence::from_trials(9_999), Confidence::Moderate);
    assert_eq!(Confidence::from_trials(10_000), Confidence::High);
}

#[test]
fn test_partial_estimates_say_so() {
    let hero = parse_hand("AhKh").unwrap();
    let token = CancelToken::new();
    token.cancel();
    let mut rng = StdRng::seed_from_u64(4);
    let est =
        estimate_cancellable(hero, &[], OpponentModel::Random, 1_000, &token, &mut rng).unwrap();
    let line = format!("{}", est);
    assert!(line.contains("[partial]"));
    assert!(line.contains("0 trials"));
}
