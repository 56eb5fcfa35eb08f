//! Monte Carlo showdown equity.
//!
//! Each trial completes the board to five cards from the undealt deck,
//! draws the villain hand per the opponent model, and settles the
//! showdown with full five-card ranking. Seeded sequential runs are
//! reproducible; the parallel path trades that for throughput.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::cards::{Card, Deck};
use crate::error::{TrainerError, TrainerResult};
use crate::hand_eval::best_hand;

const CANCEL_POLL_INTERVAL: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentModel {
    /// Villain holds any two undealt cards, drawn fresh each trial.
    Random,
    /// Villain's exact hand is known and removed from the deck.
    Exact([Card; 2]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Rough,
    Moderate,
    High,
}

impl Confidence {
    pub fn from_trials(trials: u32) -> Confidence {
        if trials >= 10_000 {
            Confidence::High
        } else if trials >= 1_000 {
            Confidence::Moderate
        } else {
            Confidence::Rough
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            Confidence::Rough => "rough read, expect several points of noise",
            Confidence::Moderate => "decent read, usually within a couple of points",
            Confidence::High => "solid read, usually within a point",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EquityEstimate {
    /// (wins + ties / 2) / trials.
    pub win_probability: f64,
    /// Trials actually completed.
    pub trials: u32,
    pub confidence: Confidence,
    /// True when cancellation cut the run short of the requested trials.
    pub partial: bool,
}

impl EquityEstimate {
    fn from_tally(wins: u64, ties: u64, completed: u32, partial: bool) -> EquityEstimate {
        let win_probability = if completed == 0 {
            0.0
        } else {
            (wins as f64 + ties as f64 / 2.0) / completed as f64
        };
        EquityEstimate {
            win_probability,
            trials: completed,
            confidence: Confidence::from_trials(completed),
            partial,
        }
    }
}

impl fmt::Display for EquityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% over {} trials ({})",
            self.win_probability * 100.0,
            self.trials,
            self.confidence.note()
        )?;
        if self.partial {
            write!(f, " [partial]")?;
        }
        Ok(())
    }
}

/// Cooperative cancellation for long estimates. Clones share one flag;
/// the estimator polls it between batches of trials.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, AtomicOrdering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(AtomicOrdering::SeqCst)
    }
}

fn draws_per_trial(board: &[Card], model: &OpponentModel) -> usize {
    let runout = 5usize.saturating_sub(board.len());
    match model {
        OpponentModel::Random => runout + 2,
        OpponentModel::Exact(_) => runout,
    }
}

fn undealt_pool(
    hero: &[Card; 2],
    board: &[Card],
    model: &OpponentModel,
) -> TrainerResult<Vec<Card>> {
    if board.len() > 5 {
        return Err(TrainerError::InvalidValue(format!(
            "board cannot exceed 5 cards, got {}",
            board.len()
        )));
    }

    let mut dead: Vec<Card> = Vec::with_capacity(9);
    dead.extend_from_slice(hero);
    dead.extend_from_slice(board);
    if let OpponentModel::Exact(hand) = model {
        dead.extend_from_slice(hand);
    }

    let mut seen = HashSet::new();
    for &card in &dead {
        if !seen.insert(card) {
            return Err(TrainerError::InvalidValue(format!(
                "duplicate card: {}",
                card
            )));
        }
    }

    let pool = Deck::excluding(&dead).cards;
    let draws = draws_per_trial(board, model);
    if draws > pool.len() {
        return Err(TrainerError::InsufficientDeck {
            requested: draws,
            available: pool.len(),
        });
    }
    Ok(pool)
}

fn trial_outcome<R: Rng>(
    hero: &[Card; 2],
    board: &[Card],
    model: &OpponentModel,
    pool: &mut [Card],
    rng: &mut R,
) -> TrainerResult<(u64, u64, u64)> {
    let draws = draws_per_trial(board, model);
    let (drawn, _) = pool.partial_shuffle(rng, draws);

    let (villain, runout) = match model {
        OpponentModel::Random => ([drawn[0], drawn[1]], &drawn[2..]),
        OpponentModel::Exact(hand) => (*hand, &drawn[..]),
    };

    let mut full_board = board.to_vec();
    full_board.extend_from_slice(runout);

    let hero_strength = best_hand(hero, &full_board)?;
    let villain_strength = best_hand(&villain, &full_board)?;
    Ok(match hero_strength.cmp(&villain_strength) {
        Ordering::Greater => (1, 0, 0),
        Ordering::Equal => (0, 1, 0),
        Ordering::Less => (0, 0, 1),
    })
}

/// Sequential estimate. With a seeded RNG the result is reproducible
/// bit-for-bit.
pub fn estimate<R: Rng>(
    hero: [Card; 2],
    board: &[Card],
    model: OpponentModel,
    trials: u32,
    rng: &mut R,
) -> TrainerResult<EquityEstimate> {
    estimate_cancellable(hero, board, model, trials, &CancelToken::new(), rng)
}

/// Sequential estimate that polls `token` between batches. On
/// cancellation the tally so far comes back with `partial` set and
/// `trials` holding the completed count.
pub fn estimate_cancellable<R: Rng>(
    hero: [Card; 2],
    board: &[Card],
    model: OpponentModel,
    trials: u32,
    token: &CancelToken,
    rng: &mut R,
) -> TrainerResult<EquityEstimate> {
    let mut pool = undealt_pool(&hero, board, &model)?;

    let mut wins = 0u64;
    let mut ties = 0u64;
    let mut completed = 0u32;

    while completed < trials {
        if token.is_cancelled() {
            return Ok(EquityEstimate::from_tally(wins, ties, completed, true));
        }
        let batch = CANCEL_POLL_INTERVAL.min(trials - completed);
        for _ in 0..batch {
            let (w, t, _) = trial_outcome(&hero, board, &model, &mut pool, rng)?;
            wins += w;
            ties += t;
        }
        completed += batch;
    }

    Ok(EquityEstimate::from_tally(wins, ties, completed, false))
}

/// Production path: rayon-parallel trials, fresh entropy per task.
pub fn estimate_parallel(
    hero: [Card; 2],
    board: &[Card],
    model: OpponentModel,
    trials: u32,
) -> TrainerResult<EquityEstimate> {
    let pool = undealt_pool(&hero, board, &model)?;

    let (wins, ties, _) = (0..trials)
        .into_par_iter()
        .map(|_| {
            let mut rng = rand::thread_rng();
            let mut local = pool.clone();
            trial_outcome(&hero, board, &model, &mut local, &mut rng)
        })
        .try_reduce(
            || (0u64, 0u64, 0u64),
            |a, b| Ok((a.0 + b.0, a.1 + b.1, a.2 + b.2)),
        )?;

    Ok(EquityEstimate::from_tally(wins, ties, trials, false))
}
