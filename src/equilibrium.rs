//! Regret-matching self-play over a three-action zero-sum game.
//!
//! Both players draw from the mix implied by their positive regrets
//! (uniform when none are positive), observe the payoff, and update
//! regrets with a floor at zero. Under the rock-paper-scissors matrix
//! the empirical action frequencies converge to the uniform mixed
//! equilibrium, which makes the convergence observable from counts
//! alone.
//!
//! The simulator itself holds only the payoff matrix. Everything that
//! evolves lives in [`EquilibriumState`], passed in and returned by
//! value, so callers can snapshot, fork, or replay runs freely.

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Throw {
    Rock,
    Paper,
    Scissors,
}

pub const ALL_THROWS: [Throw; 3] = [Throw::Rock, Throw::Paper, Throw::Scissors];

impl Throw {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Throw::Rock => "rock",
            Throw::Paper => "paper",
            Throw::Scissors => "scissors",
        }
    }
}

/// Row-player payoff table. The game is zero-sum: the column player
/// receives the negation of every entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayoffMatrix {
    table: [[f64; 3]; 3],
}

impl PayoffMatrix {
    pub fn new(table: [[f64; 3]; 3]) -> PayoffMatrix {
        PayoffMatrix { table }
    }

    /// The canonical instance: win 1, lose 1, ties push.
    pub fn rock_paper_scissors() -> PayoffMatrix {
        PayoffMatrix::new([
            [0.0, -1.0, 1.0],
            [1.0, 0.0, -1.0],
            [-1.0, 1.0, 0.0],
        ])
    }

    pub fn payoff(&self, row: Throw, col: Throw) -> f64 {
        self.table[row.index()][col.index()]
    }
}

/// Everything that evolves during self-play. Plain copyable data so the
/// caller owns the whole history if it wants to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EquilibriumState {
    pub rounds_played: u64,
    /// Row player's throws so far; always sums to `rounds_played`.
    pub action_counts: [u64; 3],
    /// Row player's cumulative payoff.
    pub running_payoff: f64,
    /// Per-player cumulative regrets, floored at zero.
    pub regrets: [[f64; 3]; 2],
}

impl EquilibriumState {
    pub fn new() -> EquilibriumState {
        EquilibriumState::default()
    }

    /// Row player's empirical action frequencies. All zeros before the
    /// first round.
    pub fn empirical_frequencies(&self) -> [f64; 3] {
        if self.rounds_played == 0 {
            return [0.0; 3];
        }
        let total = self.rounds_played as f64;
        self.action_counts.map(|c| c as f64 / total)
    }

    pub fn average_payoff(&self) -> f64 {
        if self.rounds_played == 0 {
            return 0.0;
        }
        self.running_payoff / self.rounds_played as f64
    }
}

/// Regret-matching mix: proportional to positive regrets, uniform when
/// none are positive.
fn strategy_from_regrets(regrets: &[f64; 3]) -> [f64; 3] {
    let positive_sum: f64 = regrets.iter().map(|r| r.max(0.0)).sum();
    if positive_sum > 0.0 {
        regrets.map(|r| r.max(0.0) / positive_sum)
    } else {
        [1.0 / 3.0; 3]
    }
}

fn sample_throw<R: Rng>(strategy: &[f64; 3], rng: &mut R) -> Throw {
    let draw: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (i, p) in strategy.iter().enumerate() {
        cumulative += p;
        if draw < cumulative {
            return ALL_THROWS[i];
        }
    }
    // Float drift can leave the cumulative sum a hair under 1.0.
    ALL_THROWS[2]
}

pub struct EquilibriumSimulator {
    matrix: PayoffMatrix,
}

impl EquilibriumSimulator {
    pub fn new(matrix: PayoffMatrix) -> EquilibriumSimulator {
        EquilibriumSimulator { matrix }
    }

    pub fn rps() -> EquilibriumSimulator {
        EquilibriumSimulator::new(PayoffMatrix::rock_paper_scissors())
    }

    /// Play one round and return the successor state.
    pub fn step<R: Rng>(&self, state: EquilibriumState, rng: &mut R) -> EquilibriumState {
        let row_mix = strategy_from_regrets(&state.regrets[0]);
        let col_mix = strategy_from_regrets(&state.regrets[1]);
        let row_throw = sample_throw(&row_mix, rng);
        let col_throw = sample_throw(&col_mix, rng);
        let payoff = self.matrix.payoff(row_throw, col_throw);

        let mut next = state;
        next.rounds_played += 1;
        next.action_counts[row_throw.index()] += 1;
        next.running_payoff += payoff;

        for (i, alt) in ALL_THROWS.iter().enumerate() {
            let row_regret = self.matrix.payoff(*alt, col_throw) - payoff;
            next.regrets[0][i] = (next.regrets[0][i] + row_regret).max(0.0);

            let col_regret = payoff - self.matrix.payoff(row_throw, *alt);
            next.regrets[1][i] = (next.regrets[1][i] + col_regret).max(0.0);
        }

        next
    }

    /// Iterate [`step`](Self::step), collecting every intermediate state.
    pub fn run<R: Rng>(
        &self,
        start: EquilibriumState,
        rounds: u64,
        rng: &mut R,
    ) -> Vec<EquilibriumState> {
        let mut snapshots = Vec::with_capacity(rounds as usize);
        let mut state = start;
        for _ in 0..rounds {
            state = self.step(state, rng);
            snapshots.push(state);
        }
        snapshots
    }
}
