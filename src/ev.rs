use std::fmt;

use crate::error::{TrainerError, TrainerResult};

/// Expected value of betting `bet` into `pot`:
///
///   EV = pot * FE + (1 - FE) * CE * (pot + 2 * bet) - bet
///
/// FE is the chance the opponent folds, CE is hero's equity when called,
/// and `pot + 2 * bet` is the final pot once both bets are in. Inputs are
/// taken as-is: probabilities outside 0..=1 flow through the arithmetic
/// unchanged.
pub fn expected_value(pot: f64, fold_equity: f64, continue_equity: f64, bet: f64) -> f64 {
    pot * fold_equity + (1.0 - fold_equity) * continue_equity * (pot + 2.0 * bet) - bet
}

/// Same formula, but rejects probabilities outside 0..=1.
pub fn expected_value_checked(
    pot: f64,
    fold_equity: f64,
    continue_equity: f64,
    bet: f64,
) -> TrainerResult<f64> {
    for (name, p) in [
        ("fold_equity", fold_equity),
        ("continue_equity", continue_equity),
    ] {
        if !(0.0..=1.0).contains(&p) {
            return Err(TrainerError::InvalidValue(format!(
                "{} must be within 0..=1, got {}",
                name, p
            )));
        }
    }
    Ok(expected_value(pot, fold_equity, continue_equity, bet))
}

/// The formula split into its branches, for display.
pub struct EvBreakdown {
    /// pot * FE
    pub fold_branch: f64,
    /// (1 - FE) * CE * (pot + 2 * bet)
    pub call_branch: f64,
    /// The bet itself.
    pub risk: f64,
    pub total: f64,
}

impl fmt::Display for EvBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EV {:+.2} (folds {:.2} + called {:.2} - risk {:.2})",
            self.total, self.fold_branch, self.call_branch, self.risk
        )
    }
}

pub fn breakdown(pot: f64, fold_equity: f64, continue_equity: f64, bet: f64) -> EvBreakdown {
    let fold_branch = pot * fold_equity;
    let call_branch = (1.0 - fold_equity) * continue_equity * (pot + 2.0 * bet);
    EvBreakdown {
        fold_branch,
        call_branch,
        risk: bet,
        total: fold_branch + call_branch - bet,
    }
}
