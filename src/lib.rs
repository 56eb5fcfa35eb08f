//! Hold'em training drills: seat draws for an 8-handed lineup, dealt
//! practice scenarios, bet-EV arithmetic, Monte Carlo equity estimates,
//! and a regret-matching equilibrium demo, all wired into an
//! interactive quiz session.

pub mod cards;
pub mod cli;
pub mod display;
pub mod equilibrium;
pub mod equity;
pub mod error;
pub mod ev;
pub mod hand_eval;
pub mod play;
pub mod position;
pub mod scenario;
pub mod session;

pub use error::{TrainerError, TrainerResult};
