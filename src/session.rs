//! Quiz session state machine.
//!
//! A session moves Idle -> AwaitingAnswer -> Scored -> AwaitingAnswer
//! ... -> Ended. Every mutator returns a fresh [`SessionSnapshot`] so a
//! renderer never reaches into the session mid-flight. Reference
//! answers come from the EV formula or the Monte Carlo estimator,
//! depending on the mode, and both draw from the session RNG so a
//! seeded session replays identically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::equity::{self, OpponentModel};
use crate::error::{TrainerError, TrainerResult};
use crate::ev;
use crate::scenario::{self, Scenario, Street};

/// Trials behind each turn-equity reference answer.
const REFERENCE_TRIALS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// EV-estimation drills scored against the exact formula.
    ScoreAttack,
    /// Turn-street equity drills scored against a seeded estimate.
    TurnEquity,
}

impl QuizMode {
    pub fn title(&self) -> &'static str {
        match self {
            QuizMode::ScoreAttack => "Score Attack",
            QuizMode::TurnEquity => "Turn Equity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    AwaitingAnswer,
    Scored,
    Ended,
}

impl Phase {
    fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::AwaitingAnswer => "awaiting an answer",
            Phase::Scored => "scored",
            Phase::Ended => "ended",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum Question {
    /// Compute the EV of the bet, in chips.
    ScoreAttack {
        pot: f64,
        fold_equity: f64,
        continue_equity: f64,
        bet: f64,
    },
    /// Estimate hero's equity on the turn against a random hand.
    TurnEquity { scenario: Scenario },
}

impl Question {
    /// How far an answer may sit from the reference and still count:
    /// 5% of the pot for EV drills, 0.05 equity for turn drills.
    pub fn tolerance(&self) -> f64 {
        match self {
            Question::ScoreAttack { pot, .. } => pot * 0.05,
            Question::TurnEquity { .. } => 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Verdict {
    pub correct: bool,
    pub expected: f64,
    pub answered: f64,
    pub score_delta: u32,
    pub streak_after: u32,
}

/// Render view of the session after an operation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub mode: QuizMode,
    pub phase: Phase,
    /// 1-based index of the current question; 0 before `start`.
    pub question_number: u32,
    pub score: u32,
    pub streak: u32,
    pub question: Option<Question>,
    pub last_verdict: Option<Verdict>,
    pub history: Vec<Verdict>,
}

pub struct QuizSession {
    mode: QuizMode,
    phase: Phase,
    score: u32,
    streak: u32,
    question_number: u32,
    question: Option<Question>,
    history: Vec<Verdict>,
    rng: StdRng,
}

impl QuizSession {
    /// Seeded sessions replay byte-identically, including every Monte
    /// Carlo reference answer.
    pub fn new(mode: QuizMode, seed: Option<u64>) -> QuizSession {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        QuizSession {
            mode,
            phase: Phase::Idle,
            score: 0,
            streak: 0,
            question_number: 0,
            question: None,
            history: Vec::new(),
            rng,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            phase: self.phase,
            question_number: self.question_number,
            score: self.score,
            streak: self.streak,
            question: self.question.clone(),
            last_verdict: self.history.last().copied(),
            history: self.history.clone(),
        }
    }

    pub fn start(&mut self) -> TrainerResult<SessionSnapshot> {
        self.guard("start", Phase::Idle)?;
        self.draw_question()?;
        self.phase = Phase::AwaitingAnswer;
        Ok(self.snapshot())
    }

    pub fn submit_answer(&mut self, value: f64) -> TrainerResult<SessionSnapshot> {
        self.guard("submit an answer", Phase::AwaitingAnswer)?;
        let question = match self.question.clone() {
            Some(q) => q,
            None => {
                return Err(TrainerError::InvalidState {
                    operation: "submit an answer",
                    phase: self.phase.as_str(),
                })
            }
        };

        let expected = self.reference_answer(&question)?;
        let correct = (value - expected).abs() <= question.tolerance();

        let score_delta = if correct { 100 + 20 * self.streak } else { 0 };
        if correct {
            self.streak += 1;
            self.score += score_delta;
        } else {
            self.streak = 0;
        }

        self.history.push(Verdict {
            correct,
            expected,
            answered: value,
            score_delta,
            streak_after: self.streak,
        });
        self.phase = Phase::Scored;
        Ok(self.snapshot())
    }

    pub fn next(&mut self) -> TrainerResult<SessionSnapshot> {
        self.guard("advance", Phase::Scored)?;
        self.draw_question()?;
        self.phase = Phase::AwaitingAnswer;
        Ok(self.snapshot())
    }

    pub fn end(&mut self) -> TrainerResult<SessionSnapshot> {
        if self.phase == Phase::Ended {
            return Err(TrainerError::SessionEnded);
        }
        self.phase = Phase::Ended;
        self.question = None;
        Ok(self.snapshot())
    }

    fn guard(&self, operation: &'static str, expected: Phase) -> TrainerResult<()> {
        if self.phase == Phase::Ended {
            return Err(TrainerError::SessionEnded);
        }
        if self.phase != expected {
            return Err(TrainerError::InvalidState {
                operation,
                phase: self.phase.as_str(),
            });
        }
        Ok(())
    }

    fn draw_question(&mut self) -> TrainerResult<()> {
        let question = match self.mode {
            QuizMode::ScoreAttack => {
                // Chip amounts land on multiples of 5 so prompts read
                // like table stakes rather than generator output.
                let pot = (self.rng.gen_range(4..=40) * 5) as f64;
                let bet = (pot * self.rng.gen_range(0.25..=1.0) / 5.0).round() * 5.0;
                let fold_equity = (self.rng.gen_range(0.05..=0.65) * 100.0f64).round() / 100.0;
                let continue_equity = (self.rng.gen_range(0.15..=0.85) * 100.0f64).round() / 100.0;
                Question::ScoreAttack {
                    pot,
                    fold_equity,
                    continue_equity,
                    bet,
                }
            }
            QuizMode::TurnEquity => Question::TurnEquity {
                scenario: scenario::generate(Street::Turn, &mut self.rng)?,
            },
        };
        self.question_number += 1;
        self.question = Some(question);
        Ok(())
    }

    fn reference_answer(&mut self, question: &Question) -> TrainerResult<f64> {
        match question {
            Question::ScoreAttack {
                pot,
                fold_equity,
                continue_equity,
                bet,
            } => Ok(ev::expected_value(
                *pot,
                *fold_equity,
                *continue_equity,
                *bet,
            )),
            Question::TurnEquity { scenario } => {
                let estimate = equity::estimate(
                    scenario.hole_cards,
                    &scenario.board,
                    OpponentModel::Random,
                    REFERENCE_TRIALS,
                    &mut self.rng,
                )?;
                Ok(estimate.win_probability)
            }
        }
    }
}
