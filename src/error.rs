use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Hand must be exactly 2 cards")]
    InvalidHandSize,

    #[error("Need at least {need} cards, got {got}")]
    NotEnoughCards { need: usize, got: usize },

    #[error("Cannot deal {requested} cards, only {available} remaining")]
    InsufficientDeck { requested: usize, available: usize },

    #[error("Invalid street: {0}")]
    InvalidStreet(String),

    #[error("Cannot {operation} while the session is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("Session has already ended")]
    SessionEnded,

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type TrainerResult<T> = Result<T, TrainerError>;
