use thiserror::Error;

use crate::game::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("card pool is empty")]
    PoolEmpty,
    #[error("insufficient cards: requested {requested}, available {available}")]
    InsufficientCards { requested: usize, available: usize },
    #[error("selection mixes more than one rank")]
    MixedSelection,
    #[error("action not allowed in phase {phase:?}")]
    WrongPhase { phase: Phase },
    #[error("corrupt state: {0}")]
    CorruptState(String),
    #[error("unknown player id: {0}")]
    PlayerNotFound(u8),
    #[error("no opponent installed for AI seat {0}")]
    NoOpponent(u8),
}
