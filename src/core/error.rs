use thiserror::Error;
use crate::core::models::{Direction, Vec2};

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("invalid symbol {symbol:?} at {pos}")]
    InvalidSymbol { symbol: char, pos: Vec2 },
    #[error("symbol {symbol:?} does not agree with the target flag of the cell at {pos}")]
    TargetMismatch { symbol: char, pos: Vec2 },
    #[error("number of boxes ({boxes}) and targets ({targets}) must be equal")]
    BoxTargetMismatch { boxes: usize, targets: usize },
    #[error("must be exactly one actor, found {0}")]
    ActorCount(usize),
    #[error("cannot move {0:?}")]
    IllegalMove(Direction),
    #[error("no moves to choose from")]
    NoChoices,
    #[error("failed to read level: {0}")]
    Io(#[from] std::io::Error),
}
