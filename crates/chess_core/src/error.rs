use thiserror::Error;

use crate::piece::{Color, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },
}

/// Why a requested move was refused. None of these change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece at starting square")]
    EmptySource,
    #[error("not your turn: {expected:?} to move, tried to move {found:?}")]
    WrongTurn { expected: Color, found: Color },
    #[error("cannot capture your own piece")]
    OwnPieceCapture,
    #[error("invalid move for a {kind:?}")]
    IllegalPattern { kind: PieceType },
}
