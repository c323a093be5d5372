use thiserror::Error;

use crate::types::{Color, GameStatus, Piece, Position};

/// Malformed coordinate text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("coordinate must be two characters, got {0:?}")]
    Length(String),
    #[error("file {0:?} is outside a..h")]
    File(char),
    #[error("rank {0:?} is outside 1..8")]
    Rank(char),
}

/// A rule violation. Nothing on the board changes when one is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("game is already over ({0})")]
    GameFinished(GameStatus),
    #[error("no piece on {0}")]
    EmptySquare(Position),
    #[error("{turn} to move, cannot move {piece}")]
    NotYourPiece { turn: Color, piece: Piece },
    #[error("{piece} cannot move from {from} to {to}")]
    BadGeometry {
        piece: Piece,
        from: Position,
        to: Position,
    },
    #[error("{at} holds a piece of the same color")]
    SelfCapture { at: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid notation: {0}")]
    InvalidNotation(#[from] NotationError),
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerspectiveError {
    #[error("unknown perspective {0:?}, expected white, black or audience")]
    Unknown(String),
}
