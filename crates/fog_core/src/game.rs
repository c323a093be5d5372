//! Game orchestration: turn order, capture legality and king-capture
//! termination on top of the per-piece rules.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::{
    board::BoardState,
    error::{IllegalMove, MoveError, NotationError, PerspectiveError},
    movegen,
    rules::is_valid_move,
    types::*,
    view::{self, BoardView},
};

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}

/// One game in progress. Owns the only board; players see it through
/// [`BoardView`] projections.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: BoardState,
    turn: Color,
    status: GameStatus,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_position(BoardState::startpos(), Color::White)
    }

    /// Start from an arbitrary board, for fixtures and analysis.
    pub fn from_position(board: BoardState, turn: Color) -> Self {
        Self {
            board,
            turn,
            status: GameStatus::Unfinished,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Read-only access; the board only changes through accepted moves.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Audience-level lookup of a single square.
    pub fn piece_at(&self, square: &str) -> Result<Option<Piece>, NotationError> {
        Ok(self.board.get(decode(square)?))
    }

    pub fn view(&self, perspective: Perspective) -> BoardView {
        view::render(perspective, &self.board)
    }

    /// [`view`](Self::view) keyed by `"white"`, `"black"` or `"audience"`.
    pub fn get_board(&self, perspective: &str) -> Result<BoardView, PerspectiveError> {
        Ok(self.view(perspective.parse()?))
    }

    /// Moves the side to move could make right now.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_finished() {
            return Vec::new();
        }
        movegen::legal_moves(&self.board, self.turn)
    }

    /// Attempt a move given in algebraic coordinates. `false` means nothing
    /// changed.
    pub fn make_move(&mut self, start: &str, end: &str) -> bool {
        match self.try_move(start, end) {
            Ok(_) => true,
            Err(e) => {
                debug!(start, end, error = %e, "move rejected");
                false
            }
        }
    }

    pub fn try_move(&mut self, start: &str, end: &str) -> Result<MoveOutcome, MoveError> {
        if self.status.is_finished() {
            return Err(IllegalMove::GameFinished(self.status).into());
        }
        let from = decode(start)?;
        let to = decode(end)?;
        self.try_move_at(from, to)
    }

    pub fn try_move_at(&mut self, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
        if self.status.is_finished() {
            return Err(IllegalMove::GameFinished(self.status).into());
        }
        let piece = self
            .board
            .get(from)
            .ok_or(IllegalMove::EmptySquare(from))?;
        if piece.color != self.turn {
            return Err(IllegalMove::NotYourPiece {
                turn: self.turn,
                piece,
            }
            .into());
        }
        if !is_valid_move(&self.board, piece, from, to) {
            return Err(IllegalMove::BadGeometry { piece, from, to }.into());
        }
        let captured = self.board.get(to);
        if matches!(captured, Some(c) if c.color == piece.color) {
            return Err(IllegalMove::SelfCapture { at: to }.into());
        }

        self.board.set(to, Some(piece));
        self.board.set(from, None);

        let mv = Move::new(from, to);
        match captured {
            Some(c) if c.kind == PieceKind::King => {
                self.status = GameStatus::won_by(c.color.other());
                info!(%mv, status = %self.status, "king captured");
            }
            _ => {
                self.turn = self.turn.other();
                trace!(%mv, next = %self.turn, "move applied");
            }
        }

        Ok(MoveOutcome {
            mv,
            piece,
            captured,
            status: self.status,
        })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
