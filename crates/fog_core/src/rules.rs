//! Per-piece movement geometry.
//!
//! Every rule is a pure function of the moving piece, the two squares and a
//! read-only board. Rules only judge shape and obstruction; whose turn it is
//! and whether the destination holds a friendly piece are decided by
//! [`GameEngine`](crate::game::GameEngine).

use crate::{board::BoardState, types::*};

/// Dispatch to the rule for `piece.kind`.
pub fn is_valid_move(board: &BoardState, piece: Piece, from: Position, to: Position) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece.color, from, to),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Queen => queen_move(board, from, to),
        PieceKind::King => king_move(from, to),
    }
}

fn deltas(from: Position, to: Position) -> (i8, i8) {
    (
        to.row as i8 - from.row as i8,
        to.col as i8 - from.col as i8,
    )
}

/// True when every square strictly between `from` and `to` is empty.
/// Callers guarantee the two squares share a row, a column or a diagonal.
fn path_clear(board: &BoardState, from: Position, to: Position) -> bool {
    let (dr, dc) = deltas(from, to);
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut cur = from;
    loop {
        cur = match cur.offset(step_r, step_c) {
            Some(p) => p,
            None => return true,
        };
        if cur == to {
            return true;
        }
        if !board.is_empty(cur) {
            return false;
        }
    }
}

pub fn pawn_move(board: &BoardState, color: Color, from: Position, to: Position) -> bool {
    let (dr, dc) = deltas(from, to);
    let fwd = color.forward();

    if dc == 0 {
        if dr == fwd {
            return board.is_empty(to);
        }
        if dr == 2 * fwd && from.row == color.pawn_start_row() {
            let mid = match from.offset(fwd, 0) {
                Some(p) => p,
                None => return false,
            };
            return board.is_empty(mid) && board.is_empty(to);
        }
        return false;
    }

    // diagonal step is capture-only
    if dc.abs() == 1 && dr == fwd {
        return matches!(board.get(to), Some(p) if p.color != color);
    }
    false
}

pub fn rook_move(board: &BoardState, from: Position, to: Position) -> bool {
    if from.row != to.row && from.col != to.col {
        return false;
    }
    path_clear(board, from, to)
}

pub fn knight_move(from: Position, to: Position) -> bool {
    let (dr, dc) = deltas(from, to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}

pub fn bishop_move(board: &BoardState, from: Position, to: Position) -> bool {
    let (dr, dc) = deltas(from, to);
    if dr.abs() != dc.abs() {
        return false;
    }
    path_clear(board, from, to)
}

pub fn queen_move(board: &BoardState, from: Position, to: Position) -> bool {
    rook_move(board, from, to) || bishop_move(board, from, to)
}

pub fn king_move(from: Position, to: Position) -> bool {
    let (dr, dc) = deltas(from, to);
    from != to && dr.abs() <= 1 && dc.abs() <= 1
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
