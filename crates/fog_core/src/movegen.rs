use crate::{board::BoardState, rules::is_valid_move, types::*};

/// Every move `side` could submit successfully on `board`.
/// Without check rules these are exactly the geometrically valid moves that
/// do not land on a friendly piece.
pub fn legal_moves(board: &BoardState, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, side, &mut out);
    out
}

/// Same as [`legal_moves`], reusing the provided buffer.
pub fn legal_moves_into(board: &BoardState, side: Color, out: &mut Vec<Move>) {
    out.clear();
    for (from, pc) in board.pieces() {
        if pc.color != side {
            continue;
        }
        for to in Position::all() {
            if let Some(target) = board.get(to) {
                if target.color == side {
                    continue;
                }
            }
            if is_valid_move(board, pc, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
