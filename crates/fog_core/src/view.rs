//! Perspective-filtered board snapshots.
//!
//! A view reveals a player's own pieces and hides every opposing piece behind
//! [`FOG`]. The audience view is the true board.

use std::fmt;

use serde::Serialize;

use crate::{board::BoardState, types::*};

pub const FOG: char = '*';
pub const EMPTY: char = ' ';

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub perspective: Perspective,
    /// `cells[row][col]`, row 0 being rank 8.
    pub cells: [[char; 8]; 8],
}

/// Project `board` as seen from `perspective`.
pub fn render(perspective: Perspective, board: &BoardState) -> BoardView {
    let hidden = perspective.hidden();
    let mut cells = [[EMPTY; 8]; 8];
    for (pos, pc) in board.pieces() {
        cells[pos.row as usize][pos.col as usize] = if Some(pc.color) == hidden {
            FOG
        } else {
            pc.symbol()
        };
    }
    BoardView { perspective, cells }
}

impl BoardView {
    #[inline]
    pub fn cell(&self, pos: Position) -> char {
        self.cells[pos.row as usize][pos.col as usize]
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            f.write_str(&line.join(" "))?;
        }
        Ok(())
    }
}
