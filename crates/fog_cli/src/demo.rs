//! Scripted demonstration game ending in a king capture.

use fog_core::GameEngine;
use serde::Serialize;

pub const DEMO_MOVES: [(&str, &str); 12] = [
    ("a2", "a4"),
    ("c7", "c5"),
    ("b1", "a3"),
    ("d8", "a5"),
    ("e2", "e3"),
    ("a5", "d2"),
    ("c2", "c4"),
    ("b8", "c6"),
    ("f1", "d3"),
    ("a7", "a5"),
    ("a1", "b1"),
    ("d2", "e1"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DemoStep {
    pub start: &'static str,
    pub end: &'static str,
    pub accepted: bool,
}

/// Feed [`DEMO_MOVES`] into a fresh game.
pub fn run_demo() -> (GameEngine, Vec<DemoStep>) {
    let mut game = GameEngine::new();
    let steps = DEMO_MOVES
        .iter()
        .map(|&(start, end)| DemoStep {
            start,
            end,
            accepted: game.make_move(start, end),
        })
        .collect();
    (game, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fog_core::{Color, GameStatus, Perspective, Piece, PieceKind};

    #[test]
    fn test_demo_ends_with_black_win() {
        let (game, steps) = run_demo();
        assert!(steps.iter().all(|s| s.accepted));
        assert_eq!(game.status(), GameStatus::BlackWon);
        assert_eq!(
            game.piece_at("e1").unwrap(),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        let audience = game.view(Perspective::Audience).to_string();
        assert_eq!(audience.lines().last(), Some("  R B Q q   N R"));
    }
}
