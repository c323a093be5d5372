pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod rules;
pub mod types;
pub mod view;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::{legal_moves, legal_moves_into};
pub use types::*;
pub use view::{BoardView, EMPTY, FOG, render};

// =============================================================================
// Engine trait — implemented by every automated player
// =============================================================================

/// Trait for automated players.
///
/// An engine is handed the game read-only and proposes a move for the side to
/// move; the caller submits it through [`GameEngine::try_move_at`].
pub trait Engine: Send {
    /// Pick a move for `game.turn()`, or `None` when there is nothing to play
    /// (game finished, or no piece can move).
    fn choose_move(&mut self, game: &GameEngine) -> Option<Move>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
