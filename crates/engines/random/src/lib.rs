//! Random Move Engine
//!
//! Selects moves uniformly at random from every move the side to move can
//! submit. Useful for:
//! - Baseline comparisons (any real player should easily beat this)
//! - Stress testing the rule engine through long self-play runs

use fog_core::{Engine, GameEngine, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A player that picks a random move.
///
/// A seeded engine draws from one RNG stream for its whole lifetime, so a
/// seeded match replays exactly while its games still differ.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, game: &GameEngine) -> Option<Move> {
        let moves = game.legal_moves();
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
