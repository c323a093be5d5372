//! Match runner for playing games between engines

use fog_core::{Color, Engine, GameEngine, GameStatus, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before it is abandoned as unfinished
    pub max_moves: u32,
    /// Seed for reproducible engines (None = fresh entropy)
    pub seed: Option<u64>,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log every finished game at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            seed: None,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Result of a single game from one engine's point of view
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    /// Move cap reached, or the side to move had nothing to play
    Unfinished,
}

/// How a single game went, from white's side of the board
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameRecord {
    pub status: GameStatus,
    pub plies: u32,
    pub moves: Vec<Move>,
}

impl GameRecord {
    fn result_for(&self, color: Color) -> GameResult {
        match self.status {
            GameStatus::Unfinished => GameResult::Unfinished,
            s if s == GameStatus::won_by(color) => GameResult::Win,
            _ => GameResult::Loss,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub unfinished: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.unfinished
    }

    /// Score in [0, 1]; unfinished games count half.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.unfinished as f64) / total as f64
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let engine1_color = if engine1_white {
                Color::White
            } else {
                Color::Black
            };

            match record.result_for(engine1_color) {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Unfinished => result.unfinished += 1,
            }
            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    engine1 = %engine1_color,
                    status = %record.status,
                    plies = record.plies,
                    "game over - score {}-{}-{}",
                    result.wins,
                    result.losses,
                    result.unfinished
                );
            }
            result.games.push(record);
        }

        result
    }

    /// Play a single game from the starting position
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut game = GameEngine::new();
        white.new_game();
        black.new_game();

        let mut plies = 0;
        let mut moves = Vec::new();
        while plies < self.config.max_moves && !game.status().is_finished() {
            let engine: &mut dyn Engine = match game.turn() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let mv = match engine.choose_move(&game) {
                Some(mv) => mv,
                None => {
                    debug!(side = %game.turn(), "no move available");
                    break;
                }
            };
            if let Err(e) = game.try_move_at(mv.from, mv.to) {
                warn!(engine = engine.name(), %mv, error = %e, "engine proposed a rejected move");
                break;
            }
            moves.push(mv);
            plies += 1;
        }

        GameRecord {
            status: game.status(),
            plies,
            moves,
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
