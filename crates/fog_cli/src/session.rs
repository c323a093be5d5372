//! Line-oriented hot-seat play over stdin.
//!
//! Each input line is one command:
//! - `e2 e4` or `e2e4` submits a move
//! - `board [white|black|audience]` shows a view (default: side to move)
//! - `status`, `moves`, `help`, `quit`

use fog_core::{GameEngine, Perspective};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String, String),
    Board(Option<Perspective>),
    Status,
    Moves,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err("empty command".to_string()),
        ["board"] => Ok(Command::Board(None)),
        ["board", p] => p
            .parse()
            .map(|p| Command::Board(Some(p)))
            .map_err(|e| format!("{}", e)),
        ["status"] => Ok(Command::Status),
        ["moves"] => Ok(Command::Moves),
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        [s, e] => Ok(Command::Move(s.to_string(), e.to_string())),
        [mv] if mv.len() == 4 && mv.is_ascii() => {
            Ok(Command::Move(mv[0..2].to_string(), mv[2..4].to_string()))
        }
        _ => Err(format!("unrecognized command: {}", line.trim())),
    }
}

/// Outcome of one command, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Session {
    game: GameEngine,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            game: GameEngine::new(),
        }
    }

    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        let cmd = match parse_command(line) {
            Ok(cmd) => cmd,
            Err(e) => return Reply::Text(format!("error: {}", e)),
        };
        match cmd {
            Command::Move(s, e) => match self.game.try_move(&s, &e) {
                Ok(out) if out.status.is_finished() => Reply::Text(format!(
                    "{}\n{}",
                    out.status,
                    self.game.view(Perspective::Audience)
                )),
                Ok(_) => {
                    let next = self.game.turn();
                    Reply::Text(format!(
                        "{} to move\n{}",
                        next,
                        self.game.view(next.into())
                    ))
                }
                Err(err) => Reply::Text(format!("rejected: {}", err)),
            },
            Command::Board(p) => {
                let p = p.unwrap_or_else(|| self.default_perspective());
                Reply::Text(self.game.view(p).to_string())
            }
            Command::Status => Reply::Text(format!(
                "{} ({} to move)",
                self.game.status(),
                self.game.turn()
            )),
            Command::Moves => {
                let moves: Vec<String> = self.game.legal_moves().iter().map(|m| m.to_string()).collect();
                Reply::Text(moves.join(" "))
            }
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn default_perspective(&self) -> Perspective {
        if self.game.status().is_finished() {
            Perspective::Audience
        } else {
            self.game.turn().into()
        }
    }
}

const HELP: &str = "commands: <from> <to> | <from><to> | board [white|black|audience] | status | moves | quit";
