use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NotationError, PerspectiveError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step. White advances toward row 0 (rank 8).
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("WHITE"),
            Color::Black => f.write_str("BLACK"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Display symbol: uppercase for white, lowercase for black.
    pub fn symbol(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}

/// Grid coordinate. Row 0 is rank 8, row 7 is rank 1; column 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Step by a signed delta, `None` when it leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(*self))
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Parse a two-character algebraic coordinate such as `"e2"`.
pub fn decode(text: &str) -> Result<Position, NotationError> {
    let b = text.as_bytes();
    if b.len() != 2 {
        return Err(NotationError::Length(text.to_string()));
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) {
        return Err(NotationError::File(f as char));
    }
    if !(b'1'..=b'8').contains(&r) {
        return Err(NotationError::Rank(r as char));
    }
    Ok(Position {
        row: b'8' - r,
        col: f - b'a',
    })
}

pub fn encode(pos: Position) -> String {
    debug_assert!(pos.row < 8 && pos.col < 8, "position out of range: {:?}", pos);
    let f = (b'a' + pos.col) as char;
    let r = (b'8' - pos.row) as char;
    format!("{f}{r}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Unfinished,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    pub fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }

    pub fn is_finished(self) -> bool {
        self != GameStatus::Unfinished
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Unfinished => "UNFINISHED",
            GameStatus::WhiteWon => "WHITE_WON",
            GameStatus::BlackWon => "BLACK_WON",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whose eyes a board view is rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    White,
    Black,
    Audience,
}

impl Perspective {
    /// The color hidden behind fog, if any.
    pub fn hidden(self) -> Option<Color> {
        match self {
            Perspective::White => Some(Color::Black),
            Perspective::Black => Some(Color::White),
            Perspective::Audience => None,
        }
    }
}

impl From<Color> for Perspective {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Perspective::White,
            Color::Black => Perspective::Black,
        }
    }
}

impl FromStr for Perspective {
    type Err = PerspectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Perspective::White),
            "black" => Ok(Perspective::Black),
            "audience" => Ok(Perspective::Audience),
            _ => Err(PerspectiveError::Unknown(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
