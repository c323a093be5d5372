use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 mailbox indexed by `[row][col]`, row 0 being rank 8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::startpos()
    }
}

impl BoardState {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.squares[0][col] = Some(Piece::new(kind, Color::Black));
            b.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            b.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            b.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        b
    }

    /// Build a board from eight text rows, rank 8 first, one character per
    /// file. Uppercase letters are white, lowercase black; `.` or a space is
    /// an empty square.
    ///
    /// Panics on a malformed diagram; meant for fixtures and analysis setups.
    pub fn from_rows(rows: [&str; 8]) -> Self {
        let mut b = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            assert!(cells.len() == 8, "Diagram row {} must have 8 cells", row);
            for (col, ch) in cells.into_iter().enumerate() {
                if ch == '.' || ch == ' ' {
                    continue;
                }
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'r' => PieceKind::Rook,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    _ => panic!("Invalid piece char in diagram: {}", ch),
                };
                b.squares[row][col] = Some(Piece::new(kind, color));
            }
        }
        b
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        debug_assert!(pos.row < 8 && pos.col < 8, "position out of range: {:?}", pos);
        self.squares[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    #[inline]
    pub fn set(&mut self, pos: Position, square: Option<Piece>) {
        debug_assert!(pos.row < 8 && pos.col < 8, "position out of range: {:?}", pos);
        self.squares[pos.row as usize][pos.col as usize] = square;
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.pieces()
            .any(|(_, p)| p.kind == PieceKind::King && p.color == color)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|p| (pos, p)))
    }
}
