//! Exhaustive sweeps over start/end pairs and board samples.

use rayon::prelude::*;

use fog_core::{
    BoardState, Color, FOG, GameEngine, GameStatus, Perspective, PieceKind, Position, decode,
    encode, render, rules,
};

/// A few boards with pieces of both colors scattered about.
fn sample_boards() -> Vec<BoardState> {
    vec![
        BoardState::startpos(),
        BoardState::from_rows([
            "r...k..r",
            "ppp..ppp",
            "..n.bn..",
            "...pp...",
            "..BPP.q.",
            "..N..N..",
            "PPP..PPP",
            "R..QK..R",
        ]),
        BoardState::from_rows([
            "....k...",
            "...p....",
            "..R.b...",
            ".N......",
            "...Q..n.",
            "......P.",
            ".p...B..",
            "K......r",
        ]),
    ]
}

fn all_pairs() -> Vec<(Position, Position)> {
    Position::all()
        .flat_map(|from| Position::all().map(move |to| (from, to)))
        .collect()
}

// =============================================================================
// Notation
// =============================================================================

#[test]
fn test_codec_round_trip() {
    for pos in Position::all() {
        assert_eq!(decode(&encode(pos)).unwrap(), pos);
    }
    for file in 'a'..='h' {
        for rank in '1'..='8' {
            let s = format!("{file}{rank}");
            assert_eq!(encode(decode(&s).unwrap()), s);
        }
    }
    assert_eq!(decode("a8").unwrap(), Position { row: 0, col: 0 });
    assert_eq!(decode("h1").unwrap(), Position { row: 7, col: 7 });
    assert_eq!(decode("e2").unwrap(), Position { row: 6, col: 4 });
}

#[test]
fn test_codec_rejects_malformed() {
    for bad in ["", "e", "e22", "A1", "i1", "a0", "a9", " e2", "2e", "é2"] {
        assert!(decode(bad).is_err(), "{:?} should be rejected", bad);
    }
}

// =============================================================================
// Rejection leaves everything untouched
// =============================================================================

#[test]
fn test_rejected_moves_change_nothing() {
    let boards = sample_boards();
    let pairs = all_pairs();
    for board in &boards {
        for turn in [Color::White, Color::Black] {
            let base = GameEngine::from_position(board.clone(), turn);
            pairs.par_iter().for_each(|&(from, to)| {
                let mut g = base.clone();
                let accepted = g.try_move_at(from, to).is_ok();
                if accepted {
                    assert_eq!(g.board().get(to), base.board().get(from));
                    assert!(g.board().is_empty(from));
                } else {
                    assert_eq!(g.board(), base.board(), "{}-{} mutated the board", from, to);
                    assert_eq!(g.turn(), base.turn());
                    assert_eq!(g.status(), base.status());
                }
            });
        }
    }
}

#[test]
fn test_turn_alternation() {
    let boards = sample_boards();
    let pairs = all_pairs();
    for board in &boards {
        let base = GameEngine::from_position(board.clone(), Color::White);
        pairs.par_iter().for_each(|&(from, to)| {
            let mut g = base.clone();
            if let Ok(out) = g.try_move_at(from, to) {
                match out.captured {
                    Some(c) if c.kind == PieceKind::King => {
                        assert_eq!(g.status(), GameStatus::WhiteWon);
                        assert_eq!(g.turn(), Color::White);
                        assert!(!g.make_move("a1", "a2"));
                        assert!(g.legal_moves().is_empty());
                    }
                    _ => {
                        assert_eq!(g.status(), GameStatus::Unfinished);
                        assert_eq!(g.turn(), Color::Black);
                    }
                }
            }
        });
    }
}

#[test]
fn test_accepted_set_matches_move_list() {
    let pairs = all_pairs();
    for board in sample_boards() {
        for turn in [Color::White, Color::Black] {
            let base = GameEngine::from_position(board.clone(), turn);
            let listed = base.legal_moves();
            let accepted = pairs
                .par_iter()
                .filter(|&&(from, to)| base.clone().try_move_at(from, to).is_ok())
                .count();
            assert_eq!(accepted, listed.len());
        }
    }
}

// =============================================================================
// Fog
// =============================================================================

#[test]
fn test_fog_hides_only_the_opponent() {
    for board in sample_boards() {
        let white = render(Perspective::White, &board);
        let black = render(Perspective::Black, &board);
        let audience = render(Perspective::Audience, &board);
        for pos in Position::all() {
            let truth = board.get(pos).map(|p| p.symbol()).unwrap_or(fog_core::EMPTY);
            assert_eq!(audience.cell(pos), truth);
            match board.get(pos) {
                Some(p) if p.color == Color::Black => {
                    assert_eq!(white.cell(pos), FOG);
                    assert_eq!(black.cell(pos), truth);
                }
                Some(_) => {
                    assert_eq!(white.cell(pos), truth);
                    assert_eq!(black.cell(pos), FOG);
                }
                None => {
                    assert_eq!(white.cell(pos), truth);
                    assert_eq!(black.cell(pos), truth);
                }
            }
            assert!(!white.cell(pos).is_ascii_lowercase());
            assert!(!black.cell(pos).is_ascii_uppercase());
        }
    }
}

// =============================================================================
// Path blocking
// =============================================================================

#[test]
fn test_sliders_blocked_by_either_color() {
    for blocker in ["n", "N"] {
        let row = format!("R.{blocker}.....");
        let b = BoardState::from_rows([
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            row.as_str(),
        ]);
        let a1 = decode("a1").unwrap();
        for target in ["d1", "e1", "h1"] {
            let to = decode(target).unwrap();
            assert!(!rules::rook_move(&b, a1, to));
            assert!(!rules::queen_move(&b, a1, to));
        }
        assert!(rules::rook_move(&b, a1, decode("b1").unwrap()));
    }
}

#[test]
fn test_bishop_blocked_anywhere_along_diagonal() {
    let a1 = decode("a1").unwrap();
    let h8 = decode("h8").unwrap();
    for step in 1..7u8 {
        let mut b = BoardState::empty();
        let blocker = Position::new(7 - step, step).unwrap();
        b.set(blocker, Some(fog_core::Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!rules::bishop_move(&b, a1, h8), "blocker on {} ignored", blocker);
        assert!(!rules::queen_move(&b, a1, h8));
        assert!(rules::bishop_move(&b, a1, blocker));
    }
}

#[test]
fn test_knight_ignores_blockers() {
    let full = BoardState::from_rows(["pppppppp"; 8]);
    let d4 = decode("d4").unwrap();
    let hops = Position::all().filter(|&to| rules::knight_move(d4, to)).count();
    assert_eq!(hops, 8);
    let piece = fog_core::Piece::new(PieceKind::Knight, Color::White);
    for to in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
        assert!(rules::is_valid_move(&full, piece, d4, decode(to).unwrap()));
    }
}
