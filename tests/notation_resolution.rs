//! Algebraic notation resolution against hand-built positions.

use sightless_chess::board_location::BoardLocation;
use sightless_chess::chess_errors::ChessError;
use sightless_chess::game_state::chess_types::{Piece, PieceKind, Team};
use sightless_chess::game_state::game_state::GameState;
use sightless_chess::utils::san_resolver::{apply_algebraic, resolve_algebraic};

fn loc(s: &str) -> BoardLocation {
    s.parse().expect("test square should parse")
}

fn resolves(fen: &str, token: &str) -> (BoardLocation, BoardLocation) {
    let mut game = GameState::from_fen(fen).expect("FEN should parse");
    let mv = resolve_algebraic(&mut game, token).expect("token should resolve");
    (mv.from, mv.to)
}

#[test]
fn pawn_pushes_and_captures() {
    assert_eq!(
        resolves("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "e4"),
        (loc("e2"), loc("e4"))
    );

    let fen = "5K1k/8/8/8/8/3p4/2P5/8 w - - 0 1";
    assert_eq!(resolves(fen, "cxd3"), (loc("c2"), loc("d3")));
    assert_eq!(resolves(fen, "c3"), (loc("c2"), loc("c3")));
}

#[test]
fn en_passant_with_suffix() {
    let mut game =
        GameState::from_fen("8/8/8/1Pp5/8/8/8/5k1K w - - 0 1").expect("FEN should parse");
    assert!(game.mark_double_push(loc("c5")));

    let mv = resolve_algebraic(&mut game, "bxc6 e.p").expect("en passant should resolve");
    assert_eq!((mv.from, mv.to), (loc("b5"), loc("c6")));
    assert!(mv.is_en_passant());
    assert_eq!(mv.captured_piece.map(|piece| piece.kind), Some(PieceKind::Pawn));
    assert_eq!(mv.captured_piece.map(|piece| piece.team), Some(Team::Black));
    assert_eq!(mv.captured_location(), Some(loc("c5")));

    apply_algebraic(&mut game, "bxc6 e.p").expect("en passant should apply");
    assert_eq!(game.piece_at(loc("c5")), None);
    assert_eq!(game.piece_at(loc("c6")).map(|piece| piece.kind), Some(PieceKind::Pawn));
}

#[test]
fn knight_disambiguation() {
    let by_rank = "rnbqkbnr/pppppppp/8/2N5/4p3/2N1K3/PPPP1PPP/R1BQKB1R w kq - 0 1";
    assert_eq!(resolves(by_rank, "N5xe4"), (loc("c5"), loc("e4")));
    assert_eq!(resolves(by_rank, "N3xe4"), (loc("c3"), loc("e4")));

    let by_file = "rnbqkbnr/pppppppp/8/6N1/4p3/2N1K3/PPPP1PPP/R1BQKB1R w kq - 0 1";
    assert_eq!(resolves(by_file, "Ngxe4"), (loc("g5"), loc("e4")));
    assert_eq!(resolves(by_file, "Ncxe4"), (loc("c3"), loc("e4")));

    let mut game = GameState::from_fen(by_file).expect("FEN should parse");
    assert!(matches!(
        resolve_algebraic(&mut game, "Nxe4"),
        Err(ChessError::Resolution { candidates: 2, .. })
    ));
}

#[test]
fn castling_both_sides() {
    let mut game = GameState::from_fen("rnbqk2r/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R w KQkq - 0 1")
        .expect("FEN should parse");
    let mv = apply_algebraic(&mut game, "O-O").expect("short castle should apply");
    assert_eq!((mv.from, mv.to), (loc("e1"), loc("g1")));
    assert_eq!(
        game.piece_at(loc("f1")).map(|piece| (piece.kind, piece.team)),
        Some((PieceKind::Rook, Team::White))
    );
    assert_eq!(game.piece_at(loc("h1")), None);

    assert_eq!(
        resolves("r3kbnr/pppppppp/8/8/8/8/PPPPPPPP/R3KBNR w KQk - 0 1", "O-O-O"),
        (loc("e1"), loc("c1"))
    );
}

#[test]
fn bishop_development() {
    assert_eq!(
        resolves(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1",
            "Bb5"
        ),
        (loc("f1"), loc("b5"))
    );
}

#[test]
fn resolution_does_not_change_position() {
    let mut game = GameState::new_game();
    let before = game.clone();
    resolve_algebraic(&mut game, "Nc3").expect("knight move should resolve");
    let _ = resolve_algebraic(&mut game, "Ke2");
    assert_eq!(game, before);
    assert_eq!(
        game.piece_at(loc("b1")),
        Some(Piece::new(Team::White, PieceKind::Knight))
    );
}
