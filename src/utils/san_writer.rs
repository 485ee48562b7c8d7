use crate::chess_move::Move;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Standard algebraic notation for `mv`, which must be legal in `game_state`.
///
/// Disambiguates with the origin file, then rank, then both, and appends `+`
/// or `#` by playing the move and taking it back.
pub fn move_to_algebraic(game_state: &mut GameState, mv: &Move) -> String {
    let mut out = String::with_capacity(8);

    if mv.is_castle() {
        out.push_str(if mv.to.file() < mv.from.file() { "O-O-O" } else { "O-O" });
    } else if mv.moved_piece.kind == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(mv.from.file_char());
            out.push('x');
        }
        out.push_str(&mv.to.to_string());
        if let Some(kind) = mv.promotion {
            out.push('=');
            out.push(kind.letter());
        }
    } else {
        out.push(mv.moved_piece.kind.letter());
        out.push_str(&disambiguation(game_state, mv));
        if mv.is_capture() {
            out.push('x');
        }
        out.push_str(&mv.to.to_string());
    }

    out.push_str(check_suffix(game_state, mv));
    out
}

fn disambiguation(game_state: &mut GameState, mv: &Move) -> String {
    let rivals: Vec<Move> = game_state
        .all_legal_moves()
        .into_iter()
        .filter(|other| {
            other.to == mv.to && other.from != mv.from && other.moved_piece.kind == mv.moved_piece.kind
        })
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|other| other.from.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|other| other.from.rank() == mv.from.rank());

    match (shares_file, shares_rank) {
        (false, _) => mv.from.file_char().to_string(),
        (true, false) => mv.from.rank_char().to_string(),
        (true, true) => mv.from.to_string(),
    }
}

fn check_suffix(game_state: &mut GameState, mv: &Move) -> &'static str {
    if game_state.make_move(mv).is_err() {
        return "";
    }

    let defender = game_state.side_to_move();
    let suffix = if !game_state.is_in_check(defender) {
        ""
    } else if game_state.all_legal_moves().is_empty() {
        "#"
    } else {
        "+"
    };

    // make_move just pushed a frame.
    let _ = game_state.undo_last_move();
    suffix
}

#[cfg(test)]
mod tests {
    use super::move_to_algebraic;
    use crate::board_location::BoardLocation;
    use crate::chess_move::Move;
    use crate::game_state::chess_types::*;
    use crate::utils::san_resolver::resolve_algebraic;

    fn loc(s: &str) -> BoardLocation {
        s.parse().expect("test square should parse")
    }

    fn san(fen: &str, from: &str, to: &str, promotion: Option<PieceKind>) -> String {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let mv: Move = game
            .legal_moves(loc(from))
            .into_iter()
            .find(|mv| mv.to == loc(to) && (promotion.is_none() || mv.promotion == promotion))
            .expect("move should be legal");
        let before = game.clone();
        let text = move_to_algebraic(&mut game, &mv);
        assert_eq!(game, before);
        text
    }

    #[test]
    fn writes_plain_and_capture_moves() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(san(start, "e2", "e4", None), "e4");
        assert_eq!(san(start, "g1", "f3", None), "Nf3");
        assert_eq!(san("5K1k/8/8/8/8/3p4/2P5/8 w - - 0 1", "c2", "d3", None), "cxd3");
    }

    #[test]
    fn disambiguates_file_then_rank() {
        let fen = "rnbqkbnr/pppppppp/8/2N5/4p3/2N1K3/PPPP1PPP/R1BQKB1R w kq - 0 1";
        assert_eq!(san(fen, "c5", "e4", None), "N5xe4");
        assert_eq!(san(fen, "c3", "e4", None), "N3xe4");

        let fen = "rnbqkbnr/pppppppp/8/6N1/4p3/2N1K3/PPPP1PPP/R1BQKB1R w kq - 0 1";
        assert_eq!(san(fen, "g5", "e4", None), "Ngxe4");
    }

    #[test]
    fn writes_castles_promotions_and_checks() {
        assert_eq!(san("5k2/8/8/8/8/8/8/4K2R w K - 0 1", "e1", "g1", None), "O-O+");
        assert_eq!(
            san("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7", "a8", Some(PieceKind::Knight)),
            "a8=N"
        );
        assert_eq!(san("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1", "a1", "a8", None), "Ra8#");
    }

    #[test]
    fn written_notation_resolves_back() {
        let mut game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");

        for mv in game.all_legal_moves() {
            let text = move_to_algebraic(&mut game, &mv);
            let resolved = resolve_algebraic(&mut game, &text).expect("written SAN should resolve");
            assert_eq!(resolved, mv, "{text}");
        }
    }
}
