use crate::board_location::BoardLocation;
use crate::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_occupied, push_slides};
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let destinations = rook_attacks(from, is_occupied(game_state));
    push_slides(game_state, from, piece, destinations, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::board_location::BoardLocation;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_stops_at_first_piece_and_captures_enemy_only() {
        let game =
            GameState::from_fen("4k3/8/8/p7/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        let a1: BoardLocation = "a1".parse().expect("square should parse");
        let piece = game.piece_at(a1).expect("rook on a1");
        let mut out = Vec::new();
        generate_rook_moves(&game, a1, piece, &mut out);

        // a2..a5 up the file (a5 is a capture), b1..d1 along the rank.
        assert_eq!(out.len(), 7);
        assert_eq!(out.iter().filter(|mv| mv.is_capture()).count(), 1);
        assert!(out.iter().all(|mv| mv.to.to_string() != "e1"));
    }
}
