use crate::board_location::BoardLocation;
use crate::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    for to in knight_attacks(from) {
        push_step(game_state, from, piece, to, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::board_location::BoardLocation;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_skips_own_pieces() {
        let game = GameState::new_game();
        let b1: BoardLocation = "b1".parse().expect("square should parse");
        let piece = game.piece_at(b1).expect("knight on b1");
        let mut out = Vec::new();
        generate_knight_moves(&game, b1, piece, &mut out);
        let targets: Vec<String> = out.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(out.len(), 2);
        assert!(targets.contains(&"a3".to_owned()));
        assert!(targets.contains(&"c3".to_owned()));
    }
}
