use crate::board_location::BoardLocation;
use crate::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_occupied, push_slides};
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let destinations = bishop_attacks(from, is_occupied(game_state));
    push_slides(game_state, from, piece, destinations, out);
}
