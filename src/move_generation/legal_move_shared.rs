use crate::board_location::BoardLocation;
use crate::chess_move::{Move, SpecialMove};
use crate::game_state::chess_types::*;

#[inline]
pub fn build_move(
    from: BoardLocation,
    to: BoardLocation,
    moved_piece: Piece,
    captured_piece: Option<Piece>,
    special: SpecialMove,
    promotion: Option<PieceKind>,
) -> Move {
    Move {
        from,
        to,
        moved_piece,
        captured_piece,
        special,
        promotion,
    }
}

/// Pushes `from -> to` unless `to` holds a piece of the mover's own team.
#[inline]
pub fn push_step(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    to: BoardLocation,
    out: &mut Vec<Move>,
) {
    match game_state.piece_at(to) {
        Some(target) if target.team == piece.team => {}
        captured => out.push(build_move(
            from,
            to,
            piece,
            captured,
            SpecialMove::Normal,
            None,
        )),
    }
}

/// Ray destinations for sliders: every square up to the first occupied one,
/// which is included only when it holds an enemy piece.
pub fn push_slides(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    destinations: Vec<BoardLocation>,
    out: &mut Vec<Move>,
) {
    for to in destinations {
        push_step(game_state, from, piece, to, out);
    }
}

#[inline]
pub fn is_occupied(game_state: &GameState) -> impl Fn(BoardLocation) -> bool + '_ {
    move |location| game_state.piece_at(location).is_some()
}
