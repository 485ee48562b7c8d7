use crate::board_location::BoardLocation;
use crate::chess_move::Move;
use crate::game_state::chess_types::*;

/// Single undo record pushed by every applied move.
///
/// Holds everything an applied move overwrites, so popping a frame restores
/// the position exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// Moving piece exactly as it stood on the origin square.
    pub moved_piece: Piece,
    /// Piece removed by the move and the square it stood on.
    pub captured: Option<(BoardLocation, Piece)>,
    /// Castling rook: origin, destination and its state before the move.
    pub rook_relocation: Option<(BoardLocation, BoardLocation, Piece)>,

    pub prev_king_locations: [BoardLocation; 2],
    pub prev_castling_rights: CastlingRights,
    pub prev_double_pushed_pawns: [Option<BoardLocation>; 2],
    pub prev_side_to_move: Team,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
    pub prev_move_number: u32,
}
