use crate::board_location::BoardLocation;
use crate::chess_move::{Move, SpecialMove};
use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{build_move, push_step};
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    for to in king_attacks(from) {
        push_step(game_state, from, piece, to, out);
    }

    generate_castling_moves(game_state, from, piece, out);
}

/// Castling geometry only: right held, king and rook unmoved on their start
/// squares, nothing in between. Attack conditions are checked by the legal
/// filter.
fn generate_castling_moves(
    game_state: &GameState,
    from: BoardLocation,
    king: Piece,
    out: &mut Vec<Move>,
) {
    let team = king.team;
    if king.has_moved || from.file() != KING_START_FILE || from.rank() != team.home_rank() {
        return;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if game_state.castling_rights() & castling_right(team, side) == 0 {
            continue;
        }

        let rook_file = side.rook_file();
        let rook_ready = matches!(
            game_state.piece_at_coords(rook_file, from.rank()),
            Some(rook) if rook.team == team && rook.kind == PieceKind::Rook && !rook.has_moved
        );
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_file < from.file() {
            (rook_file + 1, from.file())
        } else {
            (from.file() + 1, rook_file)
        };
        if (low..high).any(|file| game_state.piece_at_coords(file, from.rank()).is_some()) {
            continue;
        }

        if let Some(to) = BoardLocation::new(side.king_target_file(), from.rank()) {
            out.push(build_move(from, to, king, None, SpecialMove::Castle, None));
        }
    }
}
