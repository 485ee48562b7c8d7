//! Pawn pseudo-legal moves: pushes, captures, en passant and promotions.

use crate::board_location::BoardLocation;
use crate::chess_move::{Move, SpecialMove};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::build_move;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: BoardLocation,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let team = piece.team;
    let forward = team.forward();

    // Pushes onto empty squares; the double push needs both squares clear.
    if let Some(one_step) = from.offset(0, forward) {
        if game_state.piece_at(one_step).is_none() {
            push_pawn_move(from, one_step, piece, None, SpecialMove::Normal, out);

            if from.rank() == team.pawn_rank() {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(build_move(
                            from,
                            two_step,
                            piece,
                            None,
                            SpecialMove::DoublePawnPush,
                            None,
                        ));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(team, from) {
        match game_state.piece_at(to) {
            Some(target) if target.team != team => {
                push_pawn_move(from, to, piece, Some(target), SpecialMove::Normal, out);
            }
            Some(_) => {}
            None => {
                // En passant: the victim sits beside us on the destination file.
                if let Some(victim) = game_state.piece_at_coords(to.file(), from.rank()) {
                    if victim.team != team && game_state.is_en_passant_eligible(&victim) {
                        out.push(build_move(
                            from,
                            to,
                            piece,
                            Some(victim),
                            SpecialMove::EnPassant,
                            None,
                        ));
                    }
                }
            }
        }
    }
}

fn push_pawn_move(
    from: BoardLocation,
    to: BoardLocation,
    piece: Piece,
    captured: Option<Piece>,
    special: SpecialMove,
    out: &mut Vec<Move>,
) {
    if to.rank() == piece.team.promotion_rank() {
        for kind in PROMOTION_KINDS {
            out.push(build_move(from, to, piece, captured, special, Some(kind)));
        }
    } else {
        out.push(build_move(from, to, piece, captured, special, None));
    }
}
