//! Full legal move generation pipeline.
//!
//! Dispatches piece-wise pseudo-legal generation, then keeps only the moves
//! that do not leave the mover's own king attacked. Each candidate is played
//! on the position itself inside a `ScopedMove` guard, which takes the move
//! back when it goes out of scope, so the position is restored on every exit
//! path including unwinding.

use std::ops::Deref;

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessResult;
use crate::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// A move played on a borrowed position for inspection. Dropping the guard
/// undoes it.
struct ScopedMove<'a> {
    game_state: &'a mut GameState,
}

impl<'a> ScopedMove<'a> {
    fn apply(game_state: &'a mut GameState, mv: &Move) -> ChessResult<Self> {
        game_state.make_move(mv)?;
        Ok(Self { game_state })
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        // The frame was pushed by `apply`, so this pop cannot come up empty.
        let _ = self.game_state.undo_last_move();
    }
}

impl GameState {
    /// Geometry-only moves of the piece on `from`; empty for an empty square.
    pub fn pseudo_legal_moves(&self, from: BoardLocation) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(28);
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(self, from, piece, &mut out),
            PieceKind::Knight => generate_knight_moves(self, from, piece, &mut out),
            PieceKind::Bishop => generate_bishop_moves(self, from, piece, &mut out),
            PieceKind::Rook => generate_rook_moves(self, from, piece, &mut out),
            PieceKind::Queen => generate_queen_moves(self, from, piece, &mut out),
            PieceKind::King => generate_king_moves(self, from, piece, &mut out),
        }
        out
    }

    /// Pseudo-legal moves of the piece on `from` that do not leave its own
    /// king attacked. The position is unchanged when this returns.
    pub fn legal_moves(&mut self, from: BoardLocation) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let team = piece.team;

        let pseudo = self.pseudo_legal_moves(from);
        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            if mv.is_castle() && !self.is_castle_path_safe(&mv) {
                continue;
            }

            let Ok(after) = ScopedMove::apply(self, &mv) else {
                continue;
            };
            if !is_king_in_check(&after, team) {
                legal.push(mv);
            }
        }
        legal
    }

    /// Every legal move of the side to move, `a1` pieces first.
    pub fn all_legal_moves(&mut self) -> Vec<Move> {
        let side = self.side_to_move();
        let origins: Vec<BoardLocation> = self.pieces(side).map(|(location, _)| location).collect();

        let mut moves = Vec::with_capacity(48);
        for from in origins {
            moves.extend(self.legal_moves(from));
        }
        moves
    }

    /// True when `mv` (matched on squares and promotion) is legal here.
    pub fn is_move_legal(&mut self, mv: &Move) -> bool {
        self.legal_moves(mv.from)
            .iter()
            .any(|legal| legal.to == mv.to && legal.promotion == mv.promotion)
    }

    #[inline]
    pub fn is_square_attacked(&self, location: BoardLocation, by_team: Team) -> bool {
        is_square_attacked(self, location, by_team)
    }

    #[inline]
    pub fn is_in_check(&self, team: Team) -> bool {
        is_king_in_check(self, team)
    }

    /// Castling may not start in check or cross an attacked square. The
    /// landing square is covered by the ordinary self-check filter.
    fn is_castle_path_safe(&self, mv: &Move) -> bool {
        let enemy = mv.moved_piece.team.opposite();
        if is_square_attacked(self, mv.from, enemy) {
            return false;
        }

        let step = (mv.to.file() - mv.from.file()).signum();
        match mv.from.offset(step, 0) {
            Some(passed) => !is_square_attacked(self, passed, enemy),
            None => false,
        }
    }
}
