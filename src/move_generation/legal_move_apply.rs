//! Move application and take-back.
//!
//! `apply_move` relocates a piece and performs every special-move side effect
//! (castling rook jump, double-push bookkeeping, en passant removal,
//! promotion). It does not check legality; callers that need that go through
//! `make_legal_move`, which rejects before touching the position. Every
//! applied move pushes an `UndoState` frame, and `undo_last_move` pops one.

use crate::board_location::BoardLocation;
use crate::chess_errors::{ChessError, ChessResult};
use crate::chess_move::{Move, SpecialMove};
use crate::game_state::chess_types::*;

impl GameState {
    /// Describes the move `from -> to` as it would be applied to this
    /// position, detecting castling, double pushes, en passant and promotion.
    ///
    /// A pawn reaching its last rank promotes to `promotion`, or a queen.
    pub fn describe_move(
        &self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        let moved_piece = self.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        let d_file = to.file() - from.file();
        let d_rank = to.rank() - from.rank();

        let mut captured_piece = self.piece_at(to);
        let mut special = SpecialMove::Normal;

        match moved_piece.kind {
            PieceKind::King if d_file.abs() == 2 && d_rank == 0 => {
                special = SpecialMove::Castle;
            }
            PieceKind::Pawn if d_file == 0 && d_rank.abs() == 2 => {
                special = SpecialMove::DoublePawnPush;
            }
            PieceKind::Pawn if d_file != 0 && captured_piece.is_none() => {
                if let Some(victim) = self.piece_at_coords(to.file(), from.rank()) {
                    if victim.team != moved_piece.team && self.is_en_passant_eligible(&victim) {
                        special = SpecialMove::EnPassant;
                        captured_piece = Some(victim);
                    }
                }
            }
            _ => {}
        }

        let promotion = if moved_piece.kind == PieceKind::Pawn
            && to.rank() == moved_piece.team.promotion_rank()
        {
            Some(promotion.unwrap_or(PieceKind::Queen))
        } else {
            None
        };

        Ok(Move {
            from,
            to,
            moved_piece,
            captured_piece,
            special,
            promotion,
        })
    }

    /// Relocates whatever stands on `from` to `to` without a legality check.
    ///
    /// Fails only when `from` is empty, in which case nothing changes.
    pub fn apply_move(&mut self, from: BoardLocation, to: BoardLocation) -> ChessResult<Move> {
        let mv = self.describe_move(from, to, None)?;
        self.make_move(&mv)
    }

    /// Applies a fully described move and returns it with its piece
    /// snapshots refreshed from the board.
    pub fn make_move(&mut self, mv: &Move) -> ChessResult<Move> {
        let (from, to) = (mv.from, mv.to);
        let moved_piece = self.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        let team = moved_piece.team;

        let mut frame = UndoState {
            mv: *mv,
            moved_piece,
            captured: None,
            rook_relocation: None,
            prev_king_locations: self.king_locations,
            prev_castling_rights: self.castling_rights,
            prev_double_pushed_pawns: self.double_pushed_pawns,
            prev_side_to_move: self.side_to_move,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_move_number: self.move_number,
        };

        // Captures, including the pawn beside the origin for en passant.
        let capture_square = if mv.special == SpecialMove::EnPassant {
            BoardLocation::new(to.file(), from.rank())
        } else {
            Some(to)
        };
        if let Some(square) = capture_square {
            if let Some(captured) = self.remove_piece(square) {
                frame.captured = Some((square, captured));
            }
        }

        // Relocate the moving piece.
        self.squares[from.index()] = None;
        let mut landed = moved_piece;
        landed.has_moved = true;
        if mv.special == SpecialMove::DoublePawnPush {
            landed.double_push_move = Some(self.move_number);
            self.double_pushed_pawns[team.index()] = Some(to);
        }
        if let Some(kind) = mv.promotion {
            landed.kind = kind;
        }
        self.squares[to.index()] = Some(landed);

        if moved_piece.kind == PieceKind::King {
            self.king_locations[team.index()] = to;
        }

        // Castling rook jump.
        if mv.special == SpecialMove::Castle {
            let side = CastleSide::from_file_delta(to.file() - from.file());
            let rook_from = BoardLocation::new(side.rook_file(), from.rank());
            let rook_to = BoardLocation::new(side.rook_target_file(), from.rank());
            if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
                if self.piece_at(rook_to).is_none() {
                    if let Some(rook) = self.remove_piece(rook_from) {
                        let mut moved_rook = rook;
                        moved_rook.has_moved = true;
                        self.squares[rook_to.index()] = Some(moved_rook);
                        frame.rook_relocation = Some((rook_from, rook_to, rook));
                    }
                }
            }
        }

        self.revoke_castling_rights(moved_piece, from, to);

        // Clocks.
        if moved_piece.kind == PieceKind::Pawn || frame.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if team == Team::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.move_number = self.move_number.saturating_add(1);
        self.side_to_move = team.opposite();

        frame.mv.moved_piece = moved_piece;
        frame.mv.captured_piece = frame.captured.map(|(_, piece)| piece);
        let applied = frame.mv;
        self.undo_stack.push(frame);

        Ok(applied)
    }

    /// Applies `from -> to` only if it is one of the legal moves of the piece
    /// on `from`. An illegal request leaves the position untouched.
    pub fn make_legal_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        let wanted_promotion = promotion.unwrap_or(PieceKind::Queen);
        let legal = self
            .legal_moves(from)
            .into_iter()
            .find(|mv| {
                mv.to == to
                    && mv
                        .promotion
                        .map_or(true, |kind| kind == wanted_promotion)
            })
            .ok_or(ChessError::IllegalMove { from, to })?;

        self.make_move(&legal)
    }

    /// Reverts the most recent applied move and returns it.
    pub fn undo_last_move(&mut self) -> ChessResult<Move> {
        let frame = self.undo_stack.pop().ok_or(ChessError::NothingToUndo)?;
        let mv = frame.mv;

        self.squares[mv.to.index()] = None;
        if let Some((rook_from, rook_to, rook)) = frame.rook_relocation {
            self.squares[rook_to.index()] = None;
            self.squares[rook_from.index()] = Some(rook);
        }
        if let Some((square, captured)) = frame.captured {
            self.squares[square.index()] = Some(captured);
        }
        self.squares[mv.from.index()] = Some(frame.moved_piece);

        self.king_locations = frame.prev_king_locations;
        self.castling_rights = frame.prev_castling_rights;
        self.double_pushed_pawns = frame.prev_double_pushed_pawns;
        self.side_to_move = frame.prev_side_to_move;
        self.halfmove_clock = frame.prev_halfmove_clock;
        self.fullmove_number = frame.prev_fullmove_number;
        self.move_number = frame.prev_move_number;

        Ok(mv)
    }

    fn revoke_castling_rights(&mut self, moved_piece: Piece, from: BoardLocation, to: BoardLocation) {
        if moved_piece.kind == PieceKind::King {
            self.castling_rights &= !(castling_right(moved_piece.team, CastleSide::KingSide)
                | castling_right(moved_piece.team, CastleSide::QueenSide));
        }

        // Anything leaving or landing on a rook's corner ends that right.
        for team in [Team::White, Team::Black] {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                let corner = BoardLocation::new(side.rook_file(), team.home_rank());
                if corner == Some(from) || corner == Some(to) {
                    self.castling_rights &= !castling_right(team, side);
                }
            }
        }
    }
}
