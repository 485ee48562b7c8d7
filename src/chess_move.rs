use std::fmt;

use crate::board_location::BoardLocation;
use crate::chess_errors::{ChessResult, FormatError};
use crate::game_state::chess_types::{Piece, PieceKind};

/// Move category beyond a plain relocation or capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialMove {
    Normal,
    /// King moves two files; the corner rook jumps over it.
    Castle,
    /// Pawn captures onto the empty square behind an enemy pawn that just double-pushed.
    EnPassant,
    /// Pawn advances two ranks from its start rank.
    DoublePawnPush,
}

/// A fully described move.
///
/// `moved_piece` and `captured_piece` are snapshots taken from the position
/// before the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub special: SpecialMove,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.special == SpecialMove::Castle
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.special == SpecialMove::EnPassant
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.special == SpecialMove::DoublePawnPush
    }

    /// Square the captured piece stands on. For en passant this is beside the
    /// origin, not the destination.
    pub fn captured_location(&self) -> Option<BoardLocation> {
        self.captured_piece?;
        if self.is_en_passant() {
            BoardLocation::new(self.to.file(), self.from.rank())
        } else {
            Some(self.to)
        }
    }

    /// Long algebraic form such as `e2e4` or `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promotion {
            s.push(kind.letter().to_ascii_lowercase());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}

/// Splits a long algebraic token (`e2e4`, `e7e8q`) into its squares and
/// optional promotion kind.
pub fn parse_long_algebraic(
    token: &str,
) -> ChessResult<(BoardLocation, BoardLocation, Option<PieceKind>)> {
    let token = token.trim();
    if !token.is_ascii() || (token.len() != 4 && token.len() != 5) {
        return Err(FormatError::InvalidNotation(token.to_owned()).into());
    }

    let from: BoardLocation = token[0..2].parse()?;
    let to: BoardLocation = token[2..4].parse()?;
    let promotion = match token[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(FormatError::InvalidNotation(token.to_owned()).into()),
        },
    };

    Ok((from, to, promotion))
}
