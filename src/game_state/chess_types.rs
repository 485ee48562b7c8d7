//! Core value types shared by the position, move generation and notation code.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side of a piece, and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank direction pawns of this team advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank holding this team's king and rooks at the start of a game.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }

    /// Rank this team's pawns start on and may double-push from.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// Rank on which this team's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }
}

/// Piece type. Behaviour is dispatched with exhaustive matches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    /// Uppercase letter used by FEN and algebraic notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Maps a letter to a kind, ignoring case.
    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece instance on the board, including its movement history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub team: Team,
    pub kind: PieceKind,
    pub has_moved: bool,
    /// Move number on which this pawn last advanced two squares.
    pub double_push_move: Option<u32>,
}

impl Piece {
    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self {
            team,
            kind,
            has_moved: false,
            double_push_move: None,
        }
    }

    /// FEN character: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(&self) -> char {
        match self.team {
            Team::White => self.kind.letter(),
            Team::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    #[inline]
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let team = if ch.is_ascii_uppercase() {
            Team::White
        } else if ch.is_ascii_lowercase() {
            Team::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(team, kind))
    }
}

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// File the rook starts on.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the rook lands on after castling.
    #[inline]
    pub const fn rook_target_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// File the king lands on after castling.
    #[inline]
    pub const fn king_target_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Side implied by the sign of the king's file delta.
    #[inline]
    pub const fn from_file_delta(d_file: i8) -> Self {
        if d_file < 0 {
            CastleSide::QueenSide
        } else {
            CastleSide::KingSide
        }
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

#[inline]
pub const fn castling_right(team: Team, side: CastleSide) -> CastlingRights {
    match (team, side) {
        (Team::White, CastleSide::KingSide) => CASTLE_WHITE_KINGSIDE,
        (Team::White, CastleSide::QueenSide) => CASTLE_WHITE_QUEENSIDE,
        (Team::Black, CastleSide::KingSide) => CASTLE_BLACK_KINGSIDE,
        (Team::Black, CastleSide::QueenSide) => CASTLE_BLACK_QUEENSIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceKind, Team};

    #[test]
    fn fen_chars_map_case_to_team() {
        let white_knight = Piece::from_fen_char('N').expect("N is a piece");
        assert_eq!(white_knight.team, Team::White);
        assert_eq!(white_knight.kind, PieceKind::Knight);
        assert_eq!(white_knight.fen_char(), 'N');

        let black_queen = Piece::from_fen_char('q').expect("q is a piece");
        assert_eq!(black_queen.team, Team::Black);
        assert_eq!(black_queen.fen_char(), 'q');

        assert!(Piece::from_fen_char('x').is_none());
        assert!(Piece::from_fen_char('3').is_none());
    }
}
