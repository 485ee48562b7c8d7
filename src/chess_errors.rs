//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by position mutation,
//! FEN parsing, notation resolution and PGN handling. Syntax problems in user
//! input are grouped under [`FormatError`] so callers can re-prompt on them
//! without matching every variant.
//!
//! Usage guidelines:
//! - Functions in the engine return `ChessResult<T>` for expected failure
//!   modes (malformed input, illegal moves, ambiguous notation).
//! - Geometry helpers never fail. Out-of-bounds lookups yield `None` or an
//!   empty move list instead of an error.
//! - No variant is fatal. A rejected operation leaves the position untouched.

use thiserror::Error;

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::Team;

/// Convenience alias used across the crate.
pub type ChessResult<T> = Result<T, ChessError>;

/// Malformed textual input: FEN strings, square names and notation tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The FEN string did not contain exactly six whitespace-separated fields.
    ///
    /// Payload: the number of fields that were found.
    #[error("FEN must have 6 fields, found {0}")]
    WrongFieldCount(usize),

    /// The placement field did not describe exactly eight ranks.
    #[error("FEN placement must have 8 ranks, found {0}")]
    WrongRankCount(usize),

    /// A rank of the placement field did not sum to exactly eight files.
    ///
    /// Payload: the rank as printed on the board (`1..=8`) and the number of
    /// files it described.
    #[error("FEN rank {rank} describes {files} files, expected 8")]
    RankWidth { rank: u8, files: u8 },

    /// An unrecognised character appeared in the placement field.
    #[error("invalid FEN piece character '{0}'")]
    InvalidPieceChar(char),

    /// The side-to-move field was neither `w` nor `b`.
    #[error("invalid side to move '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),

    /// The castling field contained something other than `KQkq` or `-`.
    #[error("invalid castling character '{0}'")]
    InvalidCastlingChar(char),

    /// The en-passant field named an impossible target square.
    #[error("invalid en passant target '{0}'")]
    InvalidEnPassant(String),

    /// The halfmove clock or fullmove number was not a non-negative integer.
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),

    /// The placement field has no king for the given team.
    #[error("position has no {0:?} king")]
    MissingKing(Team),

    /// A square name was not a lowercase file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// A notation token did not match the algebraic grammar.
    #[error("invalid algebraic notation '{0}'")]
    InvalidNotation(String),
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// User input could not be parsed. Recoverable by re-prompting.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A notation token parsed, but did not match exactly one legal move.
    ///
    /// Payload: the original token and how many legal moves matched it
    /// (zero when nothing matched, two or more when ambiguous).
    #[error("notation '{token}' matched {candidates} legal moves")]
    Resolution { token: String, candidates: usize },

    /// The proposed move is not in the legal move list of its origin square.
    #[error("illegal move {from}{to}")]
    IllegalMove {
        from: BoardLocation,
        to: BoardLocation,
    },

    /// Attempted to move a piece from a square that is empty.
    #[error("no piece on {0}")]
    EmptySquare(BoardLocation),

    /// The undo stack is empty.
    #[error("no move to undo")]
    NothingToUndo,

    /// PGN text was structurally invalid.
    #[error("invalid PGN: {0}")]
    Pgn(String),

    /// A session setting could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),
}
