//! Core mailbox board state representation.
//!
//! `GameState` is the central model for the engine. It stores the 64 squares,
//! the tracked king squares, turn/state flags, clocks, and the undo stack
//! used by the make/unmake workflow in `move_generation::legal_move_apply`.

use crate::board_location::{is_in_bounds, BoardLocation};
use crate::chess_errors::ChessResult;
use crate::chess_move::Move;
use crate::game_state::chess_rules::{KING_START_FILE, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const WHITE_KING_START: BoardLocation = match BoardLocation::new(KING_START_FILE, 0) {
    Some(location) => location,
    None => panic!("king start square is on the board"),
};
const BLACK_KING_START: BoardLocation = match BoardLocation::new(KING_START_FILE, 7) {
    Some(location) => location,
    None => panic!("king start square is on the board"),
};

/// A chess position plus the history needed to take moves back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Mailbox, indexed by `BoardLocation::index` ---
    pub(crate) squares: [Option<Piece>; 64],

    // [team] -> square currently holding that team's king.
    pub(crate) king_locations: [BoardLocation; 2],

    // --- Side and state flags ---
    pub(crate) side_to_move: Team,
    pub(crate) castling_rights: CastlingRights,
    // [team] -> last pawn of that team to advance two squares.
    pub(crate) double_pushed_pawns: [Option<BoardLocation>; 2],

    // --- Clocks / move counters ---
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    // 1-based index of the ply about to be played.
    pub(crate) move_number: u32,

    // --- Make/unmake stack ---
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            king_locations: [WHITE_KING_START, BLACK_KING_START],

            side_to_move: Team::White,
            castling_rights: 0,
            double_pushed_pawns: [None; 2],

            halfmove_clock: 0,
            fullmove_number: 1,
            move_number: 1,

            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// An empty board. Kings must be placed before the position is usable.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for team in [Team::White, Team::Black] {
            for (file, kind) in (0i8..).zip(back_rank) {
                if let Some(location) = BoardLocation::new(file, team.home_rank()) {
                    game_state.place_piece(location, Piece::new(team, kind));
                }
                if let Some(location) = BoardLocation::new(file, team.pawn_rank()) {
                    game_state.place_piece(location, Piece::new(team, PieceKind::Pawn));
                }
            }
        }

        game_state.castling_rights = CASTLE_WHITE_KINGSIDE
            | CASTLE_WHITE_QUEENSIDE
            | CASTLE_BLACK_KINGSIDE
            | CASTLE_BLACK_QUEENSIDE;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Returns true when this position was set up from the standard start.
    pub fn is_standard_start(&self) -> bool {
        self.get_fen() == STARTING_POSITION_FEN
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.index()]
    }

    /// Same as [`GameState::piece_at`] for raw coordinates; off-board
    /// coordinates are simply empty.
    #[inline]
    pub fn piece_at_coords(&self, file: i8, rank: i8) -> Option<Piece> {
        BoardLocation::new(file, rank).and_then(|location| self.piece_at(location))
    }

    #[inline]
    pub fn is_in_bounds(&self, file: i8, rank: i8) -> bool {
        is_in_bounds(file, rank)
    }

    #[inline]
    pub fn king_location(&self, team: Team) -> BoardLocation {
        self.king_locations[team.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Team {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Number of moves that can currently be taken back.
    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Most recently applied move, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.undo_stack.last().map(|frame| &frame.mv)
    }

    /// All pieces of `team` with their squares, `a1` first.
    pub fn pieces(&self, team: Team) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        BoardLocation::all().filter_map(move |location| match self.piece_at(location) {
            Some(piece) if piece.team == team => Some((location, piece)),
            _ => None,
        })
    }

    /// Puts `piece` on `location`, replacing whatever stood there. Placing a
    /// king moves that team's tracked king square.
    pub fn place_piece(&mut self, location: BoardLocation, piece: Piece) {
        if piece.kind == PieceKind::King {
            self.king_locations[piece.team.index()] = location;
        }
        self.squares[location.index()] = Some(piece);
    }

    /// Clears a square and returns what stood on it.
    pub fn remove_piece(&mut self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.index()].take()
    }

    /// Clears a square given as raw coordinates; no-op off the board.
    pub fn remove_piece_at_coords(&mut self, file: i8, rank: i8) -> Option<Piece> {
        BoardLocation::new(file, rank).and_then(|location| self.remove_piece(location))
    }

    /// Tags the pawn on `location` as having advanced two squares on the
    /// previous ply, making it capturable en passant right now.
    ///
    /// Returns false if there is no pawn on `location`.
    pub fn mark_double_push(&mut self, location: BoardLocation) -> bool {
        let previous_move = self.move_number.saturating_sub(1);
        match self.squares[location.index()].as_mut() {
            Some(piece) if piece.kind == PieceKind::Pawn => {
                piece.double_push_move = Some(previous_move);
                piece.has_moved = true;
                self.double_pushed_pawns[piece.team.index()] = Some(location);
                true
            }
            _ => false,
        }
    }

    /// True when `piece` may be captured en passant on the current ply.
    #[inline]
    pub fn is_en_passant_eligible(&self, piece: &Piece) -> bool {
        piece.kind == PieceKind::Pawn
            && self.move_number > 0
            && piece.double_push_move == Some(self.move_number - 1)
    }

    /// Square of the `team` pawn that can be captured en passant right now.
    pub fn en_passant_victim(&self, team: Team) -> Option<BoardLocation> {
        let location = self.double_pushed_pawns[team.index()]?;
        match self.piece_at(location) {
            Some(piece) if piece.team == team && self.is_en_passant_eligible(&piece) => {
                Some(location)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::board_location::BoardLocation;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{PieceKind, Team};

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(game.squares, parsed.squares);
        assert_eq!(game.king_locations, parsed.king_locations);
        assert!(game.is_standard_start());
    }

    #[test]
    fn off_board_queries_are_empty() {
        let game = GameState::new_game();
        assert!(game.piece_at_coords(-1, 0).is_none());
        assert!(game.piece_at_coords(0, 8).is_none());
        assert_eq!(
            game.piece_at_coords(4, 0).map(|p| (p.team, p.kind)),
            Some((Team::White, PieceKind::King))
        );
    }

    #[test]
    fn remove_piece_off_board_is_noop() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert!(game.remove_piece_at_coords(9, 9).is_none());
        assert_eq!(game, before);
    }

    #[test]
    fn king_locations_follow_placement() {
        let game = GameState::new_game();
        assert_eq!(game.king_location(Team::White), BoardLocation::new(4, 0).unwrap());
        assert_eq!(game.king_location(Team::Black), BoardLocation::new(4, 7).unwrap());
    }
}
