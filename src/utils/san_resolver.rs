//! Human algebraic notation to concrete moves.
//!
//! A token such as `Nxe4`, `N5xe4`, `exd6 e.p.`, `e8=N` or `O-O` is parsed
//! into constraints (piece kind, destination, origin hints, capture, en
//! passant, promotion) and matched against the legal moves of the side to
//! move. Exactly one move must match; anything else is reported with the
//! number of candidates so the caller can re-prompt.

use crate::board_location::BoardLocation;
use crate::chess_errors::{ChessError, ChessResult, FormatError};
use crate::chess_move::Move;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Constraints extracted from one notation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NotationQuery {
    kind: PieceKind,
    to: BoardLocation,
    from_file: Option<i8>,
    from_rank: Option<i8>,
    capture: bool,
    en_passant: bool,
    promotion: Option<PieceKind>,
}

/// Resolves `token` to the single legal move it names. The position is left
/// unchanged.
pub fn resolve_algebraic(game_state: &mut GameState, token: &str) -> ChessResult<Move> {
    let trimmed = token.trim();
    let (body, en_passant) = strip_en_passant_suffix(trimmed);
    let body = body.trim_end_matches(['+', '#', '!', '?']);

    if let Some(side) = castle_side(body) {
        return resolve_castle(game_state, trimmed, side);
    }

    let query = parse_query(body, en_passant)
        .ok_or_else(|| FormatError::InvalidNotation(trimmed.to_owned()))?;

    let candidates: Vec<Move> = game_state
        .all_legal_moves()
        .into_iter()
        .filter(|mv| query.matches(mv))
        .collect();

    match candidates.as_slice() {
        [only] => Ok(*only),
        _ => Err(ChessError::Resolution {
            token: trimmed.to_owned(),
            candidates: candidates.len(),
        }),
    }
}

/// Resolves `token` and plays it.
pub fn apply_algebraic(game_state: &mut GameState, token: &str) -> ChessResult<Move> {
    let mv = resolve_algebraic(game_state, token)?;
    game_state.make_move(&mv)
}

impl NotationQuery {
    fn matches(&self, mv: &Move) -> bool {
        if mv.moved_piece.kind != self.kind || mv.to != self.to || mv.is_castle() {
            return false;
        }
        if self.from_file.is_some_and(|file| file != mv.from.file())
            || self.from_rank.is_some_and(|rank| rank != mv.from.rank())
        {
            return false;
        }
        if self.capture && !mv.is_capture() {
            return false;
        }
        if self.en_passant && !mv.is_en_passant() {
            return false;
        }

        // Pawns without a capture marker only push, straight up the file.
        if self.kind == PieceKind::Pawn && !self.capture && mv.from.file() != self.to.file() {
            return false;
        }

        match (mv.promotion, self.promotion) {
            (None, None) => true,
            (None, Some(_)) => false,
            (Some(kind), wanted) => kind == wanted.unwrap_or(PieceKind::Queen),
        }
    }
}

fn strip_en_passant_suffix(token: &str) -> (&str, bool) {
    for suffix in ["e.p.", "e.p", "ep"] {
        if let Some(head) = token.strip_suffix(suffix) {
            // Squares end in a digit, so a bare `ep` only counts after a space.
            if suffix != "ep" || head.ends_with(char::is_whitespace) {
                return (head.trim_end(), true);
            }
        }
    }
    (token, false)
}

fn castle_side(body: &str) -> Option<CastleSide> {
    match body {
        "O-O" | "0-0" | "o-o" => Some(CastleSide::KingSide),
        "O-O-O" | "0-0-0" | "o-o-o" => Some(CastleSide::QueenSide),
        _ => None,
    }
}

fn resolve_castle(game_state: &mut GameState, token: &str, side: CastleSide) -> ChessResult<Move> {
    let king = game_state.king_location(game_state.side_to_move());
    let candidates: Vec<Move> = game_state
        .legal_moves(king)
        .into_iter()
        .filter(|mv| mv.is_castle() && mv.to.file() == side.king_target_file())
        .collect();

    match candidates.as_slice() {
        [only] => Ok(*only),
        _ => Err(ChessError::Resolution {
            token: token.to_owned(),
            candidates: candidates.len(),
        }),
    }
}

/// `[KQRBN]?[file]?[rank]?[x]?<file><rank>[=]?[QRBN]?`
fn parse_query(body: &str, en_passant: bool) -> Option<NotationQuery> {
    if !body.is_ascii() || body.len() < 2 {
        return None;
    }

    let (kind, rest) = match body.chars().next() {
        Some(letter @ ('K' | 'Q' | 'R' | 'B' | 'N')) => (PieceKind::from_letter(letter)?, &body[1..]),
        _ => (PieceKind::Pawn, body),
    };

    let (rest, promotion) = split_promotion(rest, kind)?;
    if rest.len() < 2 {
        return None;
    }

    let split = rest.len() - 2;
    let to: BoardLocation = rest[split..].parse().ok()?;
    let prefix = &rest[..split];

    let mut from_file = None;
    let mut from_rank = None;
    let mut capture = false;
    for ch in prefix.chars() {
        match ch {
            'x' | 'X' | ':' if !capture => capture = true,
            'a'..='h' if !capture && from_file.is_none() && from_rank.is_none() => {
                from_file = Some(ch as i8 - b'a' as i8);
            }
            '1'..='8' if !capture && from_rank.is_none() => {
                from_rank = Some(ch as i8 - b'1' as i8);
            }
            _ => return None,
        }
    }

    // The hint must come right before the capture marker or destination.
    if capture && !prefix.ends_with(['x', 'X', ':']) {
        return None;
    }

    if kind == PieceKind::Pawn {
        if from_file.is_some_and(|file| file != to.file()) {
            capture = true;
        }
        if en_passant {
            capture = true;
        }
    }

    Some(NotationQuery {
        kind,
        to,
        from_file,
        from_rank,
        capture,
        en_passant,
        promotion,
    })
}

/// Splits off `=Q` (or a bare trailing `Q` on a pawn token).
fn split_promotion(rest: &str, kind: PieceKind) -> Option<(&str, Option<PieceKind>)> {
    let parse_kind = |letter: &str| match letter {
        "Q" | "q" => Some(PieceKind::Queen),
        "R" | "r" => Some(PieceKind::Rook),
        "B" | "b" => Some(PieceKind::Bishop),
        "N" | "n" => Some(PieceKind::Knight),
        _ => None,
    };

    if let Some((head, letter)) = rest.split_once('=') {
        if kind != PieceKind::Pawn {
            return None;
        }
        return Some((head, Some(parse_kind(letter)?)));
    }

    if kind == PieceKind::Pawn && rest.len() > 2 {
        let (head, last) = rest.split_at(rest.len() - 1);
        if last.chars().all(|c| c.is_ascii_uppercase()) {
            return Some((head, Some(parse_kind(last)?)));
        }
    }

    Some((rest, None))
}
