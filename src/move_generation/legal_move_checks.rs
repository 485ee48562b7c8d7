use crate::board_location::BoardLocation;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::rook_moves::{trace_ray, ROOK_DIRECTIONS};

#[inline]
pub fn is_king_in_check(game_state: &GameState, team: Team) -> bool {
    is_square_attacked(game_state, game_state.king_location(team), team.opposite())
}

/// True when some `attacker` piece has `square` as a pseudo-legal
/// destination. Pawns count with their diagonal capture geometry only.
///
/// A square holding one of the attacker's own pieces is never a destination
/// for that side, so it reports false.
pub fn is_square_attacked(game_state: &GameState, square: BoardLocation, attacker: Team) -> bool {
    if matches!(game_state.piece_at(square), Some(piece) if piece.team == attacker) {
        return false;
    }

    let holds = |location: BoardLocation, kinds: &[PieceKind]| {
        matches!(
            game_state.piece_at(location),
            Some(piece) if piece.team == attacker && kinds.contains(&piece.kind)
        )
    };

    // Pawns attack diagonally forward, so look diagonally backward from the target.
    for d_file in [-1i8, 1] {
        if let Some(origin) = square.offset(d_file, -attacker.forward()) {
            if holds(origin, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    if knight_attacks(square).any(|origin| holds(origin, &[PieceKind::Knight])) {
        return true;
    }

    if king_attacks(square).any(|origin| holds(origin, &[PieceKind::King])) {
        return true;
    }

    let occupied = |location: BoardLocation| game_state.piece_at(location).is_some();
    let sliders = [
        (ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen]),
        (BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, kinds) in sliders {
        for direction in directions {
            let ray = trace_ray(square, direction, occupied);
            if let Some(&blocker) = ray.last() {
                if holds(blocker, &kinds) {
                    return true;
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::board_location::BoardLocation;
    use crate::game_state::chess_types::*;

    fn loc(s: &str) -> BoardLocation {
        s.parse().expect("test square should parse")
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game, loc("d3"), Team::White));
        assert!(is_square_attacked(&game, loc("f3"), Team::White));
        assert!(!is_square_attacked(&game, loc("e3"), Team::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/4P3/R3K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game, loc("a8"), Team::White));
        assert!(is_square_attacked(&game, loc("d1"), Team::White));
        // Own piece on the square: not a destination.
        assert!(!is_square_attacked(&game, loc("e1"), Team::White));

        let blocked =
            GameState::from_fen("4k3/8/8/8/8/8/P7/R3K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_square_attacked(&blocked, loc("a8"), Team::White));
        assert!(!is_square_attacked(&blocked, loc("a3"), Team::White));
    }

    #[test]
    fn check_detection_uses_tracked_king() {
        let game =
            GameState::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Team::White));
        assert!(!is_king_in_check(&game, Team::Black));
    }

    #[test]
    fn knight_and_king_attacks() {
        let game =
            GameState::from_fen("4k3/8/8/8/3n4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game, loc("e2"), Team::Black));
        assert!(is_square_attacked(&game, loc("c6"), Team::Black));
        assert!(is_square_attacked(&game, loc("d7"), Team::Black));
        assert!(!is_square_attacked(&game, loc("d5"), Team::Black));
    }
}
