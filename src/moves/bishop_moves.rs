//! Bishop ray geometry.

use crate::board_location::BoardLocation;
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Squares a bishop on `from` reaches, given which squares are occupied.
pub fn bishop_attacks(
    from: BoardLocation,
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> Vec<BoardLocation> {
    let mut attacks = Vec::with_capacity(13);
    for direction in BISHOP_DIRECTIONS {
        attacks.extend(trace_ray(from, direction, &is_occupied));
    }
    attacks
}
