//! Rook ray geometry.
//!
//! Sliding pieces walk a ray square by square and stop at the first occupied
//! square, which is included so callers can decide whether it is a capture.
//! `trace_ray` is shared by the bishop and queen helpers.

use crate::board_location::BoardLocation;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares a rook on `from` reaches, given which squares are occupied.
pub fn rook_attacks(
    from: BoardLocation,
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> Vec<BoardLocation> {
    let mut attacks = Vec::with_capacity(14);
    for direction in ROOK_DIRECTIONS {
        attacks.extend(trace_ray(from, direction, &is_occupied));
    }
    attacks
}

/// Walks from `from` (exclusive) in `direction` until the board edge or the
/// first occupied square (inclusive).
pub fn trace_ray(
    from: BoardLocation,
    (d_file, d_rank): (i8, i8),
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> Vec<BoardLocation> {
    let mut ray = Vec::with_capacity(7);
    let mut current = from.offset(d_file, d_rank);

    while let Some(location) = current {
        ray.push(location);
        if is_occupied(location) {
            break;
        }
        current = location.offset(d_file, d_rank);
    }

    ray
}
