use crate::board_location::BoardLocation;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(
    from: BoardLocation,
    is_occupied: impl Fn(BoardLocation) -> bool,
) -> Vec<BoardLocation> {
    let mut attacks = rook_attacks(from, &is_occupied);
    attacks.extend(bishop_attacks(from, &is_occupied));
    attacks
}
