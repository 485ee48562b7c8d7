use crate::board_location::BoardLocation;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub fn knight_attacks(from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_file, d_rank)| from.offset(d_file, d_rank))
}
