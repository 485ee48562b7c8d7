//! King step geometry.

use crate::board_location::BoardLocation;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[inline]
pub fn king_attacks(from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_file, d_rank)| from.offset(d_file, d_rank))
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::board_location::BoardLocation;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let a1 = BoardLocation::new(0, 0).unwrap();
        assert_eq!(king_attacks(a1).count(), 3);
    }
}
