use crate::board_location::BoardLocation;
use crate::game_state::chess_types::Team;

/// Diagonal capture squares of a `team` pawn on `from`, regardless of occupancy.
#[inline]
pub fn pawn_attacks(team: Team, from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_file| from.offset(d_file, team.forward()))
}
