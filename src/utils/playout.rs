//! Uniformly random legal playouts.
//!
//! Used by the console `random` command and by the property tests to reach
//! arbitrary positions. Playouts stop early when the side to move has no
//! legal reply.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::chess_move::Move;
use crate::game_state::game_state::GameState;

/// Plays up to `plies` random legal moves on `game_state` and returns them in
/// order. Every move stays on the undo stack.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    plies: usize,
    rng: &mut R,
) -> ChessResult<Vec<Move>> {
    let mut played = Vec::with_capacity(plies);

    for _ in 0..plies {
        let legal_moves = game_state.all_legal_moves();
        let Some(mv) = legal_moves.choose(rng) else {
            break;
        };
        played.push(game_state.make_move(mv)?);
    }

    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::random_playout;
    use crate::game_state::game_state::GameState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn playout_is_reproducible_and_undoable() {
        let mut first = GameState::new_game();
        let mut second = GameState::new_game();

        let a = random_playout(&mut first, 40, &mut StdRng::seed_from_u64(7)).expect("playout");
        let b = random_playout(&mut second, 40, &mut StdRng::seed_from_u64(7)).expect("playout");
        assert_eq!(a, b);
        assert_eq!(first.undo_depth(), a.len());

        while first.undo_depth() > 0 {
            first.undo_last_move().expect("undo should succeed");
        }
        assert_eq!(first, GameState::new_game());
    }

    #[test]
    fn playout_stops_when_no_moves_remain() {
        let mut mated = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/4K3 b - - 0 1")
            .expect("FEN should parse");
        let played = random_playout(&mut mated, 10, &mut StdRng::seed_from_u64(1)).expect("playout");
        assert!(played.is_empty());
    }
}
