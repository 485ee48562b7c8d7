use crate::chess_errors::ChessResult;
use crate::chess_move::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Counts leaf nodes (and leaf move categories) of the legal move tree to
/// `depth` plies. The position is restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (_, counts) in perft_divide(game_state, depth)? {
        total.merge(counts);
    }
    Ok(total)
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> ChessResult<Vec<(Move, PerftCounts)>> {
    let root_moves = game_state.all_legal_moves();
    let mut divided = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut counts = PerftCounts::default();
        perft_recurse(game_state, &mv, depth, 1, &mut counts)?;
        divided.push((mv, counts));
    }

    Ok(divided)
}

fn perft_recurse(
    game_state: &mut GameState,
    mv: &Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    game_state.make_move(mv)?;

    let mut result = Ok(());
    if current_depth >= search_depth {
        count_leaf(game_state, mv, counts);
    } else {
        for child in game_state.all_legal_moves() {
            result = perft_recurse(game_state, &child, search_depth, current_depth + 1, counts);
            if result.is_err() {
                break;
            }
        }
    }

    // Restore before propagating so a failure never leaves the move applied.
    game_state.undo_last_move()?;
    result
}

fn count_leaf(game_state: &GameState, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }
    if game_state.is_in_check(game_state.side_to_move()) {
        counts.checks += 1;
    }
}
