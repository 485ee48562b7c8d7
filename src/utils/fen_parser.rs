//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! placement, tracked kings, side, rights, clocks and the ply counter. FEN
//! carries no movement history, so `has_moved` is derived from the castling
//! field and pawn ranks, and an en-passant target tags the pawn in front of
//! it as having just double-pushed.

use crate::board_location::BoardLocation;
use crate::chess_errors::{ChessError, ChessResult, FormatError};
use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        return Err(FormatError::WrongFieldCount(fields.len()).into());
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.halfmove_clock = parse_counter(halfmove_part)?;
    game_state.fullmove_number = parse_counter(fullmove_part)?;

    // Fullmove 0 shows up in some test suites; treat it as the first move.
    let fullmove = u32::from(game_state.fullmove_number.max(1));
    game_state.move_number = 2 * (fullmove - 1) + 1;
    if game_state.side_to_move == Team::Black {
        game_state.move_number += 1;
    }

    derive_movement_history(&mut game_state);
    parse_en_passant_target(en_passant_part, &mut game_state)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FormatError::WrongRankCount(ranks.len()).into());
    }

    let mut kings_seen = [false; 2];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FormatError::InvalidPieceChar(ch).into());
                }
                file += empty_count as i8;
                if file > 8 {
                    return Err(rank_width(board_rank, file));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FormatError::InvalidPieceChar(ch))?;
            let location =
                BoardLocation::new(file, board_rank).ok_or_else(|| rank_width(board_rank, file + 1))?;

            if piece.kind == PieceKind::King {
                kings_seen[piece.team.index()] = true;
            }
            // Later kings win: placement walks ranks 8 -> 1, files a -> h.
            game_state.place_piece(location, piece);
            file += 1;
        }

        if file != 8 {
            return Err(rank_width(board_rank, file));
        }
    }

    for team in [Team::White, Team::Black] {
        if !kings_seen[team.index()] {
            return Err(FormatError::MissingKing(team).into());
        }
    }

    Ok(())
}

fn rank_width(board_rank: i8, files: i8) -> ChessError {
    FormatError::RankWidth {
        rank: (board_rank + 1) as u8,
        files: files as u8,
    }
    .into()
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Team> {
    match side_part {
        "w" => Ok(Team::White),
        "b" => Ok(Team::Black),
        _ => Err(FormatError::InvalidSideToMove(side_part.to_owned()).into()),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FormatError::InvalidCastlingChar(ch).into()),
        }
    }

    Ok(rights)
}

fn parse_counter(part: &str) -> ChessResult<u16> {
    part.parse::<u16>()
        .map_err(|_| FormatError::InvalidCounter(part.to_owned()).into())
}

/// Kings and corner rooks count as unmoved only while the matching castling
/// right is held; pawns only on their start rank.
fn derive_movement_history(game_state: &mut GameState) {
    let rights = game_state.castling_rights;

    for location in BoardLocation::all() {
        let Some(piece) = game_state.squares[location.index()].as_mut() else {
            continue;
        };
        let team = piece.team;
        let on_home_rank = location.rank() == team.home_rank();

        piece.has_moved = match piece.kind {
            PieceKind::Pawn => location.rank() != team.pawn_rank(),
            PieceKind::King => {
                let any_right = castling_right(team, CastleSide::KingSide)
                    | castling_right(team, CastleSide::QueenSide);
                !(on_home_rank && location.file() == KING_START_FILE && rights & any_right != 0)
            }
            PieceKind::Rook => {
                let side = [CastleSide::KingSide, CastleSide::QueenSide]
                    .into_iter()
                    .find(|side| side.rook_file() == location.file());
                match side {
                    Some(side) if on_home_rank => rights & castling_right(team, side) == 0,
                    _ => true,
                }
            }
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
        };
    }
}

/// The target is the square the pawn skipped; the pawn itself stands one
/// rank further in its direction of travel.
fn parse_en_passant_target(en_passant_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let invalid = || FormatError::InvalidEnPassant(en_passant_part.to_owned());
    let target: BoardLocation = en_passant_part.parse().map_err(|_| invalid())?;

    let pusher = game_state.side_to_move.opposite();
    if target.rank() != pusher.pawn_rank() + pusher.forward() {
        return Err(invalid().into());
    }

    let pawn_location = target.offset(0, pusher.forward()).ok_or_else(invalid)?;
    match game_state.piece_at(pawn_location) {
        Some(piece) if piece.team == pusher && piece.kind == PieceKind::Pawn => {
            game_state.mark_double_push(pawn_location);
            Ok(())
        }
        _ => Err(invalid().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::board_location::BoardLocation;
    use crate::chess_errors::{ChessError, FormatError};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    fn loc(s: &str) -> BoardLocation {
        s.parse().expect("test square should parse")
    }

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state, Team::White));

        assert_eq!(game_state.side_to_move(), Team::White);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.move_number(), 1);
        assert_eq!(game_state.king_location(Team::Black), loc("e8"));
    }

    #[test]
    fn move_number_counts_plies() {
        let white = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 6").expect("FEN should parse");
        assert_eq!(white.move_number(), 11);
        let black = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 6").expect("FEN should parse");
        assert_eq!(black.move_number(), 12);
        let zero = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 0").expect("FEN should parse");
        assert_eq!(zero.move_number(), 1);
        assert_eq!(zero.fullmove_number(), 0);
    }

    #[test]
    fn movement_history_follows_castling_field() {
        let game = parse_fen("r3k2r/8/8/8/8/8/4P3/R3K2R w Kq - 0 1").expect("FEN should parse");
        let moved = |s: &str| game.piece_at(loc(s)).map(|p| p.has_moved);

        assert_eq!(moved("e1"), Some(false));
        assert_eq!(moved("h1"), Some(false));
        assert_eq!(moved("a1"), Some(true));
        assert_eq!(moved("a8"), Some(false));
        assert_eq!(moved("h8"), Some(true));
        assert_eq!(moved("e2"), Some(false));
    }

    #[test]
    fn en_passant_target_tags_pawn() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("FEN should parse");
        assert_eq!(game.en_passant_victim(Team::Black), Some(loc("d5")));
    }

    #[test]
    fn rejects_malformed_fields() {
        let cases: [(&str, FormatError); 8] = [
            ("8/8/8/8/8/8/8/8 w - -", FormatError::WrongFieldCount(4)),
            ("4k3/8/8/8/8/8/4K3 w - - 0 1", FormatError::WrongRankCount(7)),
            ("4k3/8/8/8/8/8/8/4K2 w - - 0 1", FormatError::RankWidth { rank: 1, files: 7 }),
            ("4k3/8/8/8/8/8/8/4KX2 w - - 0 1", FormatError::InvalidPieceChar('X')),
            ("4k3/8/8/8/8/8/8/4K3 x - - 0 1", FormatError::InvalidSideToMove("x".to_owned())),
            ("4k3/8/8/8/8/8/8/4K3 w Z - 0 1", FormatError::InvalidCastlingChar('Z')),
            ("4k3/8/8/8/8/8/8/4K3 w - e3 0 1", FormatError::InvalidEnPassant("e3".to_owned())),
            ("4k3/8/8/8/8/8/8/4K3 w - - x 1", FormatError::InvalidCounter("x".to_owned())),
        ];

        for (fen, expected) in cases {
            assert_eq!(parse_fen(fen), Err(ChessError::Format(expected)), "{fen}");
        }
    }

    #[test]
    fn rejects_missing_king() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::Format(FormatError::MissingKing(Team::Black)))
        );
    }

    #[test]
    fn accepts_extra_king_and_tracks_last_read() {
        let game = parse_fen("rnbqkbnr/pppppppp/8/2N5/4p3/2N1K3/PPPP1PPP/R1BQKB1R w kq - 0 1")
            .expect("FEN should parse");
        assert_eq!(game.king_location(Team::White), loc("e1"));
    }
}
