//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox for debugging,
//! tests, and the console `d` command. The `perspective` team is drawn at
//! the bottom.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState, perspective: Team) -> String {
    let (ranks, files): (Vec<i8>, Vec<i8>) = match perspective {
        Team::White => ((0..8).rev().collect(), (0..8).collect()),
        Team::Black => ((0..8).collect(), (0..8).rev().collect()),
    };

    let file_labels: String = files
        .iter()
        .map(|file| char::from(b'a' + *file as u8).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&format!("  {file_labels}\n"));

    for &rank in &ranks {
        let rank_label = char::from(b'1' + rank as u8);
        out.push(rank_label);
        out.push(' ');

        for (column, &file) in files.iter().enumerate() {
            match game_state.piece_at_coords(file, rank) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str(&format!("  {file_labels}"));

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.team, piece.kind) {
        (Team::White, PieceKind::Pawn) => '♙',
        (Team::White, PieceKind::Knight) => '♘',
        (Team::White, PieceKind::Bishop) => '♗',
        (Team::White, PieceKind::Rook) => '♖',
        (Team::White, PieceKind::Queen) => '♕',
        (Team::White, PieceKind::King) => '♔',
        (Team::Black, PieceKind::Pawn) => '♟',
        (Team::Black, PieceKind::Knight) => '♞',
        (Team::Black, PieceKind::Bishop) => '♝',
        (Team::Black, PieceKind::Rook) => '♜',
        (Team::Black, PieceKind::Queen) => '♛',
        (Team::Black, PieceKind::King) => '♚',
    }
}
