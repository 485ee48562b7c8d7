//! Crate root module declarations for the Sightless Chess rules engine.
//!
//! This file exposes the board model, move generation, notation and FEN/PGN
//! codecs, and the text console session so the binary, tests, and external
//! front-ends can import stable module paths.

pub mod board_location;
pub mod chess_errors;
pub mod chess_move;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod playout;
    pub mod render_game_state;
    pub mod san_resolver;
    pub mod san_writer;
}

pub mod session {
    pub mod config;
    pub mod console;
}
