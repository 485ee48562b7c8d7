//! Text console front-end and command loop.
//!
//! Reads one command per line, keeps the session position, and writes
//! results to the output stream. Every failure is reported as an
//! `info string ...` line; nothing a user types ends the session except
//! `quit` or end of input.
//!
//! Commands:
//! - `position startpos|fen <FEN> [moves <m1> <m2> ...]`
//! - `move <m>` where `<m>` is algebraic (`Nf3`, `O-O`) or long algebraic (`g1f3`)
//! - `undo`
//! - `moves [square]`
//! - `fen`, `d`
//! - `random [plies]`
//! - `perft <depth>`
//! - `pgn`
//! - `quit`

use std::io::{self, BufRead, Write};

use crate::board_location::BoardLocation;
use crate::chess_errors::{ChessError, ChessResult};
use crate::chess_move::{parse_long_algebraic, Move};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::perft::perft_divide;
use crate::session::config::SessionConfig;
use crate::utils::pgn::write_pgn;
use crate::utils::playout::random_playout;
use crate::utils::render_game_state::render_game_state;
use crate::utils::san_resolver::resolve_algebraic;
use crate::utils::san_writer::move_to_algebraic;

const MAX_PERFT_DEPTH: u8 = 6;

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = ConsoleSession::new(config).map_err(io::Error::other)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleSession {
    config: SessionConfig,
    initial_state: GameState,
    game_state: GameState,
    history: Vec<Move>,
}

impl ConsoleSession {
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        let initial_state = config.initial_state()?;
        Ok(Self {
            config,
            game_state: initial_state.clone(),
            initial_state,
            history: Vec::new(),
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handles one input line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, args) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(cmd, args)| (cmd, args.trim()));

        let result = match cmd {
            "position" => self.handle_position(args),
            "move" => self.handle_move(args, out),
            "undo" => self.handle_undo(out),
            "moves" => self.handle_moves(args, out),
            "fen" => writeln!(out, "{}", self.game_state.get_fen()).map_err(Into::into),
            "d" => self.handle_display(out),
            "random" => self.handle_random(args, out),
            "perft" => self.handle_perft(args, out),
            "pgn" => self.handle_pgn(out),
            "quit" => return Ok(true),
            other => Err(CommandError::Usage(format!("unknown command '{other}'"))),
        };

        match result {
            Ok(()) => {}
            Err(CommandError::Io(err)) => return Err(err),
            Err(CommandError::Chess(err)) => writeln!(out, "info string {cmd} error: {err}")?,
            Err(CommandError::Usage(msg)) => writeln!(out, "info string {cmd} error: {msg}")?,
        }

        Ok(false)
    }

    fn handle_position(&mut self, args: &str) -> CommandResult {
        let (setup, moves) = match args.split_once("moves") {
            Some((setup, moves)) => (setup.trim(), Some(moves)),
            None => (args, None),
        };

        let mut state = match setup.split_once(char::is_whitespace) {
            _ if setup == "startpos" => GameState::new_game(),
            Some(("fen", fen)) => GameState::from_fen(fen.trim())?,
            _ => {
                return Err(CommandError::Usage(
                    "expected 'startpos' or 'fen <FEN>'".to_owned(),
                ))
            }
        };

        let mut history = Vec::new();
        for token in moves.unwrap_or_default().split_whitespace() {
            history.push(play_token(&mut state, token)?);
        }

        self.initial_state = state.clone();
        while self.initial_state.undo_depth() > 0 {
            self.initial_state.undo_last_move()?;
        }
        self.game_state = state;
        self.history = history;
        Ok(())
    }

    fn handle_move(&mut self, args: &str, out: &mut impl Write) -> CommandResult {
        if args.is_empty() {
            return Err(CommandError::Usage("expected a move".to_owned()));
        }

        let mv = resolve_token(&mut self.game_state, args)?;
        let san = move_to_algebraic(&mut self.game_state, &mv);
        let played = self.game_state.make_move(&mv)?;
        self.history.push(played);
        writeln!(out, "played {san} ({played})")?;
        Ok(())
    }

    fn handle_undo(&mut self, out: &mut impl Write) -> CommandResult {
        let mv = self.game_state.undo_last_move()?;
        self.history.pop();
        writeln!(out, "undone {mv}")?;
        Ok(())
    }

    fn handle_moves(&mut self, args: &str, out: &mut impl Write) -> CommandResult {
        let moves = if args.is_empty() {
            self.game_state.all_legal_moves()
        } else {
            let from: BoardLocation = args.parse().map_err(ChessError::from)?;
            self.game_state.legal_moves(from)
        };

        let mut listed = Vec::with_capacity(moves.len());
        for mv in &moves {
            listed.push(move_to_algebraic(&mut self.game_state, mv));
        }
        writeln!(out, "{} moves: {}", moves.len(), listed.join(" "))?;
        Ok(())
    }

    fn handle_display(&self, out: &mut impl Write) -> CommandResult {
        writeln!(
            out,
            "{}",
            render_game_state(&self.game_state, self.config.player_team)
        )?;
        writeln!(out, "fen {}", self.game_state.get_fen())?;
        if self.game_state.is_in_check(self.game_state.side_to_move()) {
            writeln!(out, "info string {:?} is in check", self.game_state.side_to_move())?;
        }
        Ok(())
    }

    fn handle_random(&mut self, args: &str, out: &mut impl Write) -> CommandResult {
        let plies = if args.is_empty() {
            1
        } else {
            args.parse::<usize>()
                .map_err(|_| CommandError::Usage(format!("invalid ply count '{args}'")))?
        };

        let mut rng = rand::rng();
        let before = self.game_state.clone();
        let played = random_playout(&mut self.game_state, plies, &mut rng)?;

        let mut replay = before;
        let mut listed = Vec::with_capacity(played.len());
        for mv in &played {
            listed.push(move_to_algebraic(&mut replay, mv));
            replay.make_move(mv)?;
        }

        self.history.extend(played);
        writeln!(out, "played {}", listed.join(" "))?;
        Ok(())
    }

    fn handle_perft(&mut self, args: &str, out: &mut impl Write) -> CommandResult {
        let depth = args
            .parse::<u8>()
            .ok()
            .filter(|depth| (1..=MAX_PERFT_DEPTH).contains(depth))
            .ok_or_else(|| {
                CommandError::Usage(format!("depth must be 1..={MAX_PERFT_DEPTH}, got '{args}'"))
            })?;

        let divided = perft_divide(&mut self.game_state, depth)?;
        let mut total = 0usize;
        for (mv, counts) in &divided {
            writeln!(out, "{mv}: {}", counts.nodes)?;
            total += counts.nodes;
        }
        writeln!(out, "nodes {total}")?;
        Ok(())
    }

    fn handle_pgn(&self, out: &mut impl Write) -> CommandResult {
        let pgn = write_pgn(&self.initial_state, &self.history, "*")?;
        write!(out, "{pgn}")?;
        Ok(())
    }
}

/// Long algebraic (`e2e4`, `e7e8q`) when it parses as such, otherwise
/// standard algebraic notation.
fn resolve_token(game_state: &mut GameState, token: &str) -> ChessResult<Move> {
    let Ok((from, to, promotion)) = parse_long_algebraic(token) else {
        return resolve_algebraic(game_state, token);
    };

    let wanted = promotion.unwrap_or(PieceKind::Queen);
    game_state
        .legal_moves(from)
        .into_iter()
        .find(|mv| mv.to == to && mv.promotion.map_or(true, |kind| kind == wanted))
        .ok_or(ChessError::IllegalMove { from, to })
}

fn play_token(game_state: &mut GameState, token: &str) -> ChessResult<Move> {
    let mv = resolve_token(game_state, token)?;
    game_state.make_move(&mv)
}

type CommandResult = Result<(), CommandError>;

enum CommandError {
    Io(io::Error),
    Chess(ChessError),
    Usage(String),
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl From<ChessError> for CommandError {
    fn from(err: ChessError) -> Self {
        CommandError::Chess(err)
    }
}
