//! Session configuration.
//!
//! A session starts from `initial_fen` and renders boards from the
//! `player_team` side. Both can be overridden from the environment:
//!
//! - `SIGHTLESS_START_FEN`: starting position as a FEN string.
//! - `SIGHTLESS_PLAYER_TEAM`: `white`/`w` or `black`/`b`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::{chess_types::Team, game_state::GameState};

pub const START_FEN_ENV: &str = "SIGHTLESS_START_FEN";
pub const PLAYER_TEAM_ENV: &str = "SIGHTLESS_PLAYER_TEAM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub initial_fen: String,
    /// Orientation of text snapshots only; carries no rule state.
    pub player_team: Team,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_fen: STARTING_POSITION_FEN.to_owned(),
            player_team: Team::White,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by whichever environment variables are set.
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ChessResult<Self> {
        let mut config = Self::default();

        if let Some(fen) = lookup(START_FEN_ENV).filter(|value| !value.trim().is_empty()) {
            // Validate now so a bad override fails at startup.
            GameState::from_fen(&fen)?;
            config.initial_fen = fen.trim().to_owned();
        }

        if let Some(team) = lookup(PLAYER_TEAM_ENV) {
            config.player_team = parse_team(&team)?;
        }

        Ok(config)
    }

    pub fn initial_state(&self) -> ChessResult<GameState> {
        GameState::from_fen(&self.initial_fen)
    }
}

pub fn parse_team(value: &str) -> ChessResult<Team> {
    match value.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Team::White),
        "black" | "b" => Ok(Team::Black),
        other => Err(ChessError::Config(format!(
            "{PLAYER_TEAM_ENV} must be 'white' or 'black', got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::FormatError;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn defaults_without_overrides() {
        let config = SessionConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");
        assert_eq!(config, SessionConfig::default());
        assert!(config.initial_state().expect("start FEN").is_standard_start());
    }

    #[test]
    fn overrides_are_applied() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            (START_FEN_ENV, " 4k3/8/8/8/8/8/8/4K3 b - - 0 1 "),
            (PLAYER_TEAM_ENV, "Black"),
        ]))
        .expect("overrides are valid");
        assert_eq!(config.initial_fen, "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(config.player_team, Team::Black);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let bad_fen = SessionConfig::from_lookup(lookup_from(&[(START_FEN_ENV, "8/8 w")]));
        assert_eq!(bad_fen, Err(ChessError::Format(FormatError::WrongFieldCount(2))));

        let bad_team = SessionConfig::from_lookup(lookup_from(&[(PLAYER_TEAM_ENV, "green")]));
        assert!(matches!(bad_team, Err(ChessError::Config(_))));
    }
}
