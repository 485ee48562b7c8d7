//! Board coordinates.
//!
//! A `BoardLocation` is a `(file, rank)` pair with both components in `0..8`,
//! where `(0, 0)` is `a1` and `(7, 7)` is `h8`. Values can only be built
//! through validating constructors, so every location held by the engine is
//! on the board. Raw coordinate pairs that may be off the board are checked
//! with [`is_in_bounds`].

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::FormatError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    file: i8,
    rank: i8,
}

/// Returns true when both coordinates lie in `0..8`.
#[inline]
pub const fn is_in_bounds(file: i8, rank: i8) -> bool {
    file >= 0 && file < 8 && rank >= 0 && rank < 8
}

impl BoardLocation {
    /// Builds a location, returning `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if is_in_bounds(file, rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Builds a location from a mailbox index (`0 == a1`, `63 == h8`).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self {
                file: (index % 8) as i8,
                rank: (index / 8) as i8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    /// Moves a board location by a file and rank offset.
    ///
    /// Returns `None` if the result would leave the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::new(self.file + d_file, self.rank + d_rank)
    }

    /// Iterates all 64 squares from `a1` to `h8`.
    pub fn all() -> impl Iterator<Item = BoardLocation> {
        (0..64).filter_map(Self::from_index)
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file as u8)
    }

    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank as u8)
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for BoardLocation {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(FormatError::InvalidSquare(s.to_owned()));
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(FormatError::InvalidSquare(s.to_owned()));
        }

        Ok(Self {
            file: (file - b'a') as i8,
            rank: (rank - b'1') as i8,
        })
    }
}
