//! Scoring for Mastermind.
//!
//! A code maker hides a [`Shield`] of colored pegs behind a [`Board`]; the code
//! breaker submits guesses and gets back a [`Response`] of black key pegs (right
//! color, right place) and white key pegs (right color, wrong place).
//!
//! ```
//! use mastermind::{parse_code, Board, BoardConfig, Shield};
//!
//! let mut board = Board::new(BoardConfig::new(4, 10))?;
//! board.register_shield(Shield::new(parse_code("k b g w")?)?)?;
//!
//! let response = board.score_guess(&parse_code("r k g w")?)?;
//! assert_eq!((response.black_key_pegs, response.white_key_pegs), (2, 1));
//! assert!(!board.is_solved(response)?);
//! # Ok::<(), mastermind::Error>(())
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod bank;
mod board;
pub mod config;
mod error;
pub mod scan;
mod shield;

pub use board::{Board, BoardConfig};
pub use config::GameConfig;
pub use error::{ConfigError, Error, ErrorKind};
pub use shield::Shield;

/// Number of distinct peg colors.
pub const N_COLORS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodePeg {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
}

impl CodePeg {
    pub const ALL: [CodePeg; N_COLORS] = [
        CodePeg::Black,
        CodePeg::White,
        CodePeg::Red,
        CodePeg::Green,
        CodePeg::Blue,
        CodePeg::Yellow,
    ];

    /// Dense index in `0..N_COLORS`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-letter abbreviation. Black is `k` so that it does not collide with blue.
    pub fn letter(self) -> char {
        match self {
            CodePeg::Black => 'k',
            CodePeg::White => 'w',
            CodePeg::Red => 'r',
            CodePeg::Green => 'g',
            CodePeg::Blue => 'b',
            CodePeg::Yellow => 'y',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CodePeg::Black => "black",
            CodePeg::White => "white",
            CodePeg::Red => "red",
            CodePeg::Green => "green",
            CodePeg::Blue => "blue",
            CodePeg::Yellow => "yellow",
        }
    }
}

impl FromStr for CodePeg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        CodePeg::ALL
            .into_iter()
            .find(|peg| lower == peg.name() || lower.chars().eq([peg.letter()]))
            .ok_or_else(|| Error::UnknownColor(s.to_owned()))
    }
}

impl fmt::Display for CodePeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a code such as `"k b g w"` or `"black, blue, green, white"`.
pub fn parse_code(s: &str) -> Result<Vec<CodePeg>, Error> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(str::parse)
        .collect()
}

/// Renders a code in its one-letter form, e.g. `"kbgw"`.
pub fn format_code(code: &[CodePeg]) -> String {
    code.iter().map(|peg| peg.letter()).collect()
}

/// Key pegs awarded for one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Response {
    pub black_key_pegs: usize,
    pub white_key_pegs: usize,
}

impl Response {
    pub fn new(black_key_pegs: usize, white_key_pegs: usize) -> Self {
        Response {
            black_key_pegs,
            white_key_pegs,
        }
    }

    pub fn total(&self) -> usize {
        self.black_key_pegs.saturating_add(self.white_key_pegs)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}W", self.black_key_pegs, self.white_key_pegs)
    }
}
