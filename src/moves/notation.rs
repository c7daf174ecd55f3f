//! Text form of moves: `P <color> <coord>`, `M <coord> <coord>`, `R <coord>`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::coord::CoordParseError;

use super::Move;

static PLACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[Pp][ \t]+([WBwb])[ \t]+([a-z][0-9]+)$").expect("PLACE_RE regex should be valid")
});
static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[Mm][ \t]+([a-z][0-9]+)[ \t]+([a-z][0-9]+)$")
        .expect("MOVE_RE regex should be valid")
});
static REMOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[Rr][ \t]+([a-z][0-9]+)$").expect("REMOVE_RE regex should be valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("cannot parse move `{input}`; expected `P <W|B> <point>`, `M <point> <point>` or `R <point>`")]
    Unrecognized { input: String },
    #[error("invalid point in move: {error}")]
    InvalidCoord { error: CoordParseError },
}

impl From<CoordParseError> for MoveParseError {
    fn from(error: CoordParseError) -> Self {
        MoveParseError::InvalidCoord { error }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { color, to } => write!(f, "P {} {}", color.to_char(), to),
            Move::Move { from, to } => write!(f, "M {} {}", from, to),
            Move::Remove { from } => write!(f, "R {}", from),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let unrecognized = || MoveParseError::Unrecognized {
            input: input.to_string(),
        };

        if let Some(caps) = PLACE_RE.captures(trimmed) {
            let color = caps[1]
                .chars()
                .next()
                .and_then(Color::from_char)
                .ok_or_else(unrecognized)?;
            return Ok(Move::Place {
                color,
                to: caps[2].parse()?,
            });
        }
        if let Some(caps) = MOVE_RE.captures(trimmed) {
            return Ok(Move::Move {
                from: caps[1].parse()?,
                to: caps[2].parse()?,
            });
        }
        if let Some(caps) = REMOVE_RE.captures(trimmed) {
            return Ok(Move::Remove {
                from: caps[1].parse()?,
            });
        }

        Err(unrecognized())
    }
}

/// Parses a comma separated list of moves, e.g. `P W a1, P B b2`.
pub fn parse_move_list(input: &str) -> Result<Vec<Move>, MoveParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Move::from_str)
        .collect()
}
