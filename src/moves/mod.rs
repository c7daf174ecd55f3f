//! Moves are plain descriptions of what a player wants to do. Whether a move
//! is legal, and what it causes, is decided entirely by the rule sets.

pub mod notation;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::coord::Coord;

pub use notation::MoveParseError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Move {
    /// Put a new piece of `color` from the unplaced pool onto `to`.
    Place { color: Color, to: Coord },
    /// Slide (or fly) the piece on `from` to `to`.
    Move { from: Coord, to: Coord },
    /// Capture the piece on `from`.
    Remove { from: Coord },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Place,
    Move,
    Remove,
}

pub type MoveList = SmallVec<[Move; 32]>;

impl Move {
    pub fn place(color: Color, to: Coord) -> Self {
        Move::Place { color, to }
    }

    pub fn slide(from: Coord, to: Coord) -> Self {
        Move::Move { from, to }
    }

    pub fn remove(from: Coord) -> Self {
        Move::Remove { from }
    }

    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Place { .. } => MoveKind::Place,
            Move::Move { .. } => MoveKind::Move,
            Move::Remove { .. } => MoveKind::Remove,
        }
    }

    pub fn from(&self) -> Option<Coord> {
        match *self {
            Move::Place { .. } => None,
            Move::Move { from, .. } | Move::Remove { from } => Some(from),
        }
    }

    pub fn to(&self) -> Option<Coord> {
        match *self {
            Move::Place { to, .. } | Move::Move { to, .. } => Some(to),
            Move::Remove { .. } => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
