//! Common types re-exported for convenience.

pub use crate::board::color::Color;
pub use crate::board::coord::Coord;
pub use crate::board::Board;
pub use crate::game::engine::{Engine, EngineConfig};
pub use crate::game::{redo, tick, undo, GameConfig, GameState, GameTick, Variant};
pub use crate::moves::{Move, MoveList};
pub use crate::rules::{GameFact, MoveFact, Rules};
pub use crate::searcher::{search, SearchConfig};
