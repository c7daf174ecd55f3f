//! Game state, the tick engine that advances it, and the interactive driver
//! built on top.

pub mod config;
pub mod engine;
pub mod game_loop;
pub mod history;
pub mod input_source;
pub mod position_info;
pub mod renderer;
pub mod state;
pub mod tick;

pub use config::{GameConfig, Phase, Variant};
pub use state::GameState;
pub use tick::{redo, tick, undo, GameTick, InvalidMoveReason, TickError};
