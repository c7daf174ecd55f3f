use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::move_generator::generate_moves;
use crate::moves::{Move, MoveList, MoveParseError};
use crate::rules::Rules;
use crate::searcher::{SearchConfig, SearchError, SearchStats, Searcher};

use super::config::{GameConfig, Variant};
use super::state::GameState;
use super::tick::{self, GameTick, TickError};

/// Variant and search settings for an `Engine`.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub variant: Variant,
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: Variant::NineMensMorris,
            search: SearchConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{error}")]
    Tick { error: TickError },
    #[error("Search error: {error}")]
    Search { error: SearchError },
    #[error("{error}")]
    Parse { error: MoveParseError },
}

impl From<TickError> for EngineError {
    fn from(error: TickError) -> Self {
        EngineError::Tick { error }
    }
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        EngineError::Search { error }
    }
}

impl From<MoveParseError> for EngineError {
    fn from(error: MoveParseError) -> Self {
        EngineError::Parse { error }
    }
}

/// Plays one game: holds the current tick, the rules it is judged by and
/// the searcher used for computer moves.
pub struct Engine {
    rules: Rules,
    current: GameTick,
    searcher: Searcher,
    last_score: Option<i32>,
}

impl Engine {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let rules = Rules::default();
        let current = GameTick::start(&rules, Arc::new(config.variant.config()))?;
        Ok(Self::from_parts(rules, current, config.search))
    }

    /// An engine continuing from a hand-built position.
    pub fn with_state(state: GameState, search: SearchConfig) -> Result<Self, EngineError> {
        let rules = Rules::default();
        let current = GameTick::from_state(&rules, state)?;
        Ok(Self::from_parts(rules, current, search))
    }

    fn from_parts(rules: Rules, current: GameTick, search: SearchConfig) -> Self {
        Self {
            rules,
            current,
            searcher: Searcher::new(search),
            last_score: None,
        }
    }

    pub fn tick(&self) -> &GameTick {
        &self.current
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn config(&self) -> &GameConfig {
        self.current.game().config()
    }

    pub fn board(&self) -> &Board {
        self.current.game().board()
    }

    pub fn turn(&self) -> Color {
        self.current.turn()
    }

    pub fn message(&self) -> &str {
        self.current.message()
    }

    pub fn check_game_over(&self) -> bool {
        self.current.is_game_over()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.current.game().last_move()
    }

    pub fn get_valid_moves(&self) -> MoveList {
        let state = self.current.game();
        generate_moves(state, state.turn())
    }

    pub fn make_move(&mut self, mv: Move) -> Result<Move, EngineError> {
        self.current = tick::tick(&self.rules, &self.current, &mv)?;
        Ok(mv)
    }

    pub fn make_move_from_str(&mut self, input: &str) -> Result<Move, EngineError> {
        let mv: Move = input.parse()?;
        self.make_move(mv)
    }

    /// Plays a sequence of moves, stopping at the first rejected one.
    pub fn make_moves(&mut self, moves: &[Move]) -> Result<(), EngineError> {
        for &mv in moves {
            self.make_move(mv)?;
        }
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), EngineError> {
        self.current = tick::undo(&self.rules, &self.current)?;
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), EngineError> {
        self.current = tick::redo(&self.rules, &self.current)?;
        Ok(())
    }

    pub fn get_best_move(&mut self) -> Result<Move, EngineError> {
        let result = self.searcher.search(&self.rules, &self.current)?;
        self.last_score = Some(result.stats.score);
        let best = result.best_move().ok_or(SearchError::NoAvailableMoves)?;
        debug!("engine chose {} (score {})", best, result.stats.score);
        Ok(best)
    }

    pub fn make_best_move(&mut self) -> Result<Move, EngineError> {
        let best = self.get_best_move()?;
        self.make_move(best)
    }

    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn get_search_stats(&self) -> Option<&SearchStats> {
        self.searcher.last_stats()
    }

    pub fn search_config(&self) -> &SearchConfig {
        self.searcher.config()
    }
}
