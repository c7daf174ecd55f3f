use std::sync::Arc;

use log::trace;

use crate::board::color::Color;
use crate::board::coord::Coord;
use crate::board::error::BoardError;
use crate::board::piece::{Piece, PiecePool};
use crate::board::Board;
use crate::moves::Move;
use crate::rules::{MoveFact, MoveFacts};

use super::config::{GameConfig, Phase};
use super::history::{HistoryEntry, MoveHistory};
use super::position_info::PositionInfo;

/// The complete state of one game: board, piece pools, counters and history.
///
/// A `GameState` knows how to apply and revert a move that the rules have
/// already accepted; it never judges legality itself.
#[derive(Clone, PartialEq, Debug)]
pub struct GameState {
    config: Arc<GameConfig>,
    board: Board,
    pools: [PiecePool; 2],
    moves_since_mill: u32,
    positions: PositionInfo,
    history: MoveHistory,
    starting_turn: Color,
}

impl GameState {
    /// Empty board, full pools, white to move.
    pub fn new(config: Arc<GameConfig>) -> Self {
        let board = Board::new(Arc::clone(&config.topology));
        let pieces = config.num_morris_per_player;
        Self {
            positions: PositionInfo::new(board.hash()),
            pools: [
                PiecePool::new(Color::White, pieces),
                PiecePool::new(Color::Black, pieces),
            ],
            board,
            config,
            moves_since_mill: 0,
            history: MoveHistory::new(),
            starting_turn: Color::White,
        }
    }

    /// A mid-game position. Each color holds `unplaced[color]` pieces in
    /// hand; the rest of its set that is not on the board counts as captured.
    pub fn setup(
        config: Arc<GameConfig>,
        white: &[Coord],
        black: &[Coord],
        unplaced: [u8; 2],
        to_move: Color,
    ) -> Result<Self, BoardError> {
        let mut state = Self::new(config);
        for (color, coords) in [(Color::White, white), (Color::Black, black)] {
            let pool = &mut state.pools[color.index()];
            for &coord in coords {
                let piece = pool
                    .take_unplaced()
                    .ok_or(BoardError::NoUnplacedPieces { color })?;
                state.board.put(coord, piece)?;
            }
            while pool.unplaced_count() > unplaced[color.index()] as usize {
                pool.discard_unplaced();
            }
        }
        state.positions = PositionInfo::new(state.board.hash());
        state.starting_turn = to_move;
        Ok(state)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn shared_config(&self) -> Arc<GameConfig> {
        Arc::clone(&self.config)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pool(&self, color: Color) -> &PiecePool {
        &self.pools[color.index()]
    }

    pub fn moves_since_mill(&self) -> u32 {
        self.moves_since_mill
    }

    pub fn positions(&self) -> &PositionInfo {
        &self.positions
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    /// Facts of the latest applied move, if any.
    pub fn last_move_facts(&self) -> Option<&MoveFacts> {
        self.history.last().map(|entry| &entry.facts)
    }

    /// Color whose turn it is. Only a capture sub-turn keeps the mover.
    pub fn turn(&self) -> Color {
        match self.last_move_facts() {
            Some(facts) if facts.get(MoveFact::MoveMakesNextTurnWhite) => Color::White,
            Some(_) => Color::Black,
            None => self.starting_turn,
        }
    }

    /// Is the side to move in the middle of a capture sub-turn?
    pub fn is_remove_mode(&self) -> bool {
        self.last_move_facts()
            .map_or(false, |facts| facts.get(MoveFact::MoveMakesRemoveMode))
    }

    pub fn unplaced(&self, color: Color) -> usize {
        self.pool(color).unplaced_count()
    }

    pub fn on_board(&self, color: Color) -> usize {
        self.board.count(color)
    }

    /// Pieces `color` can still play with, in hand or on the board.
    pub fn remaining(&self, color: Color) -> usize {
        self.unplaced(color) + self.on_board(color)
    }

    pub fn phase_of(&self, color: Color) -> Phase {
        self.config
            .phase_for(self.unplaced(color), self.on_board(color))
    }

    /// Applies an accepted move. `facts` are the move facts it was
    /// accepted with.
    pub(crate) fn apply(&mut self, mv: Move, facts: MoveFacts) -> Result<(), BoardError> {
        match mv {
            Move::Place { color, to } => {
                if !self.board.is_empty(to)? {
                    return Err(BoardError::PointOccupied { coord: to });
                }
                let piece = self.pools[color.index()]
                    .take_unplaced()
                    .ok_or(BoardError::NoUnplacedPieces { color })?;
                self.board.put(to, piece)?;
            }
            Move::Move { from, to } => {
                self.board.relocate(from, to)?;
            }
            Move::Remove { from } => {
                let piece = self.board.take(from)?;
                self.pools[piece.color.index()].capture(piece);
            }
        }

        if facts.get(MoveFact::MoveMakesMill) {
            self.moves_since_mill = 0;
        } else {
            self.moves_since_mill += 1;
        }
        self.history.push(HistoryEntry { mv, facts });
        let seen = self.positions.push(self.board.hash());
        trace!("applied {}, position seen {} time(s)", mv, seen);
        Ok(())
    }

    /// Reverts the latest applied move and returns it, or `None` at the
    /// start of the game.
    pub(crate) fn revert(&mut self) -> Result<Option<HistoryEntry>, BoardError> {
        let entry = match self.history.rewind() {
            Some(entry) => entry,
            None => return Ok(None),
        };
        self.positions.pop();

        match entry.mv {
            Move::Place { to, .. } => {
                let piece = self.board.take(to)?;
                self.pools[piece.color.index()].return_unplaced(piece);
            }
            Move::Move { from, to } => {
                self.board.relocate(to, from)?;
            }
            Move::Remove { from } => {
                // the captured color is the one that moves next
                let captured = if entry.facts.get(MoveFact::MoveMakesNextTurnWhite) {
                    Color::White
                } else {
                    Color::Black
                };
                let piece: Piece = self.pools[captured.index()]
                    .restore_captured()
                    .ok_or(BoardError::NoCapturedPieces { color: captured })?;
                self.board.put(from, piece)?;
            }
        }

        self.moves_since_mill = self
            .history
            .applied()
            .iter()
            .rev()
            .take_while(|entry| !entry.facts.get(MoveFact::MoveMakesMill))
            .count() as u32;
        trace!("reverted {}", entry.mv);
        Ok(Some(entry))
    }
}
