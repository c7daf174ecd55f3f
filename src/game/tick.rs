use std::fmt;
use std::sync::Arc;

use log::{debug, error};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::coord::Coord;
use crate::board::error::BoardError;
use crate::moves::Move;
use crate::rules::{GameFact, GameFacts, MoveFact, MoveFacts, Rules};

use super::config::GameConfig;
use super::state::GameState;

/// Why a well-formed move was turned down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("wrong color")]
    WrongColor,
    #[error("wrong type of move for this phase")]
    WrongType,
    #[error("forbidden point")]
    ForbiddenPoint,
    #[error("impossible move")]
    Impossible,
    #[error("no point {coord} on this board")]
    UnknownPoint { coord: Coord },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    #[error("Invalid move: {reason}")]
    InvalidMove { reason: InvalidMoveReason },
    #[error("The game is over")]
    GameOver,
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Nothing to redo")]
    NothingToRedo,
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
}

impl From<BoardError> for TickError {
    fn from(error: BoardError) -> Self {
        TickError::BoardError { error }
    }
}

/// One observed step of a game: the state, the facts derived from it, the
/// ply counter and a status line for the player.
#[derive(Clone, PartialEq, Debug)]
pub struct GameTick {
    game: GameState,
    facts: GameFacts,
    tick_n: u32,
    message: String,
}

impl GameTick {
    /// The opening tick of a fresh game.
    pub fn start(rules: &Rules, config: Arc<GameConfig>) -> Result<Self, TickError> {
        Self::from_state(rules, GameState::new(config))
    }

    /// The opening tick for an arbitrary state, e.g. one built with
    /// `GameState::setup`.
    pub fn from_state(rules: &Rules, game: GameState) -> Result<Self, TickError> {
        Self::derive(rules, game, 0)
    }

    fn derive(rules: &Rules, game: GameState, tick_n: u32) -> Result<Self, TickError> {
        let facts = rules.evaluate_game(&game)?;
        let message = status_message(&game, &facts);
        Ok(Self {
            game,
            facts,
            tick_n,
            message,
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn facts(&self) -> &GameFacts {
        &self.facts
    }

    pub fn tick_n(&self) -> u32 {
        self.tick_n
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn turn(&self) -> Color {
        if self.facts.get(GameFact::IsTurnWhite) {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.facts.get(GameFact::IsGameOver)
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Color> {
        if self.facts.get(GameFact::IsWinWhite) {
            Some(Color::White)
        } else if self.facts.get(GameFact::IsWinBlack) {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.facts.get(GameFact::IsDraw)
    }
}

impl fmt::Display for GameTick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.game.board())?;
        write!(f, "{}", self.message)
    }
}

/// Plays `mv` on `current` and returns the next tick. `current` is left
/// untouched whether or not the move is accepted.
pub fn tick(rules: &Rules, current: &GameTick, mv: &Move) -> Result<GameTick, TickError> {
    if current.is_game_over() {
        return Err(TickError::GameOver);
    }

    let move_facts = match rules.evaluate_move(current, mv) {
        Ok(facts) => facts,
        Err(BoardError::UnknownPoint { coord }) => {
            debug!("rejected {}: unknown point {}", mv, coord);
            return Err(TickError::InvalidMove {
                reason: InvalidMoveReason::UnknownPoint { coord },
            });
        }
        Err(error) => return Err(error.into()),
    };
    if let Some(reason) = rejection(&move_facts) {
        debug!("rejected {}: {}", mv, reason);
        return Err(TickError::InvalidMove { reason });
    }

    let mut game = current.game.clone();
    if let Err(err) = game.apply(*mv, move_facts) {
        error!("accepted move {} could not be applied: {}", mv, err);
        return Err(err.into());
    }
    let next = GameTick::derive(rules, game, current.tick_n + 1)?;
    debug!("tick {}: {} played, {}", next.tick_n, mv, next.message);
    Ok(next)
}

/// Takes back the latest move. The facts and message are derived afresh for
/// the restored state.
pub fn undo(rules: &Rules, current: &GameTick) -> Result<GameTick, TickError> {
    let mut game = current.game.clone();
    let entry = match game.revert() {
        Ok(Some(entry)) => entry,
        Ok(None) => return Err(TickError::NothingToUndo),
        Err(err) => {
            error!("history of tick {} could not be reverted: {}", current.tick_n, err);
            return Err(err.into());
        }
    };
    let previous = GameTick::derive(rules, game, current.tick_n.saturating_sub(1))?;
    debug!("tick {}: {} taken back", previous.tick_n, entry.mv);
    Ok(previous)
}

/// Replays the most recently undone move through `tick`.
pub fn redo(rules: &Rules, current: &GameTick) -> Result<GameTick, TickError> {
    let mv = current
        .game
        .history()
        .next_redo()
        .map(|entry| entry.mv)
        .ok_or(TickError::NothingToRedo)?;
    tick(rules, current, &mv)
}

/// The first failing check, in the order color, type, forbidden point,
/// possibility.
fn rejection(facts: &MoveFacts) -> Option<InvalidMoveReason> {
    if facts.get(MoveFact::MoveIsValid) {
        None
    } else if !facts.get(MoveFact::MoveIsCorrectColor) {
        Some(InvalidMoveReason::WrongColor)
    } else if !facts.get(MoveFact::MoveIsCorrectType) {
        Some(InvalidMoveReason::WrongType)
    } else if facts.get(MoveFact::MoveIsForbidden) {
        Some(InvalidMoveReason::ForbiddenPoint)
    } else {
        Some(InvalidMoveReason::Impossible)
    }
}

fn status_message(game: &GameState, facts: &GameFacts) -> String {
    let turn = if facts.get(GameFact::IsTurnWhite) {
        Color::White
    } else {
        Color::Black
    };
    let opponent = turn.opposite();

    if facts.get(GameFact::IsGameOver) {
        return game_over_message(game, facts);
    }
    if facts.get(GameFact::IsLaskerPhase) {
        if facts.get(GameFact::IsRemoveMode) {
            return format!("{} formed a mill: remove a {} piece", turn, opponent);
        }
        return format!(
            "{} to place ({} left) or move a piece",
            turn,
            game.unplaced(turn)
        );
    }
    if facts.get(GameFact::IsRemoveMode) {
        return format!("{} formed a mill: remove a {} piece", turn, opponent);
    }
    if facts.get(GameFact::IsPlacingPhase) {
        return format!("{} to place a piece ({} left)", turn, game.unplaced(turn));
    }
    if facts.get(GameFact::IsFlyingPhase) {
        return format!("{} to fly a piece", turn);
    }
    format!("{} to move a piece", turn)
}

fn game_over_message(game: &GameState, facts: &GameFacts) -> String {
    for (winner, mill_made, loser_too_few) in [
        (
            Color::White,
            GameFact::IsMillMadeWhite,
            GameFact::IsTooFewPiecesBlack,
        ),
        (
            Color::Black,
            GameFact::IsMillMadeBlack,
            GameFact::IsTooFewPiecesWhite,
        ),
    ] {
        let won = match winner {
            Color::White => facts.get(GameFact::IsWinWhite),
            Color::Black => facts.get(GameFact::IsWinBlack),
        };
        if !won {
            continue;
        }
        let loser = winner.opposite();
        return if facts.get(mill_made) && game.config().first_mill_wins() {
            format!("{} wins with a mill", winner)
        } else if facts.get(loser_too_few) {
            format!("{} wins: {} has too few pieces", winner, loser)
        } else {
            format!("{} wins: {} cannot move", winner, loser)
        };
    }

    if facts.get(GameFact::IsDrawPositionRepeatLimit) {
        format!(
            "Draw: position repeated {} times",
            game.positions().current_position_count()
        )
    } else {
        format!("Draw: {} moves without a mill", game.moves_since_mill())
    }
}
