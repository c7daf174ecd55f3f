use crate::board::color::Color;
use crate::game::tick::GameTick;
use crate::move_generator::count_moves;

/// Multipliers for the terms of the leaf heuristic. Each term is a
/// difference between the maximizing and the minimizing color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EvaluationWeights {
    pub win: i32,
    pub move_count: i32,
    pub mill_count: i32,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            win: 100,
            move_count: 0,
            mill_count: 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEnding {
    Win(Color),
    Draw,
}

/// How the game in `tick` ended, if it did.
pub fn game_ending(tick: &GameTick) -> Option<GameEnding> {
    if !tick.is_game_over() {
        return None;
    }
    Some(match tick.winner() {
        Some(color) => GameEnding::Win(color),
        None => GameEnding::Draw,
    })
}

/// Returns the score of `tick` from the perspective of `max_color`.
pub fn score(tick: &GameTick, max_color: Color, weights: &EvaluationWeights) -> i32 {
    let min_color = max_color.opposite();
    let mut score = match game_ending(tick) {
        Some(GameEnding::Win(color)) if color == max_color => weights.win,
        Some(GameEnding::Win(_)) => -weights.win,
        _ => 0,
    };

    // the remaining terms cost a board walk each; skip them when unweighted
    if weights.move_count != 0 {
        let state = tick.game();
        let mobility = count_moves(state, max_color) as i32 - count_moves(state, min_color) as i32;
        score += weights.move_count * mobility;
    }
    if weights.mill_count != 0 {
        let board = tick.game().board();
        let mills = board.count_mills(max_color) as i32 - board.count_mills(min_color) as i32;
        score += weights.mill_count * mills;
    }
    score
}
