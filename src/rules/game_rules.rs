//! Facts about a whole game state: whose turn it is, which phase applies,
//! and whether the game is won or drawn.

use crate::board::color::Color;
use crate::game::config::Phase;
use crate::game::state::GameState;
use crate::move_generator;

use super::{fact_keys, FactTable, MoveFact, RuleResult, RuleSet};

fact_keys! {
    pub enum GameFact {
        IsFirstMove => "isFirstMove",
        IsSecondMove => "isSecondMove",
        IsTurnWhite => "isTurnWhite",
        IsTurnBlack => "isTurnBlack",
        IsLaskerPhase => "isLaskerPhase",
        IsPlacingPhase => "isPlacingPhase",
        IsMovingPhase => "isMovingPhase",
        IsFlyingPhase => "isFlyingPhase",
        IsRemoveMode => "isRemoveMode",
        IsMillMadeWhite => "isMillMadeWhite",
        IsMillMadeBlack => "isMillMadeBlack",
        IsDrawPositionRepeatLimit => "isDrawPositionRepeatLimit",
        IsDrawNoMillsLimit => "isDrawNoMillsLimit",
        IsDraw => "isDraw",
        IsNoValidMoveWhite => "isNoValidMoveWhite",
        IsNoValidMoveBlack => "isNoValidMoveBlack",
        IsTooFewPiecesWhite => "isTooFewPiecesWhite",
        IsTooFewPiecesBlack => "isTooFewPiecesBlack",
        IsWinWhite => "isWinWhite",
        IsWinBlack => "isWinBlack",
        IsWin => "isWin",
        IsGameOver => "isGameOver",
    }
}

pub type GameFacts = FactTable<GameFact>;
pub type GameRule = fn(&GameState, &GameFacts) -> RuleResult;
pub type GameRuleSet = RuleSet<GameFact, GameRule>;

fn turn(facts: &GameFacts) -> Color {
    if facts.get(GameFact::IsTurnWhite) {
        Color::White
    } else {
        Color::Black
    }
}

fn phase(state: &GameState, facts: &GameFacts) -> Phase {
    state.phase_of(turn(facts))
}

fn last_move_made(state: &GameState, key: MoveFact) -> bool {
    state.last_move_facts().map_or(false, |facts| facts.get(key))
}

fn is_first_move(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(state.history().is_empty())
}

fn is_second_move(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(state.history().len() == 1)
}

fn is_turn_white(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(state.turn() == Color::White)
}

fn is_turn_black(_: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(!facts.get(GameFact::IsTurnWhite))
}

fn is_lasker_phase(state: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(phase(state, facts) == Phase::Lasker)
}

fn is_placing_phase(state: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(phase(state, facts) == Phase::Placing)
}

fn is_moving_phase(state: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(phase(state, facts) == Phase::Moving)
}

fn is_flying_phase(state: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(phase(state, facts) == Phase::Flying)
}

fn is_remove_mode(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(state.is_remove_mode())
}

fn is_mill_made_white(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(last_move_made(state, MoveFact::MoveMakesMillWhite))
}

fn is_mill_made_black(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(last_move_made(state, MoveFact::MoveMakesMillBlack))
}

fn is_draw_position_repeat_limit(state: &GameState, _: &GameFacts) -> RuleResult {
    let limit = state.config().num_position_repeats_for_draw;
    Ok(limit > 0 && state.positions().current_position_count() >= limit as u32)
}

fn is_draw_no_mills_limit(state: &GameState, _: &GameFacts) -> RuleResult {
    let limit = state.config().num_moves_without_mill_for_draw;
    Ok(limit > 0 && state.moves_since_mill() >= limit)
}

fn is_draw(_: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(facts.get(GameFact::IsDrawPositionRepeatLimit) || facts.get(GameFact::IsDrawNoMillsLimit))
}

fn is_no_valid_move_white(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(move_generator::count_moves(state, Color::White) == 0)
}

fn is_no_valid_move_black(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(move_generator::count_moves(state, Color::Black) == 0)
}

fn too_few_pieces(state: &GameState, color: Color) -> bool {
    state.remaining(color) < state.config().min_pieces_to_play as usize
}

fn is_too_few_pieces_white(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(too_few_pieces(state, Color::White))
}

fn is_too_few_pieces_black(state: &GameState, _: &GameFacts) -> RuleResult {
    Ok(too_few_pieces(state, Color::Black))
}

fn is_win_white(state: &GameState, facts: &GameFacts) -> RuleResult {
    Ok((facts.get(GameFact::IsMillMadeWhite) && state.config().first_mill_wins())
        || facts.get(GameFact::IsTooFewPiecesBlack)
        || (facts.get(GameFact::IsTurnBlack) && facts.get(GameFact::IsNoValidMoveBlack)))
}

fn is_win_black(state: &GameState, facts: &GameFacts) -> RuleResult {
    Ok((facts.get(GameFact::IsMillMadeBlack) && state.config().first_mill_wins())
        || facts.get(GameFact::IsTooFewPiecesWhite)
        || (facts.get(GameFact::IsTurnWhite) && facts.get(GameFact::IsNoValidMoveWhite)))
}

fn is_win(_: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(facts.get(GameFact::IsWinWhite) || facts.get(GameFact::IsWinBlack))
}

fn is_game_over(_: &GameState, facts: &GameFacts) -> RuleResult {
    Ok(facts.get(GameFact::IsWin) || facts.get(GameFact::IsDraw))
}

pub fn rule_set() -> GameRuleSet {
    use GameFact::*;

    GameRuleSet::new()
        .add_rule(IsFirstMove, is_first_move, "no move played yet")
        .add_rule(IsSecondMove, is_second_move, "exactly one move played")
        .add_rule(IsTurnWhite, is_turn_white, "white to move")
        .add_rule(IsTurnBlack, is_turn_black, "black to move")
        .add_rule(IsLaskerPhase, is_lasker_phase, "side to move may place or move")
        .add_rule(IsPlacingPhase, is_placing_phase, "side to move places")
        .add_rule(IsMovingPhase, is_moving_phase, "side to move slides")
        .add_rule(IsFlyingPhase, is_flying_phase, "side to move flies")
        .add_rule(IsRemoveMode, is_remove_mode, "side to move must capture")
        .add_rule(IsMillMadeWhite, is_mill_made_white, "the last move closed a white mill")
        .add_rule(IsMillMadeBlack, is_mill_made_black, "the last move closed a black mill")
        .add_rule(
            IsDrawPositionRepeatLimit,
            is_draw_position_repeat_limit,
            "the position has repeated too often",
        )
        .add_rule(
            IsDrawNoMillsLimit,
            is_draw_no_mills_limit,
            "too many moves without a mill",
        )
        .add_rule(IsDraw, is_draw, "any draw rule applies")
        .add_rule(IsNoValidMoveWhite, is_no_valid_move_white, "white has no legal move")
        .add_rule(IsNoValidMoveBlack, is_no_valid_move_black, "black has no legal move")
        .add_rule(IsTooFewPiecesWhite, is_too_few_pieces_white, "white cannot form a mill")
        .add_rule(IsTooFewPiecesBlack, is_too_few_pieces_black, "black cannot form a mill")
        .add_rule(IsWinWhite, is_win_white, "white has won")
        .add_rule(IsWinBlack, is_win_black, "black has won")
        .add_rule(IsWin, is_win, "either side has won")
        .add_rule(IsGameOver, is_game_over, "the game is won or drawn")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::coord;
    use crate::game::config::Variant;
    use crate::rules::FactKey;

    #[test]
    fn test_rule_order_matches_declaration() {
        let keys: Vec<GameFact> = rule_set().keys().collect();
        assert_eq!(keys, GameFact::ALL);
    }

    #[test]
    fn test_starting_facts() {
        let state = GameState::new(Arc::new(Variant::NineMensMorris.config()));
        let facts = rule_set().evaluate(&state).unwrap();
        let true_facts: Vec<GameFact> = facts.true_facts().collect();
        assert_eq!(
            true_facts,
            vec![GameFact::IsFirstMove, GameFact::IsTurnWhite, GameFact::IsPlacingPhase]
        );
    }

    #[test]
    fn test_too_few_pieces_loses() {
        let state = GameState::setup(
            Arc::new(Variant::NineMensMorris.config()),
            &[coord!("a1"), coord!("d1"), coord!("g4")],
            &[coord!("a7"), coord!("g7")],
            [0, 0],
            Color::White,
        )
        .unwrap();
        let facts = rule_set().evaluate(&state).unwrap();
        assert!(facts.get(GameFact::IsTooFewPiecesBlack));
        assert!(facts.get(GameFact::IsWinWhite));
        assert!(facts.get(GameFact::IsGameOver));
        assert!(facts.get(GameFact::IsFlyingPhase));
    }

    #[test]
    fn test_blocked_side_to_move_loses() {
        // every black piece is boxed in by white
        let state = GameState::setup(
            Arc::new(Variant::SixMensMorris.config()),
            &[coord!("c1"), coord!("a3"), coord!("e3"), coord!("c5")],
            &[coord!("a1"), coord!("e1"), coord!("a5")],
            [0, 0],
            Color::Black,
        )
        .unwrap();
        let facts = rule_set().evaluate(&state).unwrap();
        assert!(facts.get(GameFact::IsTurnBlack));
        assert!(facts.get(GameFact::IsMovingPhase));
        assert!(facts.get(GameFact::IsNoValidMoveBlack));
        assert!(!facts.get(GameFact::IsNoValidMoveWhite));
        assert!(!facts.get(GameFact::IsTooFewPiecesBlack));
        assert!(facts.get(GameFact::IsWinWhite));
        assert!(!facts.get(GameFact::IsWinBlack));
    }

    #[test]
    fn test_starting_turn_from_setup() {
        let state = GameState::setup(
            Arc::new(Variant::ThreeMensMorris.config()),
            &[coord!("a1")],
            &[],
            [2, 3],
            Color::Black,
        )
        .unwrap();
        let facts = rule_set().evaluate(&state).unwrap();
        assert!(facts.get(GameFact::IsTurnBlack));
        assert!(facts.get(GameFact::IsPlacingPhase));
        assert!(!facts.get(GameFact::IsGameOver));
    }
}
