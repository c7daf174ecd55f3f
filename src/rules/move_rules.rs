//! Facts about a candidate move, evaluated against the tick it would be
//! played on.

use crate::board::color::Color;
use crate::board::coord::Coord;
use crate::board::error::BoardError;
use crate::game::config::Phase;
use crate::game::state::GameState;
use crate::game::tick::GameTick;
use crate::moves::{Move, MoveKind};

use super::{fact_keys, FactTable, GameFact, RuleResult, RuleSet};

fact_keys! {
    pub enum MoveFact {
        MoveIsCorrectColor => "moveIsCorrectColor",
        MoveIsCorrectType => "moveIsCorrectType",
        MoveIsForbiddenOnFirstMove => "moveIsForbiddenOnFirstMove",
        MoveIsForbiddenOnSecondMove => "moveIsForbiddenOnSecondMove",
        MoveIsForbiddenInPlacingPhase => "moveIsForbiddenInPlacingPhase",
        MoveIsForbidden => "moveIsForbidden",
        MoveIsPossiblePlace => "moveIsPossiblePlace",
        MoveIsPossibleMove => "moveIsPossibleMove",
        MoveIsPossibleRemove => "moveIsPossibleRemove",
        MoveIsPossible => "moveIsPossible",
        MoveIsValid => "moveIsValid",
        MoveMakesMillWhite => "moveMakesMillWhite",
        MoveMakesMillBlack => "moveMakesMillBlack",
        MoveMakesMill => "moveMakesMill",
        /// The mover captures next instead of passing the turn.
        MoveMakesRemoveMode => "moveMakesRemoveMode",
        MoveMakesNextTurnWhite => "moveMakesNextTurnWhite",
        MoveMakesNextTurnBlack => "moveMakesNextTurnBlack",
        /// Phase of the color moving next, once the move is applied.
        MoveMakesLaskerPhase => "moveMakesLaskerPhase",
        MoveMakesPlacingPhase => "moveMakesPlacingPhase",
        MoveMakesMovingPhase => "moveMakesMovingPhase",
        MoveMakesFlyingPhase => "moveMakesFlyingPhase",
    }
}

pub type MoveFacts = FactTable<MoveFact>;
pub type MoveRule = fn(&MoveContext<'_>, &MoveFacts) -> RuleResult;
pub type MoveRuleSet = RuleSet<MoveFact, MoveRule>;

/// A candidate move and the tick it is judged against.
pub struct MoveContext<'a> {
    pub tick: &'a GameTick,
    pub candidate: &'a Move,
}

impl<'a> MoveContext<'a> {
    pub fn new(tick: &'a GameTick, candidate: &'a Move) -> Self {
        Self { tick, candidate }
    }

    fn state(&self) -> &GameState {
        self.tick.game()
    }

    fn game_fact(&self, key: GameFact) -> bool {
        self.tick.facts().get(key)
    }

    fn turn(&self) -> Color {
        if self.game_fact(GameFact::IsTurnWhite) {
            Color::White
        } else {
            Color::Black
        }
    }

    /// The color making the move. A removal is made by the opponent of the
    /// piece being removed.
    fn mover(&self) -> Result<Option<Color>, BoardError> {
        let board = self.state().board();
        Ok(match *self.candidate {
            Move::Place { color, .. } => Some(color),
            Move::Move { from, .. } => board.color_at(from)?,
            Move::Remove { from } => board.color_at(from)?.map(|color| color.opposite()),
        })
    }

    fn target_in(&self, forbidden: &[Coord]) -> bool {
        self.candidate.to().map_or(false, |to| forbidden.contains(&to))
    }

    /// Pieces `color` holds in hand and on the board once the move is made.
    fn counts_after(&self, color: Color) -> Result<(usize, usize), BoardError> {
        let state = self.state();
        let mut unplaced = state.unplaced(color);
        let mut on_board = state.on_board(color);
        match *self.candidate {
            Move::Place { color: placed, .. } if placed == color => {
                unplaced = unplaced.saturating_sub(1);
                on_board += 1;
            }
            Move::Remove { from } => {
                if state.board().color_at(from)? == Some(color) {
                    on_board = on_board.saturating_sub(1);
                }
            }
            _ => {}
        }
        Ok((unplaced, on_board))
    }

    fn mill_for(&self, color: Color) -> RuleResult {
        let board = self.state().board();
        match *self.candidate {
            Move::Place { color: placed, to } => {
                Ok(placed == color && board.would_form_mill(to, color, None)?)
            }
            Move::Move { from, to } => Ok(board.color_at(from)? == Some(color)
                && board.would_form_mill(to, color, Some(from))?),
            Move::Remove { .. } => Ok(false),
        }
    }

    fn next_phase(&self, facts: &MoveFacts) -> Result<Phase, BoardError> {
        let next = if facts.get(MoveFact::MoveMakesNextTurnWhite) {
            Color::White
        } else {
            Color::Black
        };
        let (unplaced, on_board) = self.counts_after(next)?;
        Ok(self.state().config().phase_for(unplaced, on_board))
    }
}

fn is_correct_color(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    Ok(ctx.mover()? == Some(ctx.turn()))
}

fn is_correct_type(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    let kind = ctx.candidate.kind();
    if ctx.game_fact(GameFact::IsRemoveMode) {
        return Ok(kind == MoveKind::Remove);
    }
    let lasker = ctx.game_fact(GameFact::IsLaskerPhase);
    Ok(match kind {
        MoveKind::Place => lasker || ctx.game_fact(GameFact::IsPlacingPhase),
        MoveKind::Move => {
            lasker
                || ctx.game_fact(GameFact::IsMovingPhase)
                || ctx.game_fact(GameFact::IsFlyingPhase)
        }
        MoveKind::Remove => false,
    })
}

fn is_forbidden_on_first_move(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    Ok(ctx.game_fact(GameFact::IsFirstMove)
        && ctx.target_in(&ctx.state().config().forbidden_on_first_move))
}

fn is_forbidden_on_second_move(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    Ok(ctx.game_fact(GameFact::IsSecondMove)
        && ctx.target_in(&ctx.state().config().forbidden_on_second_move))
}

fn is_forbidden_in_placing_phase(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    Ok(ctx.candidate.kind() == MoveKind::Place
        && ctx.target_in(&ctx.state().config().forbidden_in_placing_phase))
}

fn is_forbidden(_: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(facts.get(MoveFact::MoveIsForbiddenOnFirstMove)
        || facts.get(MoveFact::MoveIsForbiddenOnSecondMove)
        || facts.get(MoveFact::MoveIsForbiddenInPlacingPhase))
}

fn is_possible_place(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    match *ctx.candidate {
        Move::Place { to, .. } => ctx.state().board().is_empty(to),
        _ => Ok(false),
    }
}

fn is_possible_move(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    let (from, to) = match *ctx.candidate {
        Move::Move { from, to } => (from, to),
        _ => return Ok(false),
    };
    let state = ctx.state();
    let board = state.board();
    let owner = match board.color_at(from)? {
        Some(owner) => owner,
        None => return Ok(false),
    };
    if !board.is_empty(to)? {
        return Ok(false);
    }
    Ok(state.phase_of(owner) == Phase::Flying || board.is_adjacent(from, to)?)
}

fn is_possible_remove(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    match *ctx.candidate {
        Move::Remove { from } => {
            Ok(ctx.state().board().color_at(from)? == Some(ctx.turn().opposite()))
        }
        _ => Ok(false),
    }
}

fn is_possible(_: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(!facts.get(MoveFact::MoveIsForbidden)
        && (facts.get(MoveFact::MoveIsPossiblePlace)
            || facts.get(MoveFact::MoveIsPossibleMove)
            || facts.get(MoveFact::MoveIsPossibleRemove)))
}

fn is_valid(_: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(facts.get(MoveFact::MoveIsCorrectColor)
        && facts.get(MoveFact::MoveIsCorrectType)
        && facts.get(MoveFact::MoveIsPossible))
}

fn makes_mill_white(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    ctx.mill_for(Color::White)
}

fn makes_mill_black(ctx: &MoveContext<'_>, _: &MoveFacts) -> RuleResult {
    ctx.mill_for(Color::Black)
}

fn makes_mill(_: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(facts.get(MoveFact::MoveMakesMillWhite) || facts.get(MoveFact::MoveMakesMillBlack))
}

fn makes_remove_mode(ctx: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    if !facts.get(MoveFact::MoveMakesMill) || ctx.state().config().first_mill_wins() {
        return Ok(false);
    }
    // nothing to capture means no capture sub-turn
    let (_, opponent_on_board) = ctx.counts_after(ctx.turn().opposite())?;
    Ok(opponent_on_board > 0)
}

fn makes_next_turn_white(ctx: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    let next = if facts.get(MoveFact::MoveMakesRemoveMode) {
        ctx.turn()
    } else {
        ctx.turn().opposite()
    };
    Ok(next == Color::White)
}

fn makes_next_turn_black(_: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(!facts.get(MoveFact::MoveMakesNextTurnWhite))
}

fn makes_lasker_phase(ctx: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(ctx.next_phase(facts)? == Phase::Lasker)
}

fn makes_placing_phase(ctx: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(ctx.next_phase(facts)? == Phase::Placing)
}

fn makes_moving_phase(ctx: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(ctx.next_phase(facts)? == Phase::Moving)
}

fn makes_flying_phase(ctx: &MoveContext<'_>, facts: &MoveFacts) -> RuleResult {
    Ok(ctx.next_phase(facts)? == Phase::Flying)
}

pub fn rule_set() -> MoveRuleSet {
    use MoveFact::*;

    MoveRuleSet::new()
        .add_rule(MoveIsCorrectColor, is_correct_color, "the piece belongs to the side to move")
        .add_rule(MoveIsCorrectType, is_correct_type, "the kind of move fits the phase")
        .add_rule(
            MoveIsForbiddenOnFirstMove,
            is_forbidden_on_first_move,
            "target is closed on the first move",
        )
        .add_rule(
            MoveIsForbiddenOnSecondMove,
            is_forbidden_on_second_move,
            "target is closed on the second move",
        )
        .add_rule(
            MoveIsForbiddenInPlacingPhase,
            is_forbidden_in_placing_phase,
            "target is closed to placements",
        )
        .add_rule(MoveIsForbidden, is_forbidden, "any forbidden-point rule applies")
        .add_rule(MoveIsPossiblePlace, is_possible_place, "placement on an empty point")
        .add_rule(
            MoveIsPossibleMove,
            is_possible_move,
            "own piece to an empty point, adjacent unless flying",
        )
        .add_rule(MoveIsPossibleRemove, is_possible_remove, "target holds an opponent piece")
        .add_rule(MoveIsPossible, is_possible, "not forbidden and physically possible")
        .add_rule(MoveIsValid, is_valid, "right color, right kind, possible")
        .add_rule(MoveMakesMillWhite, makes_mill_white, "white completes a line")
        .add_rule(MoveMakesMillBlack, makes_mill_black, "black completes a line")
        .add_rule(MoveMakesMill, makes_mill, "either color completes a line")
        .add_rule(
            MoveMakesRemoveMode,
            makes_remove_mode,
            "a mill opens a capture unless mills win outright",
        )
        .add_rule(MoveMakesNextTurnWhite, makes_next_turn_white, "white moves next")
        .add_rule(MoveMakesNextTurnBlack, makes_next_turn_black, "black moves next")
        .add_rule(MoveMakesLaskerPhase, makes_lasker_phase, "next mover may place or move")
        .add_rule(MoveMakesPlacingPhase, makes_placing_phase, "next mover places")
        .add_rule(MoveMakesMovingPhase, makes_moving_phase, "next mover slides")
        .add_rule(MoveMakesFlyingPhase, makes_flying_phase, "next mover flies")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;
    use crate::game::config::Variant;
    use crate::game::tick::{tick, GameTick};
    use crate::rules::{FactKey, Rules};

    fn play(rules: &Rules, variant: Variant, moves: &[Move]) -> GameTick {
        let start = GameTick::start(rules, variant.config().into()).unwrap();
        moves
            .iter()
            .fold(start, |current, mv| tick(rules, &current, mv).unwrap())
    }

    #[test]
    fn test_rule_order_matches_declaration() {
        let keys: Vec<MoveFact> = rule_set().keys().collect();
        assert_eq!(keys, MoveFact::ALL);
    }

    #[test]
    fn test_first_placement_facts() {
        let rules = Rules::default();
        let start = play(&rules, Variant::NineMensMorris, &[]);
        let mv = Move::place(Color::White, coord!("a1"));
        let facts = rules.evaluate_move(&start, &mv).unwrap();

        assert!(facts.get(MoveFact::MoveIsValid));
        assert!(!facts.get(MoveFact::MoveMakesMill));
        assert!(facts.get(MoveFact::MoveMakesNextTurnBlack));
        assert!(facts.get(MoveFact::MoveMakesPlacingPhase));
    }

    #[test]
    fn test_wrong_color_and_occupied_point() {
        let rules = Rules::default();
        let current = play(
            &rules,
            Variant::NineMensMorris,
            &[Move::place(Color::White, coord!("a1"))],
        );

        let facts = rules
            .evaluate_move(&current, &Move::place(Color::White, coord!("d1")))
            .unwrap();
        assert!(!facts.get(MoveFact::MoveIsCorrectColor));
        assert!(!facts.get(MoveFact::MoveIsValid));

        let facts = rules
            .evaluate_move(&current, &Move::place(Color::Black, coord!("a1")))
            .unwrap();
        assert!(facts.get(MoveFact::MoveIsCorrectColor));
        assert!(!facts.get(MoveFact::MoveIsPossiblePlace));
        assert!(!facts.get(MoveFact::MoveIsValid));
    }

    #[test]
    fn test_slide_not_allowed_while_placing() {
        let rules = Rules::default();
        let current = play(
            &rules,
            Variant::NineMensMorris,
            &[
                Move::place(Color::White, coord!("a1")),
                Move::place(Color::Black, coord!("g7")),
            ],
        );
        let facts = rules
            .evaluate_move(&current, &Move::slide(coord!("a1"), coord!("d1")))
            .unwrap();
        assert!(facts.get(MoveFact::MoveIsCorrectColor));
        assert!(!facts.get(MoveFact::MoveIsCorrectType));
        assert!(facts.get(MoveFact::MoveIsPossibleMove));
    }

    #[test]
    fn test_mill_opens_remove_mode() {
        let rules = Rules::default();
        let current = play(
            &rules,
            Variant::NineMensMorris,
            &[
                Move::place(Color::White, coord!("a1")),
                Move::place(Color::Black, coord!("b2")),
                Move::place(Color::White, coord!("d1")),
                Move::place(Color::Black, coord!("d2")),
            ],
        );
        let facts = rules
            .evaluate_move(&current, &Move::place(Color::White, coord!("g1")))
            .unwrap();
        assert!(facts.get(MoveFact::MoveMakesMillWhite));
        assert!(!facts.get(MoveFact::MoveMakesMillBlack));
        assert!(facts.get(MoveFact::MoveMakesRemoveMode));
        assert!(facts.get(MoveFact::MoveMakesNextTurnWhite));
    }

    #[test]
    fn test_removal_is_made_by_the_other_color() {
        let rules = Rules::default();
        let current = play(
            &rules,
            Variant::NineMensMorris,
            &[
                Move::place(Color::White, coord!("a1")),
                Move::place(Color::Black, coord!("b2")),
                Move::place(Color::White, coord!("d1")),
                Move::place(Color::Black, coord!("d2")),
                Move::place(Color::White, coord!("g1")),
            ],
        );

        let facts = rules
            .evaluate_move(&current, &Move::remove(coord!("b2")))
            .unwrap();
        assert!(facts.get(MoveFact::MoveIsCorrectColor));
        assert!(facts.get(MoveFact::MoveIsPossibleRemove));
        assert!(facts.get(MoveFact::MoveIsValid));
        assert!(facts.get(MoveFact::MoveMakesNextTurnBlack));

        let facts = rules
            .evaluate_move(&current, &Move::remove(coord!("d1")))
            .unwrap();
        assert!(!facts.get(MoveFact::MoveIsCorrectColor));
        assert!(!facts.get(MoveFact::MoveIsPossibleRemove));

        let facts = rules
            .evaluate_move(&current, &Move::remove(coord!("g7")))
            .unwrap();
        assert!(!facts.get(MoveFact::MoveIsCorrectColor));
    }

    #[test]
    fn test_first_mill_wins_has_no_remove_mode() {
        let rules = Rules::default();
        let current = play(
            &rules,
            Variant::ThreeMensMorris,
            &[
                Move::place(Color::White, coord!("a1")),
                Move::place(Color::Black, coord!("a2")),
                Move::place(Color::White, coord!("b1")),
                Move::place(Color::Black, coord!("b2")),
            ],
        );
        let facts = rules
            .evaluate_move(&current, &Move::place(Color::White, coord!("c1")))
            .unwrap();
        assert!(facts.get(MoveFact::MoveMakesMill));
        assert!(!facts.get(MoveFact::MoveMakesRemoveMode));
        assert!(facts.get(MoveFact::MoveMakesNextTurnBlack));
    }

    #[test]
    fn test_forbidden_points() {
        let rules = Rules::default();
        let three = play(&rules, Variant::ThreeMensMorris, &[]);
        let facts = rules
            .evaluate_move(&three, &Move::place(Color::White, coord!("b2")))
            .unwrap();
        assert!(facts.get(MoveFact::MoveIsForbiddenOnFirstMove));
        assert!(facts.get(MoveFact::MoveIsPossiblePlace));
        assert!(!facts.get(MoveFact::MoveIsPossible));

        let picaria = play(&rules, Variant::Picaria, &[]);
        let facts = rules
            .evaluate_move(&picaria, &Move::place(Color::White, coord!("c3")))
            .unwrap();
        assert!(facts.get(MoveFact::MoveIsForbiddenInPlacingPhase));
        assert!(!facts.get(MoveFact::MoveIsValid));
    }

    #[test]
    fn test_unknown_point_fails_evaluation() {
        let rules = Rules::default();
        let three = play(&rules, Variant::ThreeMensMorris, &[]);
        let result = rules.evaluate_move(&three, &Move::place(Color::White, coord!("d4")));
        assert_eq!(
            result.map(|_| ()),
            Err(BoardError::UnknownPoint { coord: coord!("d4") })
        );
    }
}
