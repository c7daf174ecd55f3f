//! Legal move enumeration.
//!
//! Enumeration follows the side's phase: placements onto empty points,
//! slides along links, flights to any empty point, or (during a capture
//! sub-turn) removals of opposing pieces. Points are visited in topology
//! order, so the result is deterministic. `count_moves` walks the same
//! enumeration without collecting it.

use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::coord::Coord;
use crate::game::config::Phase;
use crate::game::state::GameState;
use crate::moves::{Move, MoveList};

/// All legal moves for `color` in `state`.
pub fn generate_moves(state: &GameState, color: Color) -> MoveList {
    let mut moves = SmallVec::new();
    for_each_move(state, color, |mv| moves.push(mv));
    moves
}

/// Number of legal moves for `color`; always equal to
/// `generate_moves(state, color).len()`.
pub fn count_moves(state: &GameState, color: Color) -> usize {
    let mut count = 0;
    for_each_move(state, color, |_| count += 1);
    count
}

fn for_each_move<F: FnMut(Move)>(state: &GameState, color: Color, mut emit: F) {
    let board = state.board();
    let topology = board.topology();

    if color == state.turn() && state.is_remove_mode() {
        for point in board.points_of(color.opposite()) {
            emit(Move::remove(topology.coord(point)));
        }
        return;
    }

    let config = state.config();
    let first = state.history().is_empty();
    let second = state.history().len() == 1;
    let is_forbidden = |to: Coord, placing: bool| {
        (first && config.forbidden_on_first_move.contains(&to))
            || (second && config.forbidden_on_second_move.contains(&to))
            || (placing && config.forbidden_in_placing_phase.contains(&to))
    };

    let placements = |emit: &mut F| {
        for point in board.empty_points() {
            let to = topology.coord(point);
            if !is_forbidden(to, true) {
                emit(Move::place(color, to));
            }
        }
    };
    let slides = |emit: &mut F, flying: bool| {
        for from_point in board.points_of(color) {
            let from = topology.coord(from_point);
            if flying {
                for to_point in board.empty_points() {
                    let to = topology.coord(to_point);
                    if !is_forbidden(to, false) {
                        emit(Move::slide(from, to));
                    }
                }
            } else {
                for &to_point in topology.neighbours(from_point) {
                    let to = topology.coord(to_point);
                    if board.get_index(to_point).is_none() && !is_forbidden(to, false) {
                        emit(Move::slide(from, to));
                    }
                }
            }
        }
    };

    match state.phase_of(color) {
        Phase::Placing => placements(&mut emit),
        Phase::Moving => slides(&mut emit, false),
        Phase::Flying => slides(&mut emit, true),
        Phase::Lasker => {
            placements(&mut emit);
            slides(&mut emit, false);
        }
    }
}
