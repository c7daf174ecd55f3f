use std::sync::Arc;

use super::*;
use crate::board::variants;
use crate::coord;

fn nine_mens_board() -> Board {
    Board::new(Arc::new(variants::three_squares().unwrap()))
}

fn white(id: u8) -> Piece {
    Piece::new(Color::White, id)
}

fn black(id: u8) -> Piece {
    Piece::new(Color::Black, id)
}

#[test]
fn test_put_take_and_lookup() {
    let mut board = nine_mens_board();
    board.put(coord!("d2"), white(0)).unwrap();

    assert_eq!(board.get(coord!("d2")).unwrap(), Some(white(0)));
    assert_eq!(board.color_at(coord!("d2")).unwrap(), Some(Color::White));
    assert!(board.is_empty(coord!("d1")).unwrap());
    assert_eq!(
        board.put(coord!("d2"), black(0)),
        Err(BoardError::PointOccupied { coord: coord!("d2") })
    );

    assert_eq!(board.take(coord!("d2")).unwrap(), white(0));
    assert_eq!(
        board.take(coord!("d2")),
        Err(BoardError::PointEmpty { coord: coord!("d2") })
    );
}

#[test]
fn test_unknown_point_is_an_error() {
    let board = nine_mens_board();
    assert_eq!(
        board.get(coord!("b1")),
        Err(BoardError::UnknownPoint { coord: coord!("b1") })
    );
    assert!(board.is_adjacent(coord!("a1"), coord!("z9")).is_err());
}

#[test]
fn test_adjacency() {
    let board = nine_mens_board();
    assert!(board.is_adjacent(coord!("a1"), coord!("d1")).unwrap());
    assert!(board.is_adjacent(coord!("d1"), coord!("d2")).unwrap());
    assert!(!board.is_adjacent(coord!("a1"), coord!("b2")).unwrap());
    assert!(!board.is_adjacent(coord!("a1"), coord!("g1")).unwrap());
}

#[test]
fn test_relocate() {
    let mut board = nine_mens_board();
    board.put(coord!("a1"), white(3)).unwrap();
    board.put(coord!("a4"), black(1)).unwrap();

    assert_eq!(board.relocate(coord!("a1"), coord!("d1")).unwrap(), white(3));
    assert!(board.is_empty(coord!("a1")).unwrap());
    assert_eq!(
        board.relocate(coord!("d1"), coord!("a4")),
        Err(BoardError::PointOccupied { coord: coord!("a4") })
    );
    assert_eq!(board.get(coord!("d1")).unwrap(), Some(white(3)));
}

#[test]
fn test_would_form_mill() {
    let mut board = nine_mens_board();
    board.put(coord!("a1"), white(0)).unwrap();
    board.put(coord!("d1"), white(1)).unwrap();
    board.put(coord!("a4"), black(0)).unwrap();

    assert!(board.would_form_mill(coord!("g1"), Color::White, None).unwrap());
    assert!(!board.would_form_mill(coord!("g1"), Color::Black, None).unwrap());
    assert!(!board.would_form_mill(coord!("a7"), Color::White, None).unwrap());
    // the piece that would complete the line is the one leaving it
    assert!(!board
        .would_form_mill(coord!("g1"), Color::White, Some(coord!("d1")))
        .unwrap());
    assert!(board
        .would_form_mill(coord!("g1"), Color::White, Some(coord!("a4")))
        .unwrap());
    assert_eq!(board.count_mills(Color::White), 0);

    board.put(coord!("g1"), white(2)).unwrap();
    assert_eq!(board.count_mills(Color::White), 1);
    assert_eq!(board.count_mills(Color::Black), 0);
}

#[test]
fn test_zobrist_hashing_is_equal_for_transpositions() {
    let mut board1 = nine_mens_board();
    let mut board2 = nine_mens_board();
    assert_eq!(board1.hash(), board2.hash());

    board1.put(coord!("a1"), white(0)).unwrap();
    board1.put(coord!("g7"), black(0)).unwrap();
    board1.put(coord!("d2"), white(1)).unwrap();

    board2.put(coord!("d2"), white(5)).unwrap();
    board2.put(coord!("a1"), white(2)).unwrap();
    board2.put(coord!("g7"), black(4)).unwrap();

    assert_eq!(board1.hash(), board2.hash());

    board1.relocate(coord!("d2"), coord!("d3")).unwrap();
    assert_ne!(board1.hash(), board2.hash());
    board1.relocate(coord!("d3"), coord!("d2")).unwrap();
    assert_eq!(board1.hash(), board2.hash());

    board1.take(coord!("a1")).unwrap();
    board1.take(coord!("g7")).unwrap();
    board1.take(coord!("d2")).unwrap();
    assert_eq!(board1.hash(), 0);
}

#[test]
fn test_points_of_and_empty_points() {
    let mut board = Board::new(Arc::new(variants::three_by_three().unwrap()));
    board.put(coord!("b1"), white(0)).unwrap();
    board.put(coord!("c3"), black(0)).unwrap();

    let whites: Vec<_> = board.points_of(Color::White).collect();
    assert_eq!(whites, vec![1]);
    assert_eq!(board.count(Color::Black), 1);
    assert_eq!(board.empty_points().count(), 7);
}

#[test]
fn test_display() {
    let mut board = Board::new(Arc::new(variants::three_by_three().unwrap()));
    board.put(coord!("a1"), white(0)).unwrap();
    board.put(coord!("c3"), black(0)).unwrap();

    let rendered = board.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], " 3 .---.---B");
    assert_eq!(lines[1], "   |   |   |");
    assert_eq!(lines[4], " 1 W---.---.");
    assert_eq!(lines[5], "   a   b   c");
}

#[test]
fn test_display_draws_diagonals() {
    let board = Board::new(Arc::new(variants::picaria().unwrap()));
    let rendered = board.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    // between rows 1 and 2: a1-b2 rises, b2-c1 falls, and so on
    assert_eq!(lines[7], "   | /   \\ | /   \\ |");
}
