//! Board definitions for every supported game. These are pure data: the
//! rules only ever see them through `Topology`.

use super::error::TopologyError;
use super::topology::Topology;

/// 3x3 grid with orthogonal links; rows and columns are mills.
pub fn three_by_three() -> Result<Topology, TopologyError> {
    Topology::builder("3x3 grid", 3)
        .points(&["a1", "b1", "c1", "a2", "b2", "c2", "a3", "b3", "c3"])?
        .links(&[
            ("a1", "b1"),
            ("b1", "c1"),
            ("a2", "b2"),
            ("b2", "c2"),
            ("a3", "b3"),
            ("b3", "c3"),
            ("a1", "a2"),
            ("a2", "a3"),
            ("b1", "b2"),
            ("b2", "b3"),
            ("c1", "c2"),
            ("c2", "c3"),
        ])?
        .mills(&[
            ["a1", "b1", "c1"],
            ["a2", "b2", "c2"],
            ["a3", "b3", "c3"],
            ["a1", "a2", "a3"],
            ["b1", "b2", "b3"],
            ["c1", "c2", "c3"],
        ])?
        .build()
}

/// Two concentric squares joined at their midpoints.
pub fn two_squares() -> Result<Topology, TopologyError> {
    Topology::builder("two squares", 5)
        .points(&[
            "a1", "c1", "e1", "b2", "c2", "d2", "a3", "b3", "d3", "e3", "b4", "c4", "d4", "a5",
            "c5", "e5",
        ])?
        .links(&[
            ("a1", "c1"),
            ("c1", "e1"),
            ("e1", "e3"),
            ("e3", "e5"),
            ("e5", "c5"),
            ("c5", "a5"),
            ("a5", "a3"),
            ("a3", "a1"),
            ("b2", "c2"),
            ("c2", "d2"),
            ("d2", "d3"),
            ("d3", "d4"),
            ("d4", "c4"),
            ("c4", "b4"),
            ("b4", "b3"),
            ("b3", "b2"),
            ("c1", "c2"),
            ("a3", "b3"),
            ("d3", "e3"),
            ("c4", "c5"),
        ])?
        .mills(&[
            ["a1", "c1", "e1"],
            ["e1", "e3", "e5"],
            ["a5", "c5", "e5"],
            ["a1", "a3", "a5"],
            ["b2", "c2", "d2"],
            ["d2", "d3", "d4"],
            ["b4", "c4", "d4"],
            ["b2", "b3", "b4"],
        ])?
        .build()
}

const THREE_SQUARES_POINTS: [&str; 24] = [
    "a1", "d1", "g1", "b2", "d2", "f2", "c3", "d3", "e3", "a4", "b4", "c4", "e4", "f4", "g4", "c5",
    "d5", "e5", "b6", "d6", "f6", "a7", "d7", "g7",
];

const THREE_SQUARES_LINKS: [(&str, &str); 32] = [
    ("a1", "d1"),
    ("d1", "g1"),
    ("g1", "g4"),
    ("g4", "g7"),
    ("g7", "d7"),
    ("d7", "a7"),
    ("a7", "a4"),
    ("a4", "a1"),
    ("b2", "d2"),
    ("d2", "f2"),
    ("f2", "f4"),
    ("f4", "f6"),
    ("f6", "d6"),
    ("d6", "b6"),
    ("b6", "b4"),
    ("b4", "b2"),
    ("c3", "d3"),
    ("d3", "e3"),
    ("e3", "e4"),
    ("e4", "e5"),
    ("e5", "d5"),
    ("d5", "c5"),
    ("c5", "c4"),
    ("c4", "c3"),
    ("d1", "d2"),
    ("d2", "d3"),
    ("a4", "b4"),
    ("b4", "c4"),
    ("e4", "f4"),
    ("f4", "g4"),
    ("d5", "d6"),
    ("d6", "d7"),
];

const THREE_SQUARES_MILLS: [[&str; 3]; 16] = [
    ["a1", "d1", "g1"],
    ["g1", "g4", "g7"],
    ["a7", "d7", "g7"],
    ["a1", "a4", "a7"],
    ["b2", "d2", "f2"],
    ["f2", "f4", "f6"],
    ["b6", "d6", "f6"],
    ["b2", "b4", "b6"],
    ["c3", "d3", "e3"],
    ["e3", "e4", "e5"],
    ["c5", "d5", "e5"],
    ["c3", "c4", "c5"],
    ["d1", "d2", "d3"],
    ["a4", "b4", "c4"],
    ["e4", "f4", "g4"],
    ["d5", "d6", "d7"],
];

/// Three concentric squares joined at their midpoints (Nine and Ten Men's
/// Morris).
pub fn three_squares() -> Result<Topology, TopologyError> {
    Topology::builder("three squares", 7)
        .points(&THREE_SQUARES_POINTS)?
        .links(&THREE_SQUARES_LINKS)?
        .mills(&THREE_SQUARES_MILLS)?
        .build()
}

/// Three squares with the corners joined diagonally (Twelve Men's Morris).
pub fn three_squares_with_diagonals() -> Result<Topology, TopologyError> {
    Topology::builder("three squares with diagonals", 7)
        .points(&THREE_SQUARES_POINTS)?
        .links(&THREE_SQUARES_LINKS)?
        .links(&[
            ("a1", "b2"),
            ("b2", "c3"),
            ("g1", "f2"),
            ("f2", "e3"),
            ("a7", "b6"),
            ("b6", "c5"),
            ("g7", "f6"),
            ("f6", "e5"),
        ])?
        .mills(&THREE_SQUARES_MILLS)?
        .mills(&[
            ["a1", "b2", "c3"],
            ["g1", "f2", "e3"],
            ["a7", "b6", "c5"],
            ["g7", "f6", "e5"],
        ])?
        .build()
}

/// The Picaria board: a 3x3 grid of points whose four cells carry both
/// diagonals, crossing at the cell centres.
pub fn picaria() -> Result<Topology, TopologyError> {
    Topology::builder("picaria", 5)
        .points(&[
            "a1", "c1", "e1", "b2", "d2", "a3", "c3", "e3", "b4", "d4", "a5", "c5", "e5",
        ])?
        .links(&[
            ("a1", "c1"),
            ("c1", "e1"),
            ("a3", "c3"),
            ("c3", "e3"),
            ("a5", "c5"),
            ("c5", "e5"),
            ("a1", "a3"),
            ("a3", "a5"),
            ("c1", "c3"),
            ("c3", "c5"),
            ("e1", "e3"),
            ("e3", "e5"),
            ("a1", "b2"),
            ("b2", "c3"),
            ("c3", "d4"),
            ("d4", "e5"),
            ("a5", "b4"),
            ("b4", "c3"),
            ("c3", "d2"),
            ("d2", "e1"),
            ("a3", "b2"),
            ("b2", "c1"),
            ("c1", "d2"),
            ("d2", "e3"),
            ("a3", "b4"),
            ("b4", "c5"),
            ("c5", "d4"),
            ("d4", "e3"),
        ])?
        .mills(&[
            ["a1", "c1", "e1"],
            ["a3", "c3", "e3"],
            ["a5", "c5", "e5"],
            ["a1", "a3", "a5"],
            ["c1", "c3", "c5"],
            ["e1", "e3", "e5"],
            ["a1", "b2", "c3"],
            ["b2", "c3", "d4"],
            ["c3", "d4", "e5"],
            ["a5", "b4", "c3"],
            ["b4", "c3", "d2"],
            ["c3", "d2", "e1"],
            ["a3", "b2", "c1"],
            ["c1", "d2", "e3"],
            ["a3", "b4", "c5"],
            ["c5", "d4", "e3"],
        ])?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn test_every_board_is_well_formed() {
        let boards = [
            (three_by_three(), 9, 6),
            (two_squares(), 16, 8),
            (three_squares(), 24, 16),
            (three_squares_with_diagonals(), 24, 20),
            (picaria(), 13, 16),
        ];
        for (board, points, mills) in boards {
            let topology = board.unwrap();
            assert_eq!(topology.num_points(), points, "{}", topology.name());
            assert_eq!(topology.mills().len(), mills, "{}", topology.name());
        }
    }

    #[test]
    fn test_three_squares_degrees() {
        let topology = three_squares().unwrap();
        let degree = |label: &str| {
            topology
                .neighbours(topology.index_of(coord!(label)).unwrap())
                .len()
        };
        assert_eq!(degree("a1"), 2);
        assert_eq!(degree("d1"), 3);
        assert_eq!(degree("d2"), 4);
        assert_eq!(degree("c4"), 3);
    }

    #[test]
    fn test_picaria_centre_is_fully_connected() {
        let topology = picaria().unwrap();
        let c3 = topology.index_of(coord!("c3")).unwrap();
        assert_eq!(topology.neighbours(c3).len(), 8);
        assert_eq!(topology.mills_through(c3).count(), 8);
    }

    #[test]
    fn test_twelve_mens_corner_has_diagonal() {
        let topology = three_squares_with_diagonals().unwrap();
        let a1 = topology.index_of(coord!("a1")).unwrap();
        let b2 = topology.index_of(coord!("b2")).unwrap();
        assert!(topology.is_linked(a1, b2));
        assert_eq!(topology.neighbours(b2).len(), 4);
    }
}
