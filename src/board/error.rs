use thiserror::Error;

use super::color::Color;
use super::coord::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("There is no point `{coord}` on this board")]
    UnknownPoint { coord: Coord },
    #[error("Cannot put a piece on `{coord}`, the point is already occupied")]
    PointOccupied { coord: Coord },
    #[error("Cannot take a piece from `{coord}`, the point is empty")]
    PointEmpty { coord: Coord },
    #[error("{color} has no pieces left to place")]
    NoUnplacedPieces { color: Color },
    #[error("{color} has no captured pieces to restore")]
    NoCapturedPieces { color: Color },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Invalid coordinate `{label}` in board definition")]
    InvalidCoordinate { label: String },
    #[error("Point `{coord}` lies outside the {dimension}x{dimension} grid")]
    OutsideGrid { coord: Coord, dimension: u8 },
    #[error("Board has {count} points, at most {max} are supported")]
    TooManyPoints { count: usize, max: usize },
    #[error("Point `{coord}` is defined more than once")]
    DuplicatePoint { coord: Coord },
    #[error("Link `{from}`-`{to}` names a point that does not exist")]
    DanglingLink { from: Coord, to: Coord },
    #[error("Link `{from}`-`{to}` is not a straight line")]
    CrookedLink { from: Coord, to: Coord },
    #[error("Mill {mill:?} does not name 3 distinct existing points")]
    InvalidMill { mill: Vec<String> },
}
