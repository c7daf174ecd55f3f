use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest grid the label scheme supports (`a`..`z`, `1`..`26`).
pub const MAX_DIMENSION: u8 = 26;

/// A point label on the coordinate grid: a column letter and a 1-based row
/// number, e.g. `a1` is the bottom-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Coord {
    col: u8,
    row: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("coordinate `{input}` must be a column letter followed by a row number")]
    Malformed { input: String },
    #[error("coordinate `{input}` is outside the {max}x{max} grid")]
    OutOfRange { input: String, max: u8 },
}

impl Coord {
    /// Zero-based column and row, or `None` outside the labelled grid.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if col < MAX_DIMENSION && row < MAX_DIMENSION {
            Some(Self { col, row })
        } else {
            None
        }
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn fits(self, dimension: u8) -> bool {
        self.col < dimension && self.row < dimension
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordParseError::Malformed {
            input: input.to_string(),
        };
        let mut chars = input.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        if !letter.is_ascii_lowercase() {
            return Err(malformed());
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) || digits.starts_with('0')
        {
            return Err(malformed());
        }
        let row: u32 = digits.parse().map_err(|_| malformed())?;
        if row > MAX_DIMENSION as u32 {
            return Err(CoordParseError::OutOfRange {
                input: input.to_string(),
                max: MAX_DIMENSION,
            });
        }

        Coord::new(letter as u8 - b'a', (row - 1) as u8).ok_or_else(malformed)
    }
}

impl From<Coord> for String {
    fn from(coord: Coord) -> Self {
        coord.to_string()
    }
}

impl TryFrom<String> for Coord {
    type Error = CoordParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parses a coordinate literal; only for static tables and tests.
#[macro_export]
macro_rules! coord {
    ($label:expr) => {
        $label
            .parse::<$crate::board::coord::Coord>()
            .expect("coordinate literal should be well formed")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let coord: Coord = "a1".parse().unwrap();
        assert_eq!(Some(coord), Coord::new(0, 0));
        assert_eq!("a1", coord.to_string());

        let coord: Coord = "g7".parse().unwrap();
        assert_eq!(Some(coord), Coord::new(6, 6));
        assert_eq!("g7", coord.to_string());

        let coord: Coord = "c12".parse().unwrap();
        assert_eq!(coord.row(), 11);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "a", "1a", "A1", "a0", "a01", "a1x", "ab"] {
            assert!(input.parse::<Coord>().is_err(), "`{}` should not parse", input);
        }
        assert!(matches!(
            "a27".parse::<Coord>(),
            Err(CoordParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_grid_corners_round_trip() {
        assert!(Coord::new(26, 0).is_none());
        assert!(Coord::new(0, 26).is_none());
        assert!(Coord::new(0, 255).is_none());

        let corner = Coord::new(25, 25).unwrap();
        assert_eq!("z26", corner.to_string());
        assert_eq!(Ok(corner), "z26".parse());
        assert_eq!(Ok(Coord::new(25, 0).unwrap()), "z1".parse());
        assert_eq!(Ok(Coord::new(0, 25).unwrap()), "a26".parse());
    }

    #[test]
    fn test_fits() {
        assert!(coord!("c3").fits(3));
        assert!(!coord!("d1").fits(3));
        assert!(!coord!("a4").fits(3));
    }

    #[test]
    fn test_json_is_label() {
        let json = serde_json::to_string(&coord!("e5")).unwrap();
        assert_eq!("\"e5\"", json);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord!("e5"), back);
        assert!(serde_json::from_str::<Coord>("\"zz\"").is_err());
    }
}
