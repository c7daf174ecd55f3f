use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::color::Color;

// Zobrist board hashing
// * One number for each color at each point ( 2 * MAX_POINTS )
//
// The hash of a position is the xor of the numbers of every occupied point,
// so putting or clearing a piece is a single xor in either direction. Side
// to move is deliberately left out: repetition is counted on the board alone.

pub const MAX_POINTS: usize = 64;

// Fixed so that hashes are stable across runs.
const ZOBRIST_SEED: u64 = 0x6d69_6c6c_735f_7a62;

static ZOBRIST: Lazy<Zobrist> = Lazy::new(Zobrist::new);

pub struct Zobrist {
    numbers: [[u64; 2]; MAX_POINTS],
}

impl Zobrist {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut numbers = [[0u64; 2]; MAX_POINTS];
        for point in numbers.iter_mut() {
            for number in point.iter_mut() {
                *number = rng.gen();
            }
        }
        Self { numbers }
    }
}

/// Key for `color` standing on the point with the given topology index.
pub fn point_key(index: usize, color: Color) -> u64 {
    ZOBRIST.numbers[index][color.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_keys_are_distinct() {
        let mut seen = FxHashSet::default();
        for index in 0..MAX_POINTS {
            for color in Color::ALL {
                assert!(seen.insert(point_key(index, color)));
            }
        }
    }

    #[test]
    fn test_keys_are_stable() {
        assert_eq!(point_key(3, Color::Black), point_key(3, Color::Black));
        assert_ne!(point_key(3, Color::Black), point_key(3, Color::White));
    }
}
