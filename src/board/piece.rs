use super::color::Color;
use std::fmt;

/// A single man. Ids are unique per color and stable for the whole game, so a
/// piece keeps its identity across moves and undo.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub color: Color,
    pub id: u8,
}

impl Piece {
    pub const fn new(color: Color, id: u8) -> Self {
        Self { color, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.to_char(), self.id)
    }
}

/// The pieces of one color that are not on the board: those still waiting
/// to be placed and those that were captured.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PiecePool {
    unplaced: Vec<Piece>,
    removed: Vec<Piece>,
}

impl PiecePool {
    pub fn new(color: Color, count: u8) -> Self {
        Self {
            unplaced: (0..count).map(|id| Piece::new(color, id)).collect(),
            removed: Vec::new(),
        }
    }

    pub fn unplaced(&self) -> &[Piece] {
        &self.unplaced
    }

    pub fn removed(&self) -> &[Piece] {
        &self.removed
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Hands out the next piece to place.
    pub fn take_unplaced(&mut self) -> Option<Piece> {
        self.unplaced.pop()
    }

    pub fn return_unplaced(&mut self, piece: Piece) {
        self.unplaced.push(piece);
    }

    pub fn capture(&mut self, piece: Piece) {
        self.removed.push(piece);
    }

    /// Takes back the most recently captured piece.
    pub fn restore_captured(&mut self) -> Option<Piece> {
        self.removed.pop()
    }

    /// Moves the next unplaced piece straight into the captured bag; used when
    /// building a position by hand.
    pub(crate) fn discard_unplaced(&mut self) -> Option<Piece> {
        let piece = self.unplaced.pop()?;
        self.removed.push(piece);
        Some(piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_hands_out_distinct_pieces() {
        let mut pool = PiecePool::new(Color::Black, 3);
        let first = pool.take_unplaced().unwrap();
        let second = pool.take_unplaced().unwrap();
        assert_ne!(first, second);
        assert_eq!(first.color, Color::Black);
        assert_eq!(pool.unplaced_count(), 1);
    }

    #[test]
    fn test_return_restores_order() {
        let mut pool = PiecePool::new(Color::White, 2);
        let before = pool.clone();
        let piece = pool.take_unplaced().unwrap();
        pool.return_unplaced(piece);
        assert_eq!(before, pool);
    }

    #[test]
    fn test_capture_and_restore() {
        let mut pool = PiecePool::new(Color::White, 0);
        pool.capture(Piece::new(Color::White, 4));
        assert_eq!(pool.removed_count(), 1);
        assert_eq!(pool.restore_captured(), Some(Piece::new(Color::White, 4)));
        assert_eq!(pool.restore_captured(), None);
    }
}
