pub mod color;
pub mod coord;
pub mod error;
pub mod piece;
pub mod topology;
pub mod variants;

mod display;
mod zobrist;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use smallvec::SmallVec;

use color::Color;
use coord::Coord;
use error::BoardError;
use piece::Piece;
use topology::Topology;

/// The occupancy of every point of one board. Geometry lives in the shared
/// `Topology`; a board only records who stands where, plus an incrementally
/// maintained Zobrist hash of that occupancy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    topology: Arc<Topology>,
    occupants: SmallVec<[Option<Piece>; 24]>,
    hash: u64,
}

impl Board {
    pub fn new(topology: Arc<Topology>) -> Self {
        let occupants = SmallVec::from_elem(None, topology.num_points());
        Self {
            topology,
            occupants,
            hash: 0,
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        self.topology
            .index_of(coord)
            .ok_or(BoardError::UnknownPoint { coord })
    }

    pub fn get(&self, coord: Coord) -> Result<Option<Piece>, BoardError> {
        Ok(self.occupants[self.index(coord)?])
    }

    pub fn get_index(&self, index: usize) -> Option<Piece> {
        self.occupants[index]
    }

    pub fn color_at(&self, coord: Coord) -> Result<Option<Color>, BoardError> {
        Ok(self.get(coord)?.map(|piece| piece.color))
    }

    pub fn is_empty(&self, coord: Coord) -> Result<bool, BoardError> {
        Ok(self.get(coord)?.is_none())
    }

    pub fn is_adjacent(&self, from: Coord, to: Coord) -> Result<bool, BoardError> {
        Ok(self.topology.is_linked(self.index(from)?, self.index(to)?))
    }

    pub fn put(&mut self, coord: Coord, piece: Piece) -> Result<(), BoardError> {
        let index = self.index(coord)?;
        if self.occupants[index].is_some() {
            return Err(BoardError::PointOccupied { coord });
        }
        self.set(index, Some(piece));
        Ok(())
    }

    pub fn take(&mut self, coord: Coord) -> Result<Piece, BoardError> {
        let index = self.index(coord)?;
        let piece = self.occupants[index].ok_or(BoardError::PointEmpty { coord })?;
        self.set(index, None);
        Ok(piece)
    }

    pub fn relocate(&mut self, from: Coord, to: Coord) -> Result<Piece, BoardError> {
        if !self.is_empty(to)? {
            return Err(BoardError::PointOccupied { coord: to });
        }
        let piece = self.take(from)?;
        self.put(to, piece)?;
        Ok(piece)
    }

    /// Would `color` own a complete mill through `to` once a piece of that
    /// color stands there and `vacated` (the origin of a sliding move) is
    /// empty? The board itself is left untouched.
    pub fn would_form_mill(
        &self,
        to: Coord,
        color: Color,
        vacated: Option<Coord>,
    ) -> Result<bool, BoardError> {
        let to = self.index(to)?;
        let vacated = vacated.map(|coord| self.index(coord)).transpose()?;
        let owned = |point: usize| {
            point == to
                || (Some(point) != vacated
                    && self.occupants[point].map(|piece| piece.color) == Some(color))
        };
        Ok(self
            .topology
            .mills_through(to)
            .any(|mill| mill.iter().all(|&point| owned(point))))
    }

    /// Number of complete mills `color` currently holds.
    pub fn count_mills(&self, color: Color) -> usize {
        self.topology
            .mills()
            .iter()
            .filter(|mill| {
                mill.iter()
                    .all(|&point| self.occupants[point].map(|p| p.color) == Some(color))
            })
            .count()
    }

    pub fn count(&self, color: Color) -> usize {
        self.points_of(color).count()
    }

    /// Indices of the points occupied by `color`, in topology order.
    pub fn points_of(&self, color: Color) -> impl Iterator<Item = usize> + '_ {
        self.occupants
            .iter()
            .enumerate()
            .filter(move |(_, occupant)| occupant.map(|piece| piece.color) == Some(color))
            .map(|(index, _)| index)
    }

    pub fn empty_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.occupants
            .iter()
            .enumerate()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(index, _)| index)
    }

    fn set(&mut self, index: usize, occupant: Option<Piece>) {
        if let Some(old) = self.occupants[index] {
            self.hash ^= zobrist::point_key(index, old.color);
        }
        if let Some(new) = occupant {
            self.hash ^= zobrist::point_key(index, new.color);
        }
        self.occupants[index] = occupant;
    }
}
