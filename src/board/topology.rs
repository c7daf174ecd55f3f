//! Static board geometry: points, the links between them and the lines that
//! count as mills. A `Topology` is built once per variant, validated, and
//! then shared read-only by every board of that variant.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::str::FromStr;

use super::coord::Coord;
use super::error::TopologyError;
use super::zobrist::MAX_POINTS;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LinkDirection {
    Horizontal,
    Vertical,
    /// Rising to the right.
    DiagonalForward,
    /// Falling to the right.
    DiagonalBack,
}

impl LinkDirection {
    /// Direction of the straight segment between two points, or `None` if
    /// the points do not lie on a row, column or 45 degree diagonal.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let dc = to.col() as i16 - from.col() as i16;
        let dr = to.row() as i16 - from.row() as i16;
        match (dc, dr) {
            (0, 0) => None,
            (_, 0) => Some(LinkDirection::Horizontal),
            (0, _) => Some(LinkDirection::Vertical),
            _ if dc == dr => Some(LinkDirection::DiagonalForward),
            _ if dc == -dr => Some(LinkDirection::DiagonalBack),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Link {
    pub direction: LinkDirection,
    pub to: Coord,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Point {
    pub coord: Coord,
    pub links: Vec<Link>,
}

pub type MillLine = [usize; 3];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Topology {
    name: &'static str,
    dimension: u8,
    points: Vec<Point>,
    index: FxHashMap<Coord, usize>,
    neighbours: Vec<SmallVec<[usize; 8]>>,
    mills: Vec<MillLine>,
    mills_by_point: Vec<SmallVec<[usize; 4]>>,
}

impl Topology {
    pub fn builder(name: &'static str, dimension: u8) -> TopologyBuilder {
        TopologyBuilder {
            name,
            dimension,
            points: Vec::new(),
            links: Vec::new(),
            mills: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn coord(&self, index: usize) -> Coord {
        self.points[index].coord
    }

    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.index.get(&coord).copied()
    }

    /// Neighbouring point indices in ascending order.
    pub fn neighbours(&self, index: usize) -> &[usize] {
        &self.neighbours[index]
    }

    pub fn is_linked(&self, from: usize, to: usize) -> bool {
        self.neighbours[from].contains(&to)
    }

    pub fn mills(&self) -> &[MillLine] {
        &self.mills
    }

    pub fn mills_through(&self, index: usize) -> impl Iterator<Item = &MillLine> + '_ {
        self.mills_by_point[index].iter().map(move |&m| &self.mills[m])
    }
}

pub struct TopologyBuilder {
    name: &'static str,
    dimension: u8,
    points: Vec<Coord>,
    links: Vec<(Coord, Coord)>,
    mills: Vec<[Coord; 3]>,
}

fn parse(label: &str) -> Result<Coord, TopologyError> {
    Coord::from_str(label).map_err(|_| TopologyError::InvalidCoordinate {
        label: label.to_string(),
    })
}

impl TopologyBuilder {
    pub fn points(mut self, labels: &[&str]) -> Result<Self, TopologyError> {
        for label in labels {
            self.points.push(parse(label)?);
        }
        Ok(self)
    }

    /// Adds undirected links; each pair is stored on both endpoints.
    pub fn links(mut self, pairs: &[(&str, &str)]) -> Result<Self, TopologyError> {
        for (from, to) in pairs {
            self.links.push((parse(from)?, parse(to)?));
        }
        Ok(self)
    }

    pub fn mills(mut self, lines: &[[&str; 3]]) -> Result<Self, TopologyError> {
        for line in lines {
            self.mills
                .push([parse(line[0])?, parse(line[1])?, parse(line[2])?]);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<Topology, TopologyError> {
        if self.points.len() > MAX_POINTS {
            return Err(TopologyError::TooManyPoints {
                count: self.points.len(),
                max: MAX_POINTS,
            });
        }

        let mut index = FxHashMap::default();
        for (i, &coord) in self.points.iter().enumerate() {
            if !coord.fits(self.dimension) {
                return Err(TopologyError::OutsideGrid {
                    coord,
                    dimension: self.dimension,
                });
            }
            if index.insert(coord, i).is_some() {
                return Err(TopologyError::DuplicatePoint { coord });
            }
        }

        let mut points: Vec<Point> = self
            .points
            .iter()
            .map(|&coord| Point {
                coord,
                links: Vec::new(),
            })
            .collect();
        let mut neighbours: Vec<SmallVec<[usize; 8]>> = vec![SmallVec::new(); points.len()];

        for &(from, to) in &self.links {
            let dangling = || TopologyError::DanglingLink { from, to };
            let a = *index.get(&from).ok_or_else(dangling)?;
            let b = *index.get(&to).ok_or_else(dangling)?;
            let direction =
                LinkDirection::between(from, to).ok_or(TopologyError::CrookedLink { from, to })?;
            if neighbours[a].contains(&b) {
                continue;
            }
            points[a].links.push(Link { direction, to });
            points[b].links.push(Link { direction, to: from });
            neighbours[a].push(b);
            neighbours[b].push(a);
        }
        for list in neighbours.iter_mut() {
            list.sort_unstable();
        }

        let mut mills = Vec::with_capacity(self.mills.len());
        let mut mills_by_point: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); points.len()];
        for line in &self.mills {
            let invalid = || TopologyError::InvalidMill {
                mill: line.iter().map(|c| c.to_string()).collect(),
            };
            let mut mill = [0; 3];
            for (slot, coord) in mill.iter_mut().zip(line.iter()) {
                *slot = *index.get(coord).ok_or_else(invalid)?;
            }
            if mill[0] == mill[1] || mill[1] == mill[2] || mill[0] == mill[2] {
                return Err(invalid());
            }
            for &point in &mill {
                mills_by_point[point].push(mills.len());
            }
            mills.push(mill);
        }

        Ok(Topology {
            name: self.name,
            dimension: self.dimension,
            points,
            index,
            neighbours,
            mills,
            mills_by_point,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    fn triangle() -> Result<Topology, TopologyError> {
        Topology::builder("test", 3)
            .points(&["a1", "b1", "c1", "b2"])?
            .links(&[("a1", "b1"), ("b1", "c1"), ("b1", "b2"), ("a1", "b2")])?
            .mills(&[["a1", "b1", "c1"]])?
            .build()
    }

    #[test]
    fn test_links_are_symmetric_and_typed() {
        let topology = triangle().unwrap();
        let a1 = topology.index_of(coord!("a1")).unwrap();
        let b1 = topology.index_of(coord!("b1")).unwrap();
        let b2 = topology.index_of(coord!("b2")).unwrap();
        assert!(topology.is_linked(a1, b1));
        assert!(topology.is_linked(b1, a1));
        assert!(!topology.is_linked(a1, topology.index_of(coord!("c1")).unwrap()));
        assert_eq!(topology.neighbours(b1), &[a1, 2, b2]);

        let diagonal = topology.points()[a1]
            .links
            .iter()
            .find(|link| link.to == coord!("b2"))
            .unwrap();
        assert_eq!(diagonal.direction, LinkDirection::DiagonalForward);
        assert_eq!(topology.points()[b2].links.len(), 2);
    }

    #[test]
    fn test_mills_through_point() {
        let topology = triangle().unwrap();
        let b1 = topology.index_of(coord!("b1")).unwrap();
        let b2 = topology.index_of(coord!("b2")).unwrap();
        assert_eq!(topology.mills_through(b1).count(), 1);
        assert_eq!(topology.mills_through(b2).count(), 0);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(
            LinkDirection::between(coord!("a1"), coord!("c1")),
            Some(LinkDirection::Horizontal)
        );
        assert_eq!(
            LinkDirection::between(coord!("a3"), coord!("a1")),
            Some(LinkDirection::Vertical)
        );
        assert_eq!(
            LinkDirection::between(coord!("a3"), coord!("b2")),
            Some(LinkDirection::DiagonalBack)
        );
        assert_eq!(LinkDirection::between(coord!("a1"), coord!("b3")), None);
    }

    #[test]
    fn test_rejects_malformed_definitions() {
        let outside = Topology::builder("bad", 2)
            .points(&["c1"])
            .unwrap()
            .build();
        assert!(matches!(outside, Err(TopologyError::OutsideGrid { .. })));

        let duplicate = Topology::builder("bad", 3)
            .points(&["a1", "a1"])
            .unwrap()
            .build();
        assert!(matches!(duplicate, Err(TopologyError::DuplicatePoint { .. })));

        let dangling = Topology::builder("bad", 3)
            .points(&["a1"])
            .and_then(|b| b.links(&[("a1", "a2")]))
            .unwrap()
            .build();
        assert!(matches!(dangling, Err(TopologyError::DanglingLink { .. })));

        let short_mill = Topology::builder("bad", 3)
            .points(&["a1", "a2", "a3"])
            .and_then(|b| b.mills(&[["a1", "a2", "a2"]]))
            .unwrap()
            .build();
        assert!(matches!(short_mill, Err(TopologyError::InvalidMill { .. })));

        assert!(Topology::builder("bad", 3).points(&["x"]).is_err());
    }
}
