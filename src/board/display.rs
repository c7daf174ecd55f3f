use std::fmt;

use super::topology::LinkDirection;
use super::Board;

const COLUMN_WIDTH: usize = 4;
const ROW_HEIGHT: usize = 2;
const EMPTY_POINT: char = '.';

// Draws the board on a character canvas: points on every other line, links
// between them. Rows are printed top to bottom so `a1` ends up bottom-left.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let topology = self.topology();
        let dimension = topology.dimension() as usize;
        let width = (dimension - 1) * COLUMN_WIDTH + 1;
        let height = (dimension - 1) * ROW_HEIGHT + 1;
        let mut canvas = vec![vec![' '; width]; height];

        let position = |col: u8, row: u8| {
            (
                col as usize * COLUMN_WIDTH,
                (dimension - 1 - row as usize) * ROW_HEIGHT,
            )
        };

        for (index, point) in topology.points().iter().enumerate() {
            let (x0, y0) = position(point.coord.col(), point.coord.row());
            for link in &point.links {
                if topology.index_of(link.to).map_or(true, |to| to < index) {
                    continue;
                }
                let (x1, y1) = position(link.to.col(), link.to.row());
                let (dx, dy) = (x1 as i64 - x0 as i64, y1 as i64 - y0 as i64);
                match link.direction {
                    LinkDirection::Horizontal => {
                        for x in x0.min(x1) + 1..x0.max(x1) {
                            canvas[y0][x] = '-';
                        }
                    }
                    LinkDirection::Vertical => {
                        for y in y0.min(y1) + 1..y0.max(y1) {
                            canvas[y][x0] = '|';
                        }
                    }
                    LinkDirection::DiagonalForward | LinkDirection::DiagonalBack => {
                        let glyph = if link.direction == LinkDirection::DiagonalForward {
                            '/'
                        } else {
                            '\\'
                        };
                        for y in y0.min(y1) + 1..y0.max(y1) {
                            let x = x0 as i64 + dx * (y as i64 - y0 as i64) / dy;
                            canvas[y][x as usize] = glyph;
                        }
                    }
                }
            }
        }

        for (index, point) in topology.points().iter().enumerate() {
            let (x, y) = position(point.coord.col(), point.coord.row());
            canvas[y][x] = self
                .get_index(index)
                .map_or(EMPTY_POINT, |piece| piece.color.to_char());
        }

        for (y, line) in canvas.iter().enumerate() {
            let label = if y % ROW_HEIGHT == 0 {
                format!("{:>2}", dimension - y / ROW_HEIGHT)
            } else {
                "  ".to_string()
            };
            let line: String = line.iter().collect();
            writeln!(f, "{} {}", label, line.trim_end())?;
        }

        let mut footer = String::from("   ");
        for col in 0..dimension {
            footer.push((b'a' + col as u8) as char);
            if col + 1 < dimension {
                footer.push_str(&" ".repeat(COLUMN_WIDTH - 1));
            }
        }
        writeln!(f, "{}", footer)
    }
}
