//! Rectangular byte grids addressed by (row, col)

use aoc_solver::ParseError;
use std::fmt;

/// A cell position; row 0 is the first input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row-major grid of single-byte cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Parse one row per non-empty line. All rows must have the same width.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cells = Vec::with_capacity(input.len());
        let mut rows = 0;
        let mut cols = 0;

        for (line_idx, line) in input.lines().map(str::trim_end).enumerate() {
            if line.is_empty() {
                continue;
            }
            if rows == 0 {
                cols = line.len();
            } else if line.len() != cols {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) expected {} cells, found {}",
                    line_idx + 1,
                    cols,
                    line.len()
                )));
            }
            cells.extend_from_slice(line.as_bytes());
            rows += 1;
        }

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `p`, `None` when off-grid.
    pub fn get(&self, p: Point) -> Option<u8> {
        (p.row < self.rows && p.col < self.cols).then(|| self.cells[p.row * self.cols + p.col])
    }

    /// Overwrite the cell at `p`; off-grid writes are ignored.
    pub fn set(&mut self, p: Point, value: u8) {
        if p.row < self.rows && p.col < self.cols {
            self.cells[p.row * self.cols + p.col] = value;
        }
    }

    /// All positions in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Point::new(row, col)))
    }

    /// First position holding `value`, scanning row-major.
    pub fn find(&self, value: u8) -> Option<Point> {
        self.cells
            .iter()
            .position(|&cell| cell == value)
            .map(|i| Point::new(i / self.cols, i % self.cols))
    }

    /// `p` moved by (`drow`, `dcol`), if that stays on the grid.
    pub fn offset(&self, p: Point, drow: isize, dcol: isize) -> Option<Point> {
        let row = p.row.checked_add_signed(drow)?;
        let col = p.col.checked_add_signed(dcol)?;
        (row < self.rows && col < self.cols).then_some(Point::new(row, col))
    }

    /// The up to eight on-grid cells around `p`.
    pub fn neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOURS_8
            .iter()
            .filter_map(move |&(drow, dcol)| self.offset(p, drow, dcol))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        let grid = Grid::parse(".@.\n@..\n.@@\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.get(Point::new(0, 1)), Some(b'@'));
        assert_eq!(grid.get(Point::new(2, 2)), Some(b'@'));
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.to_string(), ".@.\n@..\n.@@\n");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Grid::parse("...\n..\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFormat("(line 2) expected 3 cells, found 2".to_string())
        );
    }

    #[test]
    fn test_empty_input() {
        let grid = Grid::parse("").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (0, 0));
        assert_eq!(grid.points().count(), 0);
        assert_eq!(grid.find(b'S'), None);
    }

    #[test]
    fn test_neighbours_clip_at_edges() {
        let grid = Grid::parse("abc\ndef\nghi").unwrap();
        assert_eq!(grid.neighbours(Point::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbours(Point::new(0, 1)).count(), 5);
        assert_eq!(grid.neighbours(Point::new(1, 1)).count(), 8);

        let mut around_corner: Vec<u8> = grid
            .neighbours(Point::new(2, 2))
            .filter_map(|p| grid.get(p))
            .collect();
        around_corner.sort_unstable();
        assert_eq!(around_corner, b"efh");
    }

    #[test]
    fn test_find_and_set() {
        let mut grid = Grid::parse("..S\n...").unwrap();
        assert_eq!(grid.find(b'S'), Some(Point::new(0, 2)));
        grid.set(Point::new(1, 0), b'#');
        grid.set(Point::new(5, 5), b'#');
        assert_eq!(grid.to_string(), "..S\n#..\n");
        assert_eq!(grid.offset(Point::new(0, 2), 0, 1), None);
        assert_eq!(grid.offset(Point::new(0, 2), 1, -2), Some(Point::new(1, 0)));
    }
}
