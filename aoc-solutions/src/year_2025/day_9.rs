use crate::utils::parse_lines;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["geometry", "prefix-sum"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
}

/// Inclusive tile count of the rectangle with `a` and `b` as opposite corners.
pub fn area(a: Tile, b: Tile) -> u64 {
    (a.x.abs_diff(b.x) + 1) * (a.y.abs_diff(b.y) + 1)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Tile>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| anyhow!("expected `x,y`, found {line:?}"))?;
            Ok(Tile {
                x: x.trim().parse::<i64>().with_context(|| format!("invalid x {x:?}"))?,
                y: y.trim().parse::<i64>().with_context(|| format!("invalid y {y:?}"))?,
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| area(a, b))
            .max()
            .map(|best| best.to_string())
            .ok_or_else(|| SolveError::failed("need at least two red tiles"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() < 2 {
            return Err(SolveError::failed("need at least two red tiles"));
        }
        let floor = Floor::new(shared)?;

        let mut best = 0;
        for (&a, &b) in shared.iter().tuple_combinations() {
            let candidate = area(a, b);
            if candidate > best && floor.covers(a, b) {
                best = candidate;
            }
        }
        Ok(best.to_string())
    }
}

/// The polygon's inside on a compressed grid.
///
/// Each distinct x (and y) value of the corners gets its own index. A gap index sits
/// between two values only when real tiles lie between them, and there is always one
/// before the first and after the last value. Every compressed cell therefore holds at
/// least one tile and is wholly inside or wholly outside the polygon.
struct Floor {
    cols: Axis,
    rows: Axis,
    /// `outside[r][c]` summed over the rectangle `[0, r) x [0, c)`
    outside_prefix: Vec<usize>,
}

impl Floor {
    fn new(corners: &[Tile]) -> Result<Self, SolveError> {
        let cols = Axis::new(corners.iter().map(|t| t.x));
        let rows = Axis::new(corners.iter().map(|t| t.y));
        let (width, height) = (cols.len, rows.len);

        let mut boundary = vec![false; width * height];
        for (idx, (a, b)) in corners.iter().circular_tuple_windows().enumerate() {
            if a.x != b.x && a.y != b.y {
                return Err(SolveError::failed(format!(
                    "edge {} from {:?} to {:?} is diagonal",
                    idx + 1,
                    (a.x, a.y),
                    (b.x, b.y)
                )));
            }
            let (col_a, col_b) = (cols.index_of(a.x), cols.index_of(b.x));
            let (row_a, row_b) = (rows.index_of(a.y), rows.index_of(b.y));
            for row in row_a.min(row_b)..=row_a.max(row_b) {
                for col in col_a.min(col_b)..=col_a.max(col_b) {
                    boundary[row * width + col] = true;
                }
            }
        }

        // index 0 is the gap before every corner, so it is always outside
        let mut outside = vec![false; width * height];
        let mut queue = VecDeque::from([(0usize, 0usize)]);
        outside[0] = true;
        while let Some((row, col)) = queue.pop_front() {
            let steps = [
                row.checked_sub(1).map(|r| (r, col)),
                (row + 1 < height).then_some((row + 1, col)),
                col.checked_sub(1).map(|c| (row, c)),
                (col + 1 < width).then_some((row, col + 1)),
            ];
            for (r, c) in steps.into_iter().flatten() {
                let cell = r * width + c;
                if !boundary[cell] && !outside[cell] {
                    outside[cell] = true;
                    queue.push_back((r, c));
                }
            }
        }

        let stride = width + 1;
        let mut outside_prefix = vec![0; stride * (height + 1)];
        for row in 0..height {
            for col in 0..width {
                let here = usize::from(outside[row * width + col]);
                outside_prefix[(row + 1) * stride + col + 1] = here
                    + outside_prefix[row * stride + col + 1]
                    + outside_prefix[(row + 1) * stride + col]
                    - outside_prefix[row * stride + col];
            }
        }

        Ok(Self {
            cols,
            rows,
            outside_prefix,
        })
    }

    /// Whether every tile of the rectangle spanned by `a` and `b` is red, green or boundary.
    fn covers(&self, a: Tile, b: Tile) -> bool {
        let (col_a, col_b) = (self.cols.index_of(a.x), self.cols.index_of(b.x));
        let (row_a, row_b) = (self.rows.index_of(a.y), self.rows.index_of(b.y));
        let (top, bottom) = (row_a.min(row_b), row_a.max(row_b) + 1);
        let (left, right) = (col_a.min(col_b), col_a.max(col_b) + 1);

        let stride = self.cols.len + 1;
        let at = |row: usize, col: usize| self.outside_prefix[row * stride + col];
        at(bottom, right) + at(top, left) == at(top, right) + at(bottom, left)
    }
}

/// One compressed axis: sorted distinct corner coordinates and their indices.
struct Axis {
    values: Vec<i64>,
    indices: Vec<usize>,
    /// Number of compressed cells, gaps included
    len: usize,
}

impl Axis {
    fn new(coords: impl Iterator<Item = i64>) -> Self {
        let values: Vec<i64> = coords.sorted_unstable().dedup().collect();
        let mut indices = Vec::with_capacity(values.len());
        let mut next = 1;
        for (i, &value) in values.iter().enumerate() {
            if i > 0 && value > values[i - 1] + 1 {
                next += 1;
            }
            indices.push(next);
            next += 1;
        }
        Self {
            values,
            indices,
            len: next + 1,
        }
    }

    /// Compressed index of a corner coordinate; `value` must be one of the corners.
    fn index_of(&self, value: i64) -> usize {
        self.indices[self.values.partition_point(|&v| v < value)]
    }
}
