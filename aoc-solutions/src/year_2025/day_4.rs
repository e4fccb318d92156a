use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';
const CROWDED: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some(bad) = grid
            .points()
            .find(|&p| !matches!(grid.get(p), Some(ROLL | EMPTY)))
        {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) unexpected cell {:?}",
                bad.row + 1,
                grid.get(bad).map(char::from).unwrap_or_default()
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .points()
            .filter(|&p| is_accessible(shared, p))
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // part 1 may run afterwards on the same data
        let mut grid = shared.clone();
        Ok(remove_accessible(&mut grid).to_string())
    }
}

/// A roll with fewer than four rolls among its eight neighbours.
pub fn is_accessible(grid: &Grid, p: Point) -> bool {
    grid.get(p) == Some(ROLL)
        && grid
            .neighbours(p)
            .filter(|&n| grid.get(n) == Some(ROLL))
            .count()
            < CROWDED
}

/// Remove accessible rolls until none is left; returns how many were removed.
///
/// Works off a queue seeded with the initially accessible rolls. Each removal queues the
/// neighbours it made accessible, and every dequeued cell is checked again since it may
/// have been removed through an earlier entry.
pub fn remove_accessible(grid: &mut Grid) -> usize {
    let mut queue: VecDeque<Point> = grid.points().filter(|&p| is_accessible(grid, p)).collect();
    let mut removed = 0;

    while let Some(p) = queue.pop_front() {
        if !is_accessible(grid, p) {
            continue;
        }
        grid.set(p, EMPTY);
        removed += 1;

        queue.extend(grid.neighbours(p).filter(|&n| is_accessible(grid, n)));
    }

    log::debug!("removed {removed} rolls");
    removed
}
