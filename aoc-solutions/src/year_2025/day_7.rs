use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const START: u8 = b'S';
const SPLITTER: u8 = b'^';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "dp"])]
pub struct Solver;

#[derive(Debug)]
pub struct Manifold {
    grid: Grid,
    start: Point,
    beams: Option<BeamReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamReport {
    /// Splitters reached by at least one beam
    pub splits: usize,
    /// Paths that make it to the bottom row
    pub timelines: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Manifold;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(START)
            .ok_or_else(|| ParseError::MissingData("no beam entry 'S'".to_string()))?;
        Ok(Manifold {
            grid,
            start,
            beams: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(report(shared).splits.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(report(shared).timelines.to_string())
    }
}

fn report(shared: &mut Manifold) -> BeamReport {
    *shared
        .beams
        .get_or_insert_with(|| trace_beams(&shared.grid, shared.start))
}

/// Push the beam down from `start` one row at a time.
///
/// `timelines[col]` holds how many distinct paths are at that column of the current row.
/// A splitter forwards its count to both horizontal neighbours, which carry on downward
/// from the next row. Splitters on the bottom row are still counted as hit but no longer
/// split, since every path there has already arrived.
pub fn trace_beams(grid: &Grid, start: Point) -> BeamReport {
    let mut timelines = vec![0u64; grid.cols()];
    if let Some(slot) = timelines.get_mut(start.col) {
        *slot = 1;
    }
    let mut splits = 0;
    let last_row = grid.rows().saturating_sub(1);

    for row in start.row..last_row {
        let mut next = vec![0u64; grid.cols()];
        for (col, &count) in timelines.iter().enumerate() {
            if count == 0 {
                continue;
            }
            if grid.get(Point::new(row, col)) == Some(SPLITTER) {
                splits += 1;
                if let Some(left) = col.checked_sub(1) {
                    next[left] += count;
                }
                if let Some(right) = next.get_mut(col + 1) {
                    *right += count;
                }
            } else {
                next[col] += count;
            }
        }
        timelines = next;
    }

    splits += timelines
        .iter()
        .enumerate()
        .filter(|&(col, &count)| {
            count > 0 && grid.get(Point::new(last_row, col)) == Some(SPLITTER)
        })
        .count();

    let report = BeamReport {
        splits,
        timelines: timelines.iter().sum(),
    };
    log::debug!("beam trace: {report:?}");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../../inputs/day07_example.txt");

    fn trace(input: &str) -> BeamReport {
        let shared = Solver::parse(input).unwrap();
        trace_beams(&shared.grid, shared.start)
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "20");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "28");
    }

    #[test]
    fn test_small_manifold() {
        let maze = "...S...\n.......\n...^...\n.......\n..^.^..\n.......\n";
        assert_eq!(
            trace(maze),
            BeamReport {
                splits: 3,
                timelines: 4
            }
        );
    }

    #[test]
    fn test_merged_beams_hit_once() {
        // the two middle splitters both feed the bottom one
        let maze = "..S..\n..^..\n.....\n.^.^.\n.....\n..^..\n.....\n";
        assert_eq!(
            trace(maze),
            BeamReport {
                splits: 4,
                timelines: 6
            }
        );
    }

    #[test]
    fn test_edge_splitter_drops_off_grid_side() {
        assert_eq!(
            trace("S.\n^.\n..\n"),
            BeamReport {
                splits: 1,
                timelines: 1
            }
        );
    }

    #[test]
    fn test_missing_start() {
        assert!(matches!(
            Solver::parse("...\n.^.\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
