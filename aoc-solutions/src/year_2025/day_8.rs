use crate::utils::parse_lines;
use crate::utils::union_find::UnionFind;
use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// Connections made for the real puzzle in part 1
pub const PUZZLE_CONNECTIONS: usize = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coord3 {
    pub fn distance_squared(&self, other: &Coord3) -> i64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }
}

#[derive(Debug)]
pub struct Playground {
    boxes: Vec<Coord3>,
    /// Index pairs, closest first; built on first use
    pairs: Option<Vec<(usize, usize)>>,
}

impl Playground {
    pub fn new(boxes: Vec<Coord3>) -> Self {
        Self { boxes, pairs: None }
    }

    fn pairs_by_distance(&mut self) -> &[(usize, usize)] {
        let boxes = &self.boxes;
        self.pairs.get_or_insert_with(|| {
            let mut keyed: Vec<(i64, usize, usize)> = (0..boxes.len())
                .tuple_combinations()
                .map(|(i, j)| (boxes[i].distance_squared(&boxes[j]), i, j))
                .collect();
            keyed.sort_unstable();
            log::debug!("sorted {} candidate connections", keyed.len());
            keyed.into_iter().map(|(_, i, j)| (i, j)).collect()
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Playground;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let boxes = parse_lines(input, |line| {
            let coords: Vec<i64> = line
                .split(',')
                .map(|part| {
                    let part = part.trim();
                    part.parse::<i64>()
                        .with_context(|| format!("invalid coordinate {part:?}"))
                })
                .collect::<anyhow::Result<_>>()?;
            ensure!(coords.len() == 3, "expected `x,y,z`, found {line:?}");
            Ok(Coord3 {
                x: coords[0],
                y: coords[1],
                z: coords[2],
            })
        })?;
        Ok(Playground::new(boxes))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_circuits_product(shared, PUZZLE_CONNECTIONS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = closing_connection(shared)?;
        Ok((a.x * b.x).to_string())
    }
}

/// Join the `connections` closest pairs and multiply the sizes of the three largest circuits.
///
/// With fewer than three circuits, the product covers the ones there are.
pub fn largest_circuits_product(playground: &mut Playground, connections: usize) -> u64 {
    let mut circuits = UnionFind::new(0..playground.boxes.len());
    for (a, b) in playground.pairs_by_distance().iter().take(connections) {
        circuits.union(a, b);
    }

    let mut sizes = circuits.component_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).map(|&size| size as u64).product()
}

/// The pair of boxes whose connection leaves everything in a single circuit.
pub fn closing_connection(playground: &mut Playground) -> Result<(Coord3, Coord3), SolveError> {
    let count = playground.boxes.len();
    if count < 2 {
        return Err(SolveError::failed(format!(
            "need at least two junction boxes, found {count}"
        )));
    }

    let mut circuits = UnionFind::new(0..count);
    let mut remaining = count;
    let pairs = playground.pairs_by_distance().to_vec();
    for (a, b) in pairs {
        if circuits.union(&a, &b) {
            remaining -= 1;
            if remaining == 1 {
                return Ok((playground.boxes[a], playground.boxes[b]));
            }
        }
    }

    Err(SolveError::failed("junction boxes never form one circuit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../../inputs/day08_example.txt");

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(largest_circuits_product(&mut shared, 10), 40);
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "25272");
    }

    #[test]
    fn test_closest_pair_comes_first() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        let &(a, b) = shared.pairs_by_distance().first().unwrap();
        let (a, b) = (shared.boxes[a], shared.boxes[b]);
        assert_eq!(
            (a, b),
            (
                Coord3 { x: 162, y: 817, z: 812 },
                Coord3 { x: 425, y: 690, z: 689 }
            )
        );
    }

    #[test]
    fn test_fewer_than_three_circuits() {
        let mut shared = Solver::parse("0,0,0\n1,0,0\n10,0,0\n").unwrap();
        assert_eq!(largest_circuits_product(&mut shared, 1), 2);
        assert_eq!(largest_circuits_product(&mut shared, 5), 3);
    }

    #[test]
    fn test_single_box_cannot_close() {
        let mut shared = Solver::parse("1,2,3\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Solver::parse("1,2,3\n4,5\n").unwrap_err(),
            ParseError::InvalidFormat("(line 2) expected `x,y,z`, found \"4,5\"".to_string())
        );
    }
}
