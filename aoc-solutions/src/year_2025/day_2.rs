use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["math"])]
pub struct Solver;

/// Inclusive id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<IdRange>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .enumerate()
            .map(|(idx, chunk)| {
                parse_range(chunk)
                    .map_err(|e| ParseError::InvalidFormat(format!("(range {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

fn parse_range(chunk: &str) -> anyhow::Result<IdRange> {
    let (start, end) = chunk
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `start-end`, found {chunk:?}"))?;
    let start: u64 = start.parse().with_context(|| format!("invalid start {start:?}"))?;
    let end: u64 = end.parse().with_context(|| format!("invalid end {end:?}"))?;
    ensure!(start <= end, "start {start} is after end {end}");
    Ok(IdRange { start, end })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .flat_map(|r| repeated_patterns(r.start, r.end, 2))
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|r| {
                (2..=digit_count(r.end))
                    .map(|repetition| repeated_patterns(r.start, r.end, repetition))
                    .kmerge()
                    .dedup()
                    .sum::<u64>()
            })
            .sum::<u64>()
            .to_string())
    }
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Numbers in `[start, end]` made of one digit block written `repetition` times, ascending.
///
/// A number with block `b` of length `len` equals `b * (1 + 10^len + 10^(2 len) + ...)`, so
/// each block length contributes a contiguous run of blocks. Fewer than two repetitions
/// yields nothing.
///
/// ```
/// use aoc_solutions::year_2025::day_2::repeated_patterns;
///
/// let found: Vec<u64> = repeated_patterns(1000, 2000, 2).collect();
/// assert_eq!(found, vec![1010, 1111, 1212, 1313, 1414, 1515, 1616, 1717, 1818, 1919]);
/// assert_eq!(repeated_patterns(1000, 2000, 4).collect::<Vec<_>>(), vec![1111]);
/// ```
pub fn repeated_patterns(start: u64, end: u64, repetition: u32) -> impl Iterator<Item = u64> {
    let (low, high) = (u128::from(start), u128::from(end));
    let max_block_len = if repetition < 2 {
        0
    } else {
        digit_count(end) / repetition
    };

    (1..=max_block_len).flat_map(move |block_len| {
        let multiplier: u128 = (0..repetition).map(|i| 10u128.pow(block_len * i)).sum();
        let first = 10u128.pow(block_len - 1).max(low.div_ceil(multiplier));
        let last = (10u128.pow(block_len) - 1).min(high / multiplier);
        // block * multiplier <= end, so it fits back into u64
        (first..=last).map(move |block| (block * multiplier) as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../../inputs/day02_example.txt");

    fn patterns(start: u64, end: u64, repetition: u32) -> Vec<u64> {
        repeated_patterns(start, end, repetition).collect()
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1227775554");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4174379265");
    }

    #[test]
    fn test_two_digit_doubles() {
        assert_eq!(patterns(10, 99, 2), (1..=9u64).map(|d| d * 11).collect::<Vec<_>>());
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(patterns(100, 110, 2), Vec::<u64>::new());
        assert_eq!(patterns(100, 1010, 2), vec![1010]);
        assert_eq!(patterns(1010, 1020, 2), vec![1010]);
        assert_eq!(
            patterns(1030, 2000, 2),
            vec![1111, 1212, 1313, 1414, 1515, 1616, 1717, 1818, 1919]
        );
    }

    #[test]
    fn test_repetition_counts() {
        for repetition in [0, 1, 3, 5] {
            assert!(patterns(1000, 2000, repetition).is_empty(), "k = {repetition}");
        }
        assert_eq!(patterns(1000, 2000, 4), vec![1111]);
        assert_eq!(patterns(1000, 2000, 2).len(), 10);
    }

    #[test]
    fn test_parse_rejects_reversed_range() {
        let err = Solver::parse("11-22,30-20").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFormat("(range 2) start 30 is after end 20".to_string())
        );
    }
}
