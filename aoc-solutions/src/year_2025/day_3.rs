use crate::utils::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

/// Digits of one battery bank, in order.
pub type Bank = Vec<u8>;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Bank>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    other => Err(anyhow!("unexpected character {:?}", other as char)),
                })
                .collect()
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}

fn total_joltage(banks: &[Bank], picks: usize) -> Result<String, SolveError> {
    let mut total = 0u64;
    for (idx, bank) in banks.iter().enumerate() {
        let joltage = largest_joltage(bank, picks).ok_or_else(|| {
            SolveError::failed(format!(
                "bank {} has {} batteries, need {}",
                idx + 1,
                bank.len(),
                picks
            ))
        })?;
        total += joltage;
    }
    Ok(total.to_string())
}

/// Largest number formed by `picks` digits of `bank`, kept in their original order.
///
/// Each digit is the first maximum of the window that still leaves enough digits for the
/// remaining picks. Returns `None` when the bank is too short.
pub fn largest_joltage(bank: &[u8], picks: usize) -> Option<u64> {
    if picks == 0 || bank.len() < picks {
        return None;
    }

    let mut value = 0u64;
    let mut from = 0;
    for remaining in (0..picks).rev() {
        let window = &bank[from..bank.len() - remaining];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, digit)| *digit)?;
        value = value * 10 + u64::from(digit);
        from += offset + 1;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../../inputs/day03_example.txt");

    fn digits(s: &str) -> Bank {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "357");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3121910778619");
    }

    #[test]
    fn test_largest_joltage_per_bank() {
        assert_eq!(largest_joltage(&digits("987654321111111"), 2), Some(98));
        assert_eq!(largest_joltage(&digits("811111111111119"), 2), Some(89));
        assert_eq!(largest_joltage(&digits("234234234234278"), 2), Some(78));
        assert_eq!(largest_joltage(&digits("818181911112111"), 2), Some(92));
        assert_eq!(
            largest_joltage(&digits("234234234234278"), 12),
            Some(434234234278)
        );
    }

    #[test]
    fn test_first_maximum_wins() {
        // taking the later 9 would leave only a 1 behind it
        assert_eq!(largest_joltage(&digits("9291"), 2), Some(99));
        assert_eq!(largest_joltage(&digits("12"), 2), Some(12));
        assert_eq!(largest_joltage(&digits("1"), 2), None);
    }

    #[test]
    fn test_short_bank_is_solve_error() {
        let mut shared = Solver::parse("12345\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
