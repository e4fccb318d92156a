use crate::utils::parse_lines;
use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["simulation"])]
pub struct Solver;

/// A single turn of the dial. `L` is negative, `R` positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(pub i32);

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<Rotation>,
    summary: Option<DialSummary>,
}

#[derive(Debug, Clone, Copy)]
struct DialSummary {
    landed_on_zero: u32,
    clicks_on_zero: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rotations = parse_lines(input, |line| {
            let (direction, amount) = line
                .split_at_checked(1)
                .with_context(|| format!("expected a rotation like L10, found {line:?}"))?;
            let amount: i32 = amount
                .parse()
                .with_context(|| format!("invalid rotation amount {amount:?}"))?;
            if amount < 0 {
                bail!("rotation amount must be non-negative");
            }
            match direction {
                "L" => Ok(Rotation(-amount)),
                "R" => Ok(Rotation(amount)),
                _ => bail!("rotation must start with 'L' or 'R', found {direction:?}"),
            }
        })?;

        Ok(SharedData {
            rotations,
            summary: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarise(shared).landed_on_zero.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarise(shared).clicks_on_zero.to_string())
    }
}

fn summarise(shared: &mut SharedData) -> DialSummary {
    *shared.summary.get_or_insert_with(|| {
        let mut position = DIAL_START;
        let mut summary = DialSummary {
            landed_on_zero: 0,
            clicks_on_zero: 0,
        };

        for &rotation in &shared.rotations {
            let (next, clicks) = turn(position, rotation);
            position = next;
            summary.clicks_on_zero += clicks;
            if position == 0 {
                summary.landed_on_zero += 1;
            }
        }

        log::debug!("dial finished at {position}");
        summary
    })
}

/// Apply one rotation; returns the new position and how many clicks touched zero.
fn turn(position: u32, Rotation(amount): Rotation) -> (u32, u32) {
    let steps = amount.unsigned_abs();
    if amount >= 0 {
        let clicks = (position + steps) / DIAL_SIZE;
        ((position + steps) % DIAL_SIZE, clicks)
    } else {
        let clicks = if position == 0 {
            steps / DIAL_SIZE
        } else if steps >= position {
            (steps - position) / DIAL_SIZE + 1
        } else {
            0
        };
        let back = steps % DIAL_SIZE;
        ((position + DIAL_SIZE - back) % DIAL_SIZE, clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = include_str!("../../../inputs/day01_example.txt");

    fn solve_both(input: &str) -> (String, String) {
        let mut shared = Solver::parse(input).unwrap();
        (
            Solver::solve_part(&mut shared, 1).unwrap(),
            Solver::solve_part(&mut shared, 2).unwrap(),
        )
    }

    #[test]
    fn test_example() {
        assert_eq!(solve_both(EXAMPLE), ("3".to_string(), "6".to_string()));
    }

    #[test]
    fn test_turn_counts_every_pass() {
        assert_eq!(turn(50, Rotation(1000)), (50, 10));
        assert_eq!(turn(50, Rotation(-50)), (0, 1));
        assert_eq!(turn(0, Rotation(-5)), (95, 0));
        assert_eq!(turn(0, Rotation(-100)), (0, 1));
        assert_eq!(turn(95, Rotation(5)), (0, 1));
        assert_eq!(turn(10, Rotation(-9)), (1, 0));
    }

    #[test]
    fn test_parse_errors() {
        let err = Solver::parse("R10\nX5\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
        assert!(Solver::parse("Labc").is_err());
    }

    #[test]
    fn test_multibyte_direction_is_reported() {
        let err = Solver::parse("R1\né5\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFormat(
                "(line 2) expected a rotation like L10, found \"é5\"".to_string()
            )
        );
    }
}
