//! Parser and solver traits implemented by every day

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data shared by all parts of a day.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Rotations;
///
/// impl AocParser for Rotations {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Rotations::parse("3\n-4").unwrap(), vec![3, -4]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to memoize between each other.
    ///
    /// Owned structures are the common case; borrow from the input (`&'a str`) when the
    /// parts can work on the raw text directly.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Splitting parts into separate impls keeps each answer independently testable, and lets
/// `#[derive(AocSolver)]` build the runtime dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Sums;
///
/// impl AocParser for Sums {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split(',')
///             .map(|n| n.trim().parse().map_err(|_| ParseError::InvalidFormat(n.into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sums {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u64>().to_string())
///     }
/// }
///
/// let mut shared = Sums::parse("1, 2, 3").unwrap();
/// assert_eq!(<Sums as PartSolver<1>>::solve(&mut shared).unwrap(), "6");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Compute the answer for part `N`.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime dispatch over the parts of a day.
///
/// `PARTS` doubles as the completion marker: parts `1..=PARTS` are implemented and counted
/// as stars, anything above is reported as not implemented. Usually derived:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Lines {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let mut shared = Lines::parse("a\nb").unwrap();
/// assert_eq!(Lines::PARTS, 1);
/// assert_eq!(Lines::solve_part(&mut shared, 1).unwrap(), "2");
/// assert!(matches!(Lines::solve_part(&mut shared, 2), Err(SolveError::PartNotImplemented(2))));
/// ```
pub trait Solver: AocParser {
    /// Number of implemented parts
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - No `PartSolver` is wired for the part
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds checking on top of [`Solver::solve_part`].
pub trait SolverExt: Solver {
    /// Reject part 0 and parts above `PARTS` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
