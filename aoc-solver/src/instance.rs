//! Parsed solver instances and per-part timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A day's parsed input, ready to solve any of its parts.
///
/// The input is parsed exactly once, in [`SolverInstance::new`]; every part then works on
/// the same shared data, so a part may reuse what an earlier one stored there.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        log::trace!(
            "parsed {}/{:02} in {}µs",
            year,
            day,
            (parse_end - parse_start).num_microseconds().unwrap_or(0)
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased view of a [`SolverInstance`], as handed out by the registry.
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, SolverInstance};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Count;
///
/// impl AocParser for Count {
///     type SharedData<'a> = usize;
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// impl PartSolver<1> for Count {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut solver: Box<dyn DynSolver> =
///     Box::new(SolverInstance::<Count>::new(2025, 1, "x\ny\nz").unwrap());
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
/// assert_eq!(solver.parts(), 1);
/// ```
pub trait DynSolver {
    /// Solve the specified part, timing the call
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError::PartOutOfRange)` - The part is above the solver's `PARTS`
    /// * `Err(SolveError)` - Solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the year for this solver
    fn year(&self) -> u16;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of implemented parts
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
