//! Advent of Code Solver Library
//!
//! The small framework every day of the workspace plugs into. A day implements
//! [`AocParser`] once and [`PartSolver<N>`] per part; `#[derive(AocSolver)]` ties those into
//! [`Solver`], and `#[derive(AutoRegisterSolver)]` makes the day discoverable by the CLI
//! through a [`SolverRegistry`].
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat(format!("not a number: {line}")))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         shared
//!             .iter()
//!             .max()
//!             .map(|max| max.to_string())
//!             .ok_or_else(|| SolveError::failed("empty input"))
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Depths>(2025, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2025, 1, "1\n5\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```
//!
//! # Completion
//!
//! `#[aoc_solver(max_parts = N)]` is the explicit marker of how many parts a day has
//! finished. The CLI status table and the run harness read it from the registry instead of
//! guessing from the solution source.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
