//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No solver registered for the requested day
    #[error("Day {day} of {year} not found. Run `aoc new {day}` to create it.")]
    DayNotFound { year: u16, day: u8 },

    /// Input file missing on disk
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// User declined an overwrite
    #[error("Aborted: {0}")]
    Aborted(String),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}
