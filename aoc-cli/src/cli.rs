//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code workspace helper
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Scaffold, run and track Advent of Code solutions", version)]
pub struct Args {
    /// Puzzle year [env: AOC_YEAR] [default: 2025]
    #[arg(short, long, global = true)]
    pub year: Option<u16>,

    /// Workspace root holding `inputs/` and `aoc-solutions/` [env: AOC_ROOT] [default: .]
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scaffold a new day's solution, test and input files
    New {
        /// Day number (1-25)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Puzzle title for the generated doc comment
        #[arg(long)]
        title: Option<String>,
    },

    /// Run a day's solution
    Run {
        /// Day number (1-25)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Run only this part
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,

        /// Use the example input instead of the puzzle input
        #[arg(short, long)]
        example: bool,

        /// Read input from this file instead
        #[arg(long, conflicts_with = "example")]
        input: Option<PathBuf>,
    },

    /// Show which parts are implemented
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_flags() {
        let args = Args::try_parse_from(["aoc", "run", "5", "--part", "2", "-e", "-q"]).unwrap();
        assert!(args.quiet);
        assert_eq!(
            args.command,
            Command::Run {
                day: 5,
                part: Some(2),
                example: true,
                input: None
            }
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from(["aoc", "status", "--year", "2024", "--root", "/tmp/x"])
            .unwrap();
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.root, Some(PathBuf::from("/tmp/x")));
        assert_eq!(args.command, Command::Status);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Args::try_parse_from(["aoc", "run", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "run", "3", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "new", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc", "run", "3", "-e", "--input", "a.txt"]).is_err());
    }
}
