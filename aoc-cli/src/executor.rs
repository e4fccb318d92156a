//! Run harness: loads a day's input and solves the requested parts

use crate::error::CliError;
use crate::inputs::{InputStore, read_input};
use aoc_solver::{FactoryInfo, SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::path::{Path, PathBuf};

/// Where `run` reads its input from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Puzzle,
    Example,
    File(PathBuf),
}

impl InputSource {
    pub fn from_flags(example: bool, input: Option<PathBuf>) -> Self {
        match (input, example) {
            (Some(path), _) => InputSource::File(path),
            (None, true) => InputSource::Example,
            (None, false) => InputSource::Puzzle,
        }
    }
}

/// What happened to one requested part
#[derive(Debug, Clone, PartialEq)]
pub enum PartOutcome {
    Solved { answer: String, duration: TimeDelta },
    NotImplemented,
    Failed(String),
}

/// Everything `aoc run` has to show for one day
#[derive(Debug, Clone)]
pub struct RunReport {
    pub year: u16,
    pub day: u8,
    pub source: InputSource,
    pub empty_input: bool,
    /// `None` when parsing failed
    pub parse_duration: Option<TimeDelta>,
    pub parts: Vec<(u8, PartOutcome)>,
}

/// Executor bound to one year's registered solvers
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year: u16,
}

impl Executor {
    pub fn new(registry: SolverRegistry, root: &Path, year: u16) -> Self {
        Self {
            registry,
            inputs: InputStore::new(root),
            year,
        }
    }

    /// Registered days of the configured year, ordered by day
    pub fn status(&self) -> Vec<FactoryInfo> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| info.year == self.year)
            .collect()
    }

    /// Solve `part` of `day` (both parts when `None`).
    ///
    /// Fails only when the day is not registered or the input is missing; parse and solve
    /// errors are reported per part.
    pub fn run(
        &self,
        day: u8,
        part: Option<u8>,
        source: InputSource,
    ) -> Result<RunReport, CliError> {
        let info = self
            .registry
            .storage()
            .get_info(self.year, day)
            .ok_or(CliError::DayNotFound {
                year: self.year,
                day,
            })?;

        let input = match &source {
            InputSource::Puzzle => self.inputs.get(day, false)?,
            InputSource::Example => self.inputs.get(day, true)?,
            InputSource::File(path) => read_input(path)?,
        };

        let requested: Vec<u8> = part.map_or_else(|| vec![1, 2], |p| vec![p]);
        let mut report = RunReport {
            year: self.year,
            day,
            source,
            empty_input: input.is_empty(),
            parse_duration: None,
            parts: Vec::with_capacity(requested.len()),
        };

        let mut solver = match self.registry.create_solver(self.year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                log::debug!("{}/{:02} could not be parsed: {}", self.year, day, e);
                let message = e.to_string();
                report.parts = requested
                    .into_iter()
                    .map(|p| {
                        let outcome = if p > info.parts {
                            PartOutcome::NotImplemented
                        } else {
                            PartOutcome::Failed(message.clone())
                        };
                        (p, outcome)
                    })
                    .collect();
                return Ok(report);
            }
        };
        report.parse_duration = Some(solver.parse_duration());

        for p in requested {
            let outcome = if p > info.parts {
                PartOutcome::NotImplemented
            } else {
                match solver.solve(p) {
                    Ok(result) => {
                        log::debug!(
                            "{}/{:02} part {} solved in {}µs",
                            self.year,
                            day,
                            p,
                            result.duration().num_microseconds().unwrap_or(0)
                        );
                        PartOutcome::Solved {
                            duration: result.duration(),
                            answer: result.answer,
                        }
                    }
                    Err(SolveError::PartNotImplemented(_)) => PartOutcome::NotImplemented,
                    Err(e) => PartOutcome::Failed(SolverError::from(e).to_string()),
                }
            };
            report.parts.push((p, outcome));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolverRegistryBuilder};
    use std::fs;
    use tempfile::TempDir;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Totals;

    impl AocParser for Totals {
        type SharedData<'a> = Vec<u64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|line| {
                    line.trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {line}")))
                })
                .collect()
        }
    }

    impl PartSolver<1> for Totals {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<u64>().to_string())
        }
    }

    impl PartSolver<2> for Totals {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared
                .iter()
                .max()
                .map(|max| max.to_string())
                .ok_or_else(|| SolveError::failed("no numbers"))
        }
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 1)]
    struct HalfDone;

    impl AocParser for HalfDone {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input)
        }
    }

    impl PartSolver<1> for HalfDone {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.len().to_string())
        }
    }

    fn executor(temp: &TempDir) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Totals>(2025, 1)
            .unwrap()
            .register_solver::<HalfDone>(2025, 2)
            .unwrap()
            .register_solver::<Totals>(2024, 1)
            .unwrap()
            .build();
        fs::create_dir_all(temp.path().join("inputs")).unwrap();
        Executor::new(registry, temp.path(), 2025)
    }

    fn write_input(temp: &TempDir, name: &str, content: &str) {
        fs::write(temp.path().join("inputs").join(name), content).unwrap();
    }

    fn answer(outcome: &PartOutcome) -> &str {
        match outcome {
            PartOutcome::Solved { answer, .. } => answer,
            other => panic!("expected an answer, got {other:?}"),
        }
    }

    #[test]
    fn test_run_both_parts() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp);
        write_input(&temp, "day01.txt", "3\n9\n4\n\n");

        let report = executor.run(1, None, InputSource::Puzzle).unwrap();
        assert!(!report.empty_input);
        assert!(report.parse_duration.is_some());
        assert_eq!(report.parts.len(), 2);
        assert_eq!(answer(&report.parts[0].1), "16");
        assert_eq!(answer(&report.parts[1].1), "9");
    }

    #[test]
    fn test_run_single_part_from_example() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp);
        write_input(&temp, "day01.txt", "100");
        write_input(&temp, "day01_example.txt", "1\n2");

        let report = executor.run(1, Some(2), InputSource::Example).unwrap();
        assert_eq!(report.parts.len(), 1);
        assert_eq!(report.parts[0].0, 2);
        assert_eq!(answer(&report.parts[0].1), "2");
    }

    #[test]
    fn test_run_from_file() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp);
        let path = temp.path().join("custom.txt");
        fs::write(&path, "5\n6").unwrap();

        let report = executor.run(1, Some(1), InputSource::File(path)).unwrap();
        assert_eq!(answer(&report.parts[0].1), "11");
    }

    #[test]
    fn test_unknown_day_and_missing_input() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp);

        assert!(matches!(
            executor.run(7, None, InputSource::Puzzle),
            Err(CliError::DayNotFound { year: 2025, day: 7 })
        ));
        assert!(matches!(
            executor.run(1, None, InputSource::Example),
            Err(CliError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_parse_error_reported_per_part() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp);
        write_input(&temp, "day01.txt", "1\nseven");

        let report = executor.run(1, None, InputSource::Puzzle).unwrap();
        assert_eq!(report.parse_duration, None);
        for (_, outcome) in &report.parts {
            assert!(matches!(outcome, PartOutcome::Failed(msg) if msg.contains("not a number: seven")));
        }
    }

    #[test]
    fn test_solve_error_does_not_stop_other_part() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp);
        write_input(&temp, "day01.txt", "");

        let report = executor.run(1, None, InputSource::Puzzle).unwrap();
        assert!(report.empty_input);
        assert_eq!(answer(&report.parts[0].1), "0");
        assert!(matches!(&report.parts[1].1, PartOutcome::Failed(msg) if msg.contains("no numbers")));
    }

    #[test]
    fn test_part_beyond_max_parts_is_not_implemented() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp);
        write_input(&temp, "day02.txt", "abc");

        let report = executor.run(2, None, InputSource::Puzzle).unwrap();
        assert_eq!(answer(&report.parts[0].1), "3");
        assert_eq!(report.parts[1].1, PartOutcome::NotImplemented);
    }

    #[test]
    fn test_status_filters_year() {
        let temp = TempDir::new().unwrap();
        let status = executor(&temp).status();
        let days: Vec<(u16, u8, u8)> = status.iter().map(|i| (i.year, i.day, i.parts)).collect();
        assert_eq!(days, vec![(2025, 1, 2), (2025, 2, 1)]);
    }

    #[test]
    fn test_input_source_flags() {
        assert_eq!(InputSource::from_flags(false, None), InputSource::Puzzle);
        assert_eq!(InputSource::from_flags(true, None), InputSource::Example);
        assert_eq!(
            InputSource::from_flags(false, Some(PathBuf::from("a.txt"))),
            InputSource::File(PathBuf::from("a.txt"))
        );
    }
}
