//! Output formatting for run reports and the status table

use crate::executor::{InputSource, PartOutcome, RunReport};
use aoc_solver::FactoryInfo;
use chrono::TimeDelta;
use std::io::{self, Write};

const MAX_STARS: usize = 50;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a run report to stdout, warnings and errors to stderr
    pub fn print_run(&self, report: &RunReport) -> io::Result<()> {
        self.write_run(report, &mut io::stdout().lock(), &mut io::stderr().lock())
    }

    fn write_run<O: Write, E: Write>(
        &self,
        report: &RunReport,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        if report.empty_input {
            writeln!(err, "Warning: input file is empty")?;
        }

        if !self.quiet {
            let source = match &report.source {
                InputSource::Puzzle => String::new(),
                InputSource::Example => " (example)".to_string(),
                InputSource::File(path) => format!(" ({})", path.display()),
            };
            let parse_timing = report
                .parse_duration
                .map(|d| format!(", parsed in {}", format_duration(d)))
                .unwrap_or_default();
            writeln!(
                out,
                "{}/{:02}{}{}",
                report.year, report.day, source, parse_timing
            )?;
        }

        for (part, outcome) in &report.parts {
            match outcome {
                PartOutcome::Solved { answer, duration } => {
                    if self.quiet {
                        writeln!(out, "{}", answer)?;
                    } else {
                        writeln!(
                            out,
                            "Part {}: {} ({})",
                            part,
                            answer,
                            format_duration(*duration)
                        )?;
                    }
                }
                PartOutcome::NotImplemented => {
                    writeln!(err, "Warning: Part {} not implemented", part)?;
                }
                PartOutcome::Failed(message) => {
                    writeln!(err, "Part {}: Error - {}", part, message)?;
                }
            }
        }
        Ok(())
    }

    /// Print the status table for `year`
    pub fn print_status(&self, year: u16, days: &[FactoryInfo]) {
        print!("{}", render_status(year, days));
    }
}

/// Star table for every registered day, then the overall progress line
pub fn render_status(year: u16, days: &[FactoryInfo]) -> String {
    if days.is_empty() {
        return format!("No solutions registered for {year}. Run `aoc new 1` to get started.\n");
    }

    let mut table = format!("Advent of Code {year}\nDay  Part 1  Part 2\n");
    let mut stars = 0;
    for info in days {
        let star = |part: u8| if info.parts >= part { '★' } else { '☆' };
        table.push_str(&format!("{:>3}  {:^6}  {:^6}\n", info.day, star(1), star(2)));
        stars += usize::from(info.parts.min(2));
    }
    table.push_str(&format!("\nProgress: {stars}/{MAX_STARS}\n"));
    table
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
