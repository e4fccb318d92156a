use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["ranges", "binary-search"])]
pub struct Solver;

/// Inclusive range of ingredient ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub const fn size(&self) -> u64 {
        self.end - self.start + 1
    }
}

#[derive(Debug)]
pub struct Inventory {
    /// Sorted and non-overlapping
    fresh: Vec<Span>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut spans = Vec::new();
        let mut available = Vec::new();
        let mut in_ranges = true;

        for (line_idx, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                in_ranges = false;
                continue;
            }
            let parsed = if in_ranges {
                parse_span(line).map(|span| spans.push(span))
            } else {
                line.parse::<u64>()
                    .map(|id| available.push(id))
                    .with_context(|| format!("invalid ingredient id {line:?}"))
            };
            parsed.map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
            })?;
        }

        if spans.is_empty() {
            return Err(ParseError::MissingData("no fresh id ranges".to_string()));
        }

        Ok(Inventory {
            fresh: merge_spans(spans),
            available,
        })
    }
}

fn parse_span(line: &str) -> anyhow::Result<Span> {
    let (start, end) = line
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `start-end`, found {line:?}"))?;
    let start: u64 = start.parse().with_context(|| format!("invalid start {start:?}"))?;
    let end: u64 = end.parse().with_context(|| format!("invalid end {end:?}"))?;
    ensure!(start <= end, "start {start} is after end {end}");
    Ok(Span::new(start, end))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .available
            .iter()
            .filter(|&&id| contains(&shared.fresh, id))
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.fresh.iter().map(Span::size).sum::<u64>().to_string())
    }
}

/// Sort `spans` and fold overlapping ones together.
///
/// A span merges into the previous one when it starts at or before the previous end.
/// Spans that only touch, like `1-5` and `6-10`, stay separate.
///
/// ```
/// use aoc_solutions::year_2025::day_5::{Span, merge_spans};
///
/// let merged = merge_spans(vec![Span::new(1, 3), Span::new(5, 7), Span::new(2, 4)]);
/// assert_eq!(merged, vec![Span::new(1, 4), Span::new(5, 7)]);
/// ```
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(previous) if span.start <= previous.end => {
                previous.end = previous.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Whether `id` falls in one of the sorted, disjoint `spans`. Bounds are inclusive.
pub fn contains(spans: &[Span], id: u64) -> bool {
    let idx = spans.partition_point(|span| span.end < id);
    spans.get(idx).is_some_and(|span| span.start <= id)
}
