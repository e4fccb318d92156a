use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sum,
    Product,
}

const OPERATIONS: [(&str, Operation); 2] = [("+", Operation::Sum), ("*", Operation::Product)];

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        OPERATIONS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, op)| op)
    }

    pub fn apply(self, numbers: &[u64]) -> u64 {
        match self {
            Operation::Sum => numbers.iter().sum(),
            Operation::Product => numbers.iter().product(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub numbers: Vec<u64>,
    pub operation: Operation,
}

impl Problem {
    pub fn answer(&self) -> u64 {
        self.operation.apply(&self.numbers)
    }
}

/// The worksheet read both ways.
#[derive(Debug)]
pub struct Worksheet {
    by_rows: Vec<Problem>,
    by_columns: Vec<Problem>,
}

impl AocParser for Solver {
    type SharedData<'a> = Worksheet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        let operator_line = lines
            .pop()
            .ok_or_else(|| ParseError::MissingData("empty worksheet".to_string()))?;
        if lines.is_empty() {
            return Err(ParseError::MissingData("no number rows".to_string()));
        }

        let operations = operator_line
            .split_whitespace()
            .map(|symbol| {
                Operation::from_symbol(symbol).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("unknown operation {symbol:?}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let invalid = |e: anyhow::Error| ParseError::InvalidFormat(format!("{e:#}"));
        Ok(Worksheet {
            by_rows: read_rows(&lines, &operations).map_err(invalid)?,
            by_columns: read_columns(&lines, &operations).map_err(invalid)?,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grand_total(&shared.by_rows).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grand_total(&shared.by_columns).to_string())
    }
}

fn grand_total(problems: &[Problem]) -> u64 {
    problems.iter().map(Problem::answer).sum()
}

/// Whitespace-separated numbers; problem `i` is the `i`-th number of every row.
fn read_rows(lines: &[&str], operations: &[Operation]) -> anyhow::Result<Vec<Problem>> {
    let mut problems: Vec<Problem> = operations
        .iter()
        .map(|&operation| Problem {
            numbers: Vec::with_capacity(lines.len()),
            operation,
        })
        .collect();

    for (line_idx, line) in lines.iter().enumerate() {
        let numbers = line
            .split_whitespace()
            .map(|n| n.parse::<u64>().with_context(|| format!("invalid number {n:?}")))
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("(line {})", line_idx + 1))?;
        ensure!(
            numbers.len() == problems.len(),
            "(line {}) expected {} numbers, found {}",
            line_idx + 1,
            problems.len(),
            numbers.len()
        );
        for (problem, n) in problems.iter_mut().zip(numbers) {
            problem.numbers.push(n);
        }
    }
    Ok(problems)
}

/// Each character column is one number read top to bottom; a blank column ends a problem.
fn read_columns(lines: &[&str], operations: &[Operation]) -> anyhow::Result<Vec<Problem>> {
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut groups: Vec<Vec<u64>> = vec![Vec::new()];

    for col in 0..width {
        let digits: String = lines
            .iter()
            .filter_map(|line| line.as_bytes().get(col))
            .map(|&b| char::from(b))
            .filter(|c| !c.is_whitespace())
            .collect();

        if digits.is_empty() {
            groups.push(Vec::new());
            continue;
        }
        let number = digits
            .parse::<u64>()
            .with_context(|| format!("(column {}) invalid number {digits:?}", col + 1))?;
        if let Some(group) = groups.last_mut() {
            group.push(number);
        }
    }
    groups.retain(|g| !g.is_empty());

    ensure!(
        groups.len() == operations.len(),
        "found {} problems but {} operations",
        groups.len(),
        operations.len()
    );
    Ok(groups
        .into_iter()
        .zip(operations)
        .map(|(numbers, &operation)| Problem { numbers, operation })
        .collect())
}
