//! Helpers shared by several days

pub mod grid;
pub mod union_find;

use aoc_solver::ParseError;

/// Parse every non-empty line with `f`, tagging failures with their 1-based line number.
pub fn parse_lines<T, F>(input: &str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            f(line.trim()).map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
            })
        })
        .collect()
}
