//! `aoc new`: solution, test and input files for a fresh day

use crate::error::CliError;
use crate::inputs::InputStore;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const SOLUTION_TEMPLATE: &str = include_str!("../templates/solution.rs.tmpl");
const TEST_TEMPLATE: &str = include_str!("../templates/test.rs.tmpl");

/// Files touched by one scaffolding run
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub written: Vec<PathBuf>,
    pub inputs_created: Vec<PathBuf>,
    pub module_registered: bool,
}

/// Writes new days into the workspace at `root`
pub struct Scaffolder {
    root: PathBuf,
    year: u16,
}

impl Scaffolder {
    pub fn new(root: &Path, year: u16) -> Self {
        Self {
            root: root.to_path_buf(),
            year,
        }
    }

    fn year_dir(&self) -> PathBuf {
        self.root
            .join("aoc-solutions")
            .join("src")
            .join(format!("year_{}", self.year))
    }

    pub fn solution_path(&self, day: u8) -> PathBuf {
        self.year_dir().join(format!("day_{}.rs", day))
    }

    pub fn test_path(&self, day: u8) -> PathBuf {
        self.root
            .join("aoc-solutions")
            .join("tests")
            .join(format!("year_{}_day_{}.rs", self.year, day))
    }

    /// Scaffold `day`.
    ///
    /// `confirm_overwrite` is asked before replacing an existing solution file; declining
    /// aborts without touching anything.
    pub fn scaffold<F>(
        &self,
        day: u8,
        title: Option<&str>,
        confirm_overwrite: F,
    ) -> Result<ScaffoldReport, CliError>
    where
        F: FnOnce(&Path) -> io::Result<bool>,
    {
        let solution_path = self.solution_path(day);
        if solution_path.exists() && !confirm_overwrite(&solution_path)? {
            return Err(CliError::Aborted(format!(
                "{} already exists",
                solution_path.display()
            )));
        }

        let title = title.unwrap_or("Untitled").to_string();
        let vars = [
            ("year", self.year.to_string()),
            ("day", day.to_string()),
            ("day_padded", format!("{day:02}")),
            ("title", title),
        ];

        let mut report = ScaffoldReport::default();
        for (template, path) in [
            (SOLUTION_TEMPLATE, solution_path),
            (TEST_TEMPLATE, self.test_path(day)),
        ] {
            let content = render(template, &vars)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            log::debug!("wrote {}", path.display());
            report.written.push(path);
        }

        let inputs = InputStore::new(&self.root);
        for example in [false, true] {
            if inputs.ensure_exists(day, example)? {
                report.inputs_created.push(inputs.path(day, example));
            }
        }

        report.module_registered = self.register_module(day)?;
        Ok(report)
    }

    /// Declare `day_{day}` in the year's `mod.rs`, creating the year module if needed.
    /// Returns whether a declaration was added.
    fn register_module(&self, day: u8) -> Result<bool, CliError> {
        let mod_path = self.year_dir().join("mod.rs");
        if !mod_path.exists() {
            fs::write(&mod_path, format!("//! Advent of Code {}\n\n", self.year))?;
            let lib_path = self.root.join("aoc-solutions").join("src").join("lib.rs");
            append_declaration(&lib_path, &format!("pub mod year_{};", self.year))?;
        }
        append_declaration(&mod_path, &format!("pub mod day_{};", day))
    }
}

/// Append `line` to the file at `path` unless it already contains it.
fn append_declaration(path: &Path, line: &str) -> Result<bool, CliError> {
    let mut content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };
    if content.lines().any(|existing| existing.trim() == line) {
        return Ok(false);
    }
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(line);
    content.push('\n');
    fs::write(path, content)?;
    log::debug!("registered `{}` in {}", line, path.display());
    Ok(true)
}

/// Replace every `{{name}}` in `template`; an unknown placeholder is an error.
fn render(template: &str, vars: &[(&str, String)]) -> Result<String, CliError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| CliError::Template("unclosed `{{`".to_string()))?;
        let name = after[..end].trim();
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| CliError::Template(format!("unknown placeholder `{name}`")))?;
        out.push_str(value);
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Ask `Overwrite? [y/N]` on stdout and read the answer from stdin
pub fn prompt_overwrite(path: &Path) -> io::Result<bool> {
    let stdin = io::stdin();
    prompt_overwrite_with(path, &mut stdin.lock(), &mut io::stdout())
}

fn prompt_overwrite_with<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(output, "{} already exists. Overwrite? [y/N] ", path.display())?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
