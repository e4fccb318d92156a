//! Configuration resolution from CLI args and environment

use crate::cli::{Args, Command};
use crate::error::CliError;
use std::path::{Path, PathBuf};

pub const DEFAULT_YEAR: u16 = 2025;
pub const YEAR_ENV: &str = "AOC_YEAR";
pub const ROOT_ENV: &str = "AOC_ROOT";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Puzzle year
    pub year: u16,
    /// Workspace root, with `~` expanded
    pub root: PathBuf,
    /// Quiet mode
    pub quiet: bool,
    /// Subcommand to run
    pub command: Command,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::from_args_with_env(args, |key| std::env::var(key).ok())
    }

    /// Build config with an explicit environment lookup.
    ///
    /// CLI values win over the environment, which wins over the defaults.
    pub fn from_args_with_env<F>(args: Args, env: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let year = match (args.year, env(YEAR_ENV)) {
            (Some(year), _) => year,
            (None, Some(raw)) => raw.trim().parse().map_err(|_| {
                CliError::Config(format!("{YEAR_ENV} must be a year, got {raw:?}"))
            })?,
            (None, None) => DEFAULT_YEAR,
        };

        let root = args
            .root
            .or_else(|| env(ROOT_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        let root = expand_tilde(&root);

        log::debug!("resolved year {} and root {}", year, root.display());
        Ok(Config {
            year,
            root,
            quiet: args.quiet,
            command: args.command,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn resolve(argv: &[&str], env: &[(&str, &str)]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(argv).unwrap();
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_args_with_env(args, |key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = resolve(&["aoc", "status"], &[]).unwrap();
        assert_eq!(config.year, DEFAULT_YEAR);
        assert_eq!(config.root, PathBuf::from("."));
        assert!(!config.quiet);
    }

    #[test]
    fn test_cli_beats_env() {
        let env = [(YEAR_ENV, "2023"), (ROOT_ENV, "/from/env")];
        let config = resolve(&["aoc", "status"], &env).unwrap();
        assert_eq!(config.year, 2023);
        assert_eq!(config.root, PathBuf::from("/from/env"));

        let config = resolve(&["aoc", "status", "-y", "2024", "--root", "/cli"], &env).unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.root, PathBuf::from("/cli"));
    }

    #[test]
    fn test_bad_year_env() {
        let err = resolve(&["aoc", "status"], &[(YEAR_ENV, "twenty")]).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("AOC_YEAR")));
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        assert_eq!(expand_tilde(Path::new("~other/aoc")), PathBuf::from("~other/aoc"));
        assert_eq!(expand_tilde(Path::new("rel/path")), PathBuf::from("rel/path"));
    }
}
