//! Puzzle and example inputs stored under `{root}/inputs`

use crate::error::CliError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-based input store
///
/// Directory structure: `{root}/inputs/day{NN}.txt` and `{root}/inputs/day{NN}_example.txt`
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    /// Create a store for the workspace at `root`
    pub fn new(root: &Path) -> Self {
        Self {
            dir: root.join("inputs"),
        }
    }

    /// Get the path for a day's puzzle or example input
    pub fn path(&self, day: u8, example: bool) -> PathBuf {
        let suffix = if example { "_example" } else { "" };
        self.dir.join(format!("day{:02}{}.txt", day, suffix))
    }

    /// Read a day's input with trailing whitespace stripped
    pub fn get(&self, day: u8, example: bool) -> Result<String, CliError> {
        read_input(&self.path(day, example))
    }

    /// Create an empty input file unless one exists; returns whether it was created
    pub fn ensure_exists(&self, day: u8, example: bool) -> io::Result<bool> {
        let path = self.path(day, example);
        if path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, "")?;
        log::debug!("created {}", path.display());
        Ok(true)
    }
}

/// Read an input file with trailing whitespace stripped
pub fn read_input(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::InputNotFound(path.to_path_buf()));
    }
    let mut content = fs::read_to_string(path)?;
    content.truncate(content.trim_end().len());
    log::debug!("loaded {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::new(Path::new("/work"));
        assert_eq!(store.path(1, false), PathBuf::from("/work/inputs/day01.txt"));
        assert_eq!(
            store.path(25, true),
            PathBuf::from("/work/inputs/day25_example.txt")
        );
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path());
        match store.get(3, false) {
            Err(CliError::InputNotFound(path)) => assert_eq!(path, store.path(3, false)),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_get_strips_trailing_whitespace_only() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path());
        fs::create_dir_all(temp.path().join("inputs")).unwrap();
        fs::write(store.path(6, true), "  1 2\n3 4  \n\n").unwrap();
        assert_eq!(store.get(6, true).unwrap(), "  1 2\n3 4");
    }

    #[test]
    fn test_ensure_exists_keeps_content() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path());

        assert!(store.ensure_exists(2, false).unwrap());
        assert_eq!(store.get(2, false).unwrap(), "");

        fs::write(store.path(2, false), "data").unwrap();
        assert!(!store.ensure_exists(2, false).unwrap());
        assert_eq!(store.get(2, false).unwrap(), "data");
    }
}
