//! Local store of puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where inputs come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// `{dir}/{year}/day{DD}.txt` for every puzzle
    Directory(PathBuf),
    /// One explicit file serving a single puzzle
    File { year: u16, day: u8, path: PathBuf },
}

/// Read-only, file-based input lookup
pub struct InputStore {
    source: InputSource,
}

impl InputStore {
    pub fn new(source: InputSource) -> Self {
        Self { source }
    }

    /// Path the input for a year/day is read from
    ///
    /// An explicit file only answers for its own puzzle; any other puzzle
    /// maps to a sibling `{year}_day{DD}.txt` next to it.
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.source {
            InputSource::File {
                year: y,
                day: d,
                path,
            } if (*y, *d) == (year, day) => path.clone(),
            InputSource::File { path, .. } => path.with_file_name(format!("{year}_day{day:02}.txt")),
            InputSource::Directory(dir) => dir.join(year.to_string()).join(format!("day{day:02}.txt")),
        }
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path.clone()),
            _ => InputError::Read {
                path: path.clone(),
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_layout() {
        let store = InputStore::new(InputSource::Directory(PathBuf::from("inputs")));
        assert_eq!(
            store.input_path(2024, 6),
            PathBuf::from("inputs").join("2024").join("day06.txt")
        );
        assert_eq!(
            store.input_path(2023, 17),
            PathBuf::from("inputs").join("2023").join("day17.txt")
        );
    }

    #[test]
    fn test_read_and_missing() {
        let temp = TempDir::new().unwrap();
        let year_dir = temp.path().join("2024");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day19.txt"), "r, b\n\nrb\n").unwrap();

        let store = InputStore::new(InputSource::Directory(temp.path().to_path_buf()));
        assert!(store.contains(2024, 19));
        assert_eq!(store.get(2024, 19).unwrap(), "r, b\n\nrb\n");

        assert!(!store.contains(2024, 18));
        assert!(matches!(store.get(2024, 18), Err(InputError::Missing(_))));
    }

    #[test]
    fn test_non_utf8_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let store = InputStore::new(InputSource::File {
            year: 2024,
            day: 1,
            path,
        });
        assert!(matches!(store.get(2024, 1), Err(InputError::Read { .. })));
    }

    #[test]
    fn test_explicit_file_serves_one_puzzle() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("maze.txt");
        fs::write(&path, "#S.E#").unwrap();

        let store = InputStore::new(InputSource::File {
            year: 2024,
            day: 16,
            path: path.clone(),
        });
        assert_eq!(store.input_path(2024, 16), path);
        assert_eq!(store.get(2024, 16).unwrap(), "#S.E#");
        assert!(!store.contains(2024, 18));
    }
}
