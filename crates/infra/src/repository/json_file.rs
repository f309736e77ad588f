//! Flat JSON file storage: `{"apple": 7, "banana": 3}`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockroom_inventory::StockLevels;

use crate::error::PersistenceError;
use crate::repository::StockRepository;

/// Default location of the inventory file, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Stock snapshot stored as one pretty-printed JSON object.
///
/// Each `load`/`save` opens the file once and closes it before returning. There
/// is no locking; concurrent writers race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(levels: &StockLevels) -> Result<Vec<u8>, PersistenceError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        levels.serialize(&mut ser).map_err(PersistenceError::Encode)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

impl StockRepository for JsonFileRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StockLevels, PersistenceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                PersistenceError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                PersistenceError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&contents).map_err(|source| PersistenceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        let buf = Self::encode(levels)?;
        fs::write(&self.path, buf).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ItemName;

    fn levels(entries: &[(&str, i64)]) -> StockLevels {
        entries
            .iter()
            .map(|(n, q)| (ItemName::parse(*n).unwrap(), *q))
            .collect()
    }

    #[test]
    fn save_then_load_round_trip() {
        let temp = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRepository::new(temp.path().join("inventory.json"));
        let saved = levels(&[("apple", 7), ("banana", 3), ("crate", -1)]);

        repo.save(&saved).unwrap();
        assert_eq!(repo.load().unwrap(), saved);
    }

    #[test]
    fn writes_four_space_indented_object() {
        let temp = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRepository::new(temp.path().join("inventory.json"));

        repo.save(&levels(&[("apple", 7), ("banana", 3)])).unwrap();

        let written = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(written, "{\n    \"apple\": 7,\n    \"banana\": 3\n}\n");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inventory.json");
        fs::write(&path, "{\"old\": 1, \"older\": 2, \"oldest\": 3}").unwrap();
        let repo = JsonFileRepository::new(&path);

        repo.save(&levels(&[("new", 1)])).unwrap();
        assert_eq!(repo.load().unwrap(), levels(&[("new", 1)]));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRepository::new(temp.path().join("absent.json"));

        assert!(matches!(repo.load(), Err(PersistenceError::NotFound { .. })));
    }

    #[test]
    fn invalid_content_is_malformed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inventory.json");
        let repo = JsonFileRepository::new(&path);

        for bad in [
            "not json",
            "[1, 2, 3]",
            "{\"apple\": \"seven\"}",
            "{\"apple\": 1.5}",
            "{\"\": 3}",
        ] {
            fs::write(&path, bad).unwrap();
            assert!(
                matches!(repo.load(), Err(PersistenceError::Malformed { .. })),
                "expected malformed for {bad}"
            );
        }
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRepository::new(temp.path().join("no-such-dir").join("inventory.json"));

        assert!(matches!(
            repo.save(&levels(&[("apple", 1)])),
            Err(PersistenceError::Io { .. })
        ));
    }

    #[test]
    fn default_path_is_inventory_json() {
        let repo = JsonFileRepository::default();
        assert_eq!(repo.path(), Path::new("inventory.json"));
        assert_eq!(repo.location(), repo.path());
    }
}
