use std::path::Path;
use std::sync::{Arc, RwLock};

use stockroom_inventory::StockLevels;

use crate::error::PersistenceError;

/// Whole-snapshot storage for the stock map.
///
/// `load` returns the last saved snapshot; `save` replaces it entirely.
pub trait StockRepository {
    /// Where snapshots live, for logs and errors.
    fn location(&self) -> &Path;
    fn load(&self) -> Result<StockLevels, PersistenceError>;
    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError>;
}

impl<S> StockRepository for Arc<S>
where
    S: StockRepository + ?Sized,
{
    fn location(&self) -> &Path {
        (**self).location()
    }

    fn load(&self) -> Result<StockLevels, PersistenceError> {
        (**self).load()
    }

    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        (**self).save(levels)
    }
}

/// In-memory repository for tests/dev.
///
/// Behaves like a file that does not exist until the first `save`.
#[derive(Debug, Default)]
pub struct InMemoryStockRepository {
    inner: RwLock<Option<StockLevels>>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_levels(levels: StockLevels) -> Self {
        Self {
            inner: RwLock::new(Some(levels)),
        }
    }
}

impl StockRepository for InMemoryStockRepository {
    fn location(&self) -> &Path {
        Path::new("<memory>")
    }

    fn load(&self) -> Result<StockLevels, PersistenceError> {
        let snapshot = self.inner.read().map_err(|_| PersistenceError::Poisoned)?;
        snapshot.clone().ok_or_else(|| PersistenceError::NotFound {
            path: self.location().to_path_buf(),
        })
    }

    fn save(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        let mut snapshot = self.inner.write().map_err(|_| PersistenceError::Poisoned)?;
        *snapshot = Some(levels.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ItemName;

    #[test]
    fn empty_repository_reports_not_found() {
        let repo = InMemoryStockRepository::new();
        assert!(matches!(repo.load(), Err(PersistenceError::NotFound { .. })));
    }

    #[test]
    fn save_replaces_snapshot() {
        let repo = Arc::new(InMemoryStockRepository::new());

        let mut first = StockLevels::new();
        first.insert(ItemName::parse("apple").unwrap(), 1);
        repo.save(&first).unwrap();

        let mut second = StockLevels::new();
        second.insert(ItemName::parse("pear").unwrap(), 2);
        repo.save(&second).unwrap();

        assert_eq!(repo.load().unwrap(), second);
    }

    #[test]
    fn seeded_repository_loads_its_snapshot() {
        let mut levels = StockLevels::new();
        levels.insert(ItemName::parse("bolt").unwrap(), 4);
        let repo = InMemoryStockRepository::with_levels(levels.clone());

        assert_eq!(repo.load().unwrap(), levels);
        assert_eq!(repo.location(), Path::new("<memory>"));
    }
}
