//! Recovering load/save: storage failures are logged, never returned.

use std::path::Path;

use stockroom_inventory::Inventory;

use crate::error::PersistenceError;
use crate::repository::{JsonFileRepository, StockRepository};

/// Replace `inventory` with the repository's snapshot.
///
/// A missing or unreadable snapshot leaves `inventory` empty.
pub fn restore<R: StockRepository>(inventory: &mut Inventory, repository: &R) {
    match repository.load() {
        Ok(levels) => {
            tracing::info!(
                path = %repository.location().display(),
                items = levels.len(),
                "loaded inventory snapshot"
            );
            inventory.restore(levels);
        }
        Err(err @ PersistenceError::NotFound { .. }) => {
            tracing::warn!("{err}. Starting with empty inventory.");
            inventory.reset();
        }
        Err(err) => {
            tracing::error!("{err}. Starting with empty inventory.");
            inventory.reset();
        }
    }
}

/// Write `inventory` to the repository. Returns whether the write succeeded;
/// the in-memory store is unchanged either way.
pub fn persist<R: StockRepository>(inventory: &Inventory, repository: &R) -> bool {
    match repository.save(inventory.levels()) {
        Ok(()) => {
            tracing::info!(
                path = %repository.location().display(),
                items = inventory.len(),
                "saved inventory snapshot"
            );
            true
        }
        Err(err) => {
            tracing::error!("error saving inventory: {err}");
            false
        }
    }
}

/// [`restore`] from the JSON file at `path`.
pub fn load(inventory: &mut Inventory, path: impl AsRef<Path>) {
    restore(inventory, &JsonFileRepository::new(path.as_ref()));
}

/// [`persist`] to the JSON file at `path`.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> bool {
    persist(inventory, &JsonFileRepository::new(path.as_ref()))
}
