//! Infrastructure layer: stock snapshot storage and recovering load/save.

pub mod error;
pub mod persistence;
pub mod repository;

pub use error::PersistenceError;
pub use persistence::{load, persist, restore, save};
pub use repository::json_file::DEFAULT_INVENTORY_FILE;
pub use repository::{InMemoryStockRepository, JsonFileRepository, StockRepository};
