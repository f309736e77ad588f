//! Storage abstractions for stock snapshots.

pub mod json_file;
pub mod stock_store;

pub use json_file::JsonFileRepository;
pub use stock_store::{InMemoryStockRepository, StockRepository};
