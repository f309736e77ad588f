//! Inventory domain module.
//!
//! This crate contains the stock map and its business rules, implemented purely
//! as deterministic domain logic (no IO). Persistence lives in `stockroom-infra`.

pub mod intake;
pub mod report;
pub mod stock;

pub use intake::StockRequest;
pub use report::StockReport;
pub use stock::{
    AddStock, DEFAULT_LOW_STOCK_THRESHOLD, Inventory, ItemDepleted, RemoveStock, StockAdded,
    StockCommand, StockEvent, StockLevels, StockRemoved,
};
