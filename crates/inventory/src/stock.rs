use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockroom_core::{Aggregate, DomainError, DomainResult, ItemName};
use stockroom_events::Event;

use crate::intake::StockRequest;

/// Threshold used by [`Inventory::low_stock`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Item name → quantity, ordered by name.
pub type StockLevels = BTreeMap<ItemName, i64>;

/// Aggregate root: the stock map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    stock: StockLevels,
    version: u64,
}

/// Command: AddStock.
///
/// A negative quantity decreases stock without the removal semantics (no entry
/// is deleted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStock {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveStock {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockCommand {
    AddStock(AddStock),
    RemoveStock(RemoveStock),
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockRemoved (entry stays, with `remaining > 0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRemoved {
    pub item: ItemName,
    pub quantity: i64,
    pub remaining: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDepleted (removal drove stock to zero or below; entry deleted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDepleted {
    pub item: ItemName,
    pub quantity: i64,
    pub previous: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    StockAdded(StockAdded),
    StockRemoved(StockRemoved),
    ItemDepleted(ItemDepleted),
}

impl Event for StockEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StockEvent::StockAdded(_) => "inventory.stock.added",
            StockEvent::StockRemoved(_) => "inventory.stock.removed",
            StockEvent::ItemDepleted(_) => "inventory.item.depleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::StockAdded(e) => e.occurred_at,
            StockEvent::StockRemoved(e) => e.occurred_at,
            StockEvent::ItemDepleted(e) => e.occurred_at,
        }
    }
}

/// Audit line, e.g. `2024-05-01 09:30:00 UTC: Added 10 of apple`.
impl core::fmt::Display for StockEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockEvent::StockAdded(e) => {
                write!(f, "{}: Added {} of {}", e.occurred_at, e.quantity, e.item)
            }
            StockEvent::StockRemoved(e) => write!(
                f,
                "{}: Removed {} of {} ({} left)",
                e.occurred_at, e.quantity, e.item, e.remaining
            ),
            StockEvent::ItemDepleted(e) => write!(
                f,
                "{}: Removed {} from inventory (had {})",
                e.occurred_at, e.item, e.previous
            ),
        }
    }
}

impl Aggregate for Inventory {
    type Command = StockCommand;
    type Event = StockEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StockEvent::StockAdded(e) => {
                let entry = self.stock.entry(e.item.clone()).or_insert(0);
                *entry = entry.saturating_add(e.quantity);
            }
            StockEvent::StockRemoved(e) => {
                self.stock.insert(e.item.clone(), e.remaining);
            }
            StockEvent::ItemDepleted(e) => {
                self.stock.remove(e.item.as_str());
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StockCommand::AddStock(cmd) => self.handle_add(cmd),
            StockCommand::RemoveStock(cmd) => self.handle_remove(cmd),
        }
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from a persisted snapshot (version starts at zero).
    pub fn from_levels(stock: StockLevels) -> Self {
        Self { stock, version: 0 }
    }

    /// Replace the whole stock map with `stock`.
    pub fn restore(&mut self, stock: StockLevels) {
        self.stock = stock;
        self.version = 0;
    }

    /// Empty the store.
    pub fn reset(&mut self) {
        self.restore(StockLevels::new());
    }

    pub fn levels(&self) -> &StockLevels {
        &self.stock
    }

    pub fn items(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.stock.iter().map(|(name, qty)| (name, *qty))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    /// Stored quantity, or 0 when the item is not stocked.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in name order.
    pub fn list_below(&self, threshold: i64) -> Vec<&str> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn low_stock(&self) -> Vec<&str> {
        self.list_below(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Add `quantity` of `item`, returning the audit event.
    ///
    /// Invalid input is logged and ignored; the store is left untouched.
    pub fn add(&mut self, item: &str, quantity: i64) -> Option<StockEvent> {
        let outcome = self.try_add(item, quantity);
        log_outcome(item, quantity, outcome)
    }

    /// Remove `quantity` of `item`. Missing items and invalid input are logged
    /// and ignored.
    pub fn remove(&mut self, item: &str, quantity: i64) -> Option<StockEvent> {
        let outcome = self.try_remove(item, quantity);
        log_outcome(item, quantity, outcome)
    }

    pub fn try_add(&mut self, item: &str, quantity: i64) -> DomainResult<StockEvent> {
        let item = ItemName::parse(item)?;
        self.execute_one(StockCommand::AddStock(AddStock {
            item,
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    pub fn try_remove(&mut self, item: &str, quantity: i64) -> DomainResult<StockEvent> {
        let item = ItemName::parse(item)?;
        self.execute_one(StockCommand::RemoveStock(RemoveStock {
            item,
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    /// Apply an untyped request such as
    /// `{"op": "add", "item": "apple", "quantity": 10}`.
    ///
    /// Non-text names and non-integer quantities are rejected the same way
    /// [`Inventory::add`] rejects an empty name.
    pub fn submit(&mut self, request: &JsonValue) -> Option<StockEvent> {
        match StockRequest::from_json(request) {
            Ok(StockRequest::Add { item, quantity }) => self.add(item.as_str(), quantity),
            Ok(StockRequest::Remove { item, quantity }) => self.remove(item.as_str(), quantity),
            Err(err) => {
                tracing::warn!("rejected stock request {request}: {err}");
                None
            }
        }
    }

    fn execute_one(&mut self, command: StockCommand) -> DomainResult<StockEvent> {
        let mut events = self.execute(&command)?;
        events
            .pop()
            .ok_or_else(|| DomainError::invariant("stock command produced no event"))
    }

    fn handle_add(&self, cmd: &AddStock) -> DomainResult<Vec<StockEvent>> {
        self.get_quantity(cmd.item.as_str())
            .checked_add(cmd.quantity)
            .ok_or_else(|| {
                DomainError::invariant(format!("stock for {} would overflow", cmd.item))
            })?;

        Ok(vec![StockEvent::StockAdded(StockAdded {
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveStock) -> DomainResult<Vec<StockEvent>> {
        let current = self
            .stock
            .get(cmd.item.as_str())
            .copied()
            .ok_or_else(|| DomainError::not_found(cmd.item.as_str()))?;

        let remaining = current.checked_sub(cmd.quantity).ok_or_else(|| {
            DomainError::invariant(format!("stock for {} would overflow", cmd.item))
        })?;

        // Zero is deleted too, not kept as an empty entry.
        if remaining <= 0 {
            return Ok(vec![StockEvent::ItemDepleted(ItemDepleted {
                item: cmd.item.clone(),
                quantity: cmd.quantity,
                previous: current,
                occurred_at: cmd.occurred_at,
            })]);
        }

        Ok(vec![StockEvent::StockRemoved(StockRemoved {
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            remaining,
            occurred_at: cmd.occurred_at,
        })])
    }
}

fn log_outcome(item: &str, quantity: i64, outcome: DomainResult<StockEvent>) -> Option<StockEvent> {
    match outcome {
        Ok(event) => {
            match &event {
                StockEvent::StockAdded(e) => {
                    tracing::info!("Added {} of {}", e.quantity, e.item);
                }
                StockEvent::StockRemoved(e) => {
                    tracing::info!("Removed {} of {}, {} left", e.quantity, e.item, e.remaining);
                }
                StockEvent::ItemDepleted(e) => {
                    tracing::info!(
                        "Stock for {} is {}, removing from inventory.",
                        e.item,
                        e.previous
                    );
                }
            }
            Some(event)
        }
        Err(DomainError::NotFound(name)) => {
            tracing::warn!("Attempted to remove item not in stock: {name}");
            None
        }
        Err(DomainError::Validation(msg)) => {
            tracing::warn!(item, quantity, "invalid stock input: {msg}");
            None
        }
        Err(err @ DomainError::InvariantViolation(_)) => {
            tracing::error!(item, quantity, "stock update refused: {err}");
            None
        }
    }
}
