//! The fixed demonstration run: load, mutate, report, save.

use std::io::Write;

use serde_json::{Value as JsonValue, json};

use stockroom_events::Journal;
use stockroom_infra::persistence;
use stockroom_inventory::{Inventory, StockEvent};

use crate::config::AppConfig;

/// State left behind by [`run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub inventory: Inventory,
    pub journal: Journal<StockEvent>,
    pub saved: bool,
}

/// Requests applied on every run, in order. Two of them are rejected on
/// purpose: a non-text name with a non-integer quantity, and a removal of an
/// item that is not stocked.
pub fn demonstration_requests() -> Vec<JsonValue> {
    vec![
        json!({"op": "add", "item": "apple", "quantity": 10}),
        json!({"op": "add", "item": "banana", "quantity": 5}),
        json!({"op": "add", "item": 123, "quantity": "ten"}),
        json!({"op": "add", "item": "banana", "quantity": -2}),
        json!({"op": "remove", "item": "apple", "quantity": 3}),
        json!({"op": "remove", "item": "orange", "quantity": 1}),
    ]
}

/// Run the demonstration against `config.inventory_path`, writing the report
/// to `out`.
///
/// Storage problems are logged and never abort the run; only a failure to
/// write to `out` is returned.
pub fn run(config: &AppConfig, out: &mut impl Write) -> anyhow::Result<RunOutcome> {
    tracing::info!("Starting inventory system...");

    let mut inventory = Inventory::new();
    persistence::load(&mut inventory, &config.inventory_path);

    let mut journal = Journal::new();
    for request in demonstration_requests() {
        journal.extend(inventory.submit(&request));
    }

    writeln!(out, "Apple stock: {}", inventory.get_quantity("apple"))?;
    writeln!(
        out,
        "Low items: {:?}",
        inventory.list_below(config.low_stock_threshold)
    )?;
    writeln!(out)?;
    write!(out, "{}", inventory.report())?;
    writeln!(out)?;

    for line in journal.messages() {
        tracing::debug!("{line}");
    }

    let saved = persistence::save(&inventory, &config.inventory_path);
    tracing::info!("Inventory system operations complete.");

    Ok(RunOutcome {
        inventory,
        journal,
        saved,
    })
}
