//! Plain-text items report.

use crate::stock::Inventory;

/// Renders every item as `name -> quantity` between two rules.
///
/// ```text
/// --- Items Report ---
/// apple -> 7
/// banana -> 3
/// --------------------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StockReport<'a> {
    inventory: &'a Inventory,
}

impl<'a> StockReport<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }
}

impl core::fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Items Report ---")?;
        if self.inventory.is_empty() {
            writeln!(f, "Inventory is empty.")?;
        } else {
            for (item, quantity) in self.inventory.items() {
                writeln!(f, "{item} -> {quantity}")?;
            }
        }
        writeln!(f, "--------------------")
    }
}

impl Inventory {
    pub fn report(&self) -> StockReport<'_> {
        StockReport::new(self)
    }
}
