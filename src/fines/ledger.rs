use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::domain::ItemId;

/// Fines recorded per item. An item without an entry owes nothing.
///
/// Entries are written on overdue returns and are never cleared by a later
/// on-time return; the last overdue amount stays on record.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineLedger {
    fines: HashMap<ItemId, u64>,
}

impl FineLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // overwrites whatever was recorded for the item before
    pub fn record(&mut self, item_id: ItemId, amount: u64) {
        self.fines.insert(item_id, amount);
    }

    pub fn fine_for(&self, item_id: ItemId) -> u64 {
        self.fines.get(&item_id).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.fines.values().sum()
    }

    /// Recorded entries ordered by item id.
    pub fn entries(&self) -> Vec<(ItemId, u64)> {
        let mut entries: Vec<(ItemId, u64)> = self.fines.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }

    pub fn len(&self) -> usize {
        self.fines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fines.is_empty()
    }
}
