use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::core::clock::{Clock, SystemClock};
use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::{ItemStatus, LibraryError, LibraryResult};
use crate::fines::ledger::FineLedger;
use crate::fines::policy::FinePolicy;

// LendableItem abstracts the borrow/return state shared by every kind of item
// in the library. `borrowed_at` is present exactly while the item is Borrowed.
#[derive(Debug, PartialEq, Clone)]
pub struct LendableItem {
    item_id: ItemId,
    title: String,
    author: String,
    status: ItemStatus,
    borrowed_at: Option<NaiveDateTime>,
}

// ReturnReceipt describes what happened when an item came back
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub item_id: ItemId,
    pub days_kept: i64,
    pub days_overdue: u64,
    // fine written to the ledger by this return, if any
    pub fine_charged: Option<u64>,
}

impl LendableItem {
    pub fn new(item_id: ItemId, title: &str, author: &str) -> Self {
        Self {
            item_id,
            title: title.to_string(),
            author: author.to_string(),
            status: ItemStatus::Available,
            borrowed_at: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn borrowed_at(&self) -> Option<NaiveDateTime> {
        self.borrowed_at
    }

    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }

    pub fn borrow(&mut self, duration_spec: &str) -> LibraryResult<u32> {
        self.borrow_at(duration_spec, SystemClock.now())
    }

    /// Lends the item out as of `now` and returns the requested number of days.
    ///
    /// The requested duration is only validated and reported; overdue fines are
    /// measured against the grace period alone.
    pub fn borrow_at(&mut self, duration_spec: &str, now: NaiveDateTime) -> LibraryResult<u32> {
        if !self.is_available() {
            return Err(LibraryError::already_borrowed(
                format!("Item already borrowed: {} ({})", self.title, self.item_id).as_str()));
        }
        let duration_days = parse_duration(duration_spec)?;
        self.borrowed_at = Some(now);
        self.status = ItemStatus::Borrowed;
        info!(item_id = self.item_id, "{} borrowed for {} days.", self.title, duration_days);
        Ok(duration_days)
    }

    pub fn return_item(&mut self, ledger: &mut FineLedger) -> LibraryResult<ReturnReceipt> {
        self.return_item_at(SystemClock.now(), &FinePolicy::default(), ledger)
    }

    pub fn return_item_at(&mut self, now: NaiveDateTime, policy: &FinePolicy,
                          ledger: &mut FineLedger) -> LibraryResult<ReturnReceipt> {
        let borrowed_at = match (self.status, self.borrowed_at) {
            (ItemStatus::Borrowed, Some(at)) => at,
            _ => {
                return Err(LibraryError::not_borrowed(
                    format!("Item was not borrowed: {} ({})", self.title, self.item_id).as_str()));
            }
        };
        let days_overdue = policy.days_overdue(borrowed_at, now);
        let fine_charged = if days_overdue > 0 {
            let fine = policy.fine_for(days_overdue);
            ledger.record(self.item_id, fine);
            info!(item_id = self.item_id, "Item is overdue. Fine: {}", fine);
            Some(fine)
        } else {
            info!(item_id = self.item_id, "Item returned on time. No fine.");
            None
        };
        self.status = ItemStatus::Available;
        self.borrowed_at = None;
        Ok(ReturnReceipt {
            item_id: self.item_id,
            days_kept: (now - borrowed_at).num_days().max(0),
            days_overdue,
            fine_charged,
        })
    }

    pub fn get_fine(&self, ledger: &FineLedger) -> u64 {
        ledger.fine_for(self.item_id)
    }
}

impl Identifiable for LendableItem {
    fn id(&self) -> ItemId {
        self.item_id
    }
}

/// Extracts the day count from free-form text by keeping only its ASCII
/// digits, so "7 days" is 7 and "1 or 2" is 12.
pub fn parse_duration(duration_spec: &str) -> LibraryResult<u32> {
    let digits: String = duration_spec.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(LibraryError::invalid_duration(
            format!("Invalid duration format: {:?}", duration_spec).as_str()));
    }
    digits.parse::<u32>().map_err(|err| {
        debug!("duration {:?} out of range: {}", duration_spec, err);
        LibraryError::invalid_duration(
            format!("Invalid duration format: {:?}", duration_spec).as_str())
    })
}
