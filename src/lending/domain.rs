use crate::core::domain::ItemId;
use crate::core::library::LibraryResult;
use crate::fines::ledger::FineLedger;
use crate::items::domain::LibraryItem;
use crate::items::dto::ItemDto;
use crate::lending::dto::{BorrowDto, ReturnDto};

pub mod service;

// LendingService owns the item collection together with the fine ledger shared by its items
pub trait LendingService {
    fn add_item(&mut self, item: LibraryItem) -> LibraryResult<ItemDto>;
    fn find_item(&self, item_id: ItemId) -> LibraryResult<ItemDto>;
    fn items(&self) -> Vec<ItemDto>;
    fn borrow(&mut self, item_id: ItemId, duration_spec: &str) -> LibraryResult<BorrowDto>;
    fn return_item(&mut self, item_id: ItemId) -> LibraryResult<ReturnDto>;
    fn is_available(&self, item_id: ItemId) -> LibraryResult<bool>;
    fn get_fine(&self, item_id: ItemId) -> LibraryResult<u64>;
    fn display_info(&self, item_id: ItemId) -> LibraryResult<String>;
    fn play(&self, item_id: ItemId) -> LibraryResult<String>;
    fn archive_issue(&self, item_id: ItemId) -> LibraryResult<String>;
    fn page_count(&self, item_id: ItemId) -> LibraryResult<u32>;
    fn fines(&self) -> &FineLedger;
    fn total_fines(&self) -> u64;
}
