use serde::{Deserialize, Serialize};
use crate::items::domain::model::ReturnReceipt;
use crate::items::dto::ItemDto;

// BorrowDto abstracts the outcome of lending an item out
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowDto {
    pub item: ItemDto,
    pub duration_days: u32,
}

// ReturnDto abstracts the outcome of an item coming back
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReturnDto {
    pub item: ItemDto,
    pub receipt: ReturnReceipt,
    // amount on the ledger after the return, including fines from earlier loans
    pub fine: u64,
}
