use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::domain::ItemId;
use crate::lending::domain::LendingService;
use crate::lending::dto::BorrowDto;

pub struct BorrowItemCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> BorrowItemCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowItemCommandRequest {
    item_id: ItemId,
    duration: String,
}

impl BorrowItemCommandRequest {
    pub fn new(item_id: ItemId, duration: &str) -> Self {
        Self {
            item_id,
            duration: duration.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowItemCommandResponse {
    pub borrowed: BorrowDto,
}

impl BorrowItemCommandResponse {
    pub fn new(borrowed: BorrowDto) -> Self {
        Self {
            borrowed,
        }
    }
}

impl<'a> Command<BorrowItemCommandRequest, BorrowItemCommandResponse> for BorrowItemCommand<'a> {
    fn execute(&mut self, req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
        self.lending_service.borrow(req.item_id, req.duration.as_str())
            .map_err(CommandError::from).map(BorrowItemCommandResponse::new)
    }
}
