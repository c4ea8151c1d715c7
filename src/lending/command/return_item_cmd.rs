use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::domain::ItemId;
use crate::lending::domain::LendingService;
use crate::lending::dto::ReturnDto;

pub struct ReturnItemCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> ReturnItemCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnItemCommandRequest {
    item_id: ItemId,
}

impl ReturnItemCommandRequest {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnItemCommandResponse {
    pub returned: ReturnDto,
}

impl ReturnItemCommandResponse {
    pub fn new(returned: ReturnDto) -> Self {
        Self {
            returned,
        }
    }
}

impl<'a> Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand<'a> {
    fn execute(&mut self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.lending_service.return_item(req.item_id)
            .map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}
