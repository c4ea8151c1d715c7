use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::domain::ItemId;
use crate::items::domain::LibraryItem;
use crate::items::dto::{ItemDetail, ItemDto};
use crate::lending::domain::LendingService;

pub struct AddItemCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> AddItemCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemCommandRequest {
    item_id: ItemId,
    title: String,
    author: String,
    detail: ItemDetail,
}

impl AddItemCommandRequest {
    pub fn new(item_id: ItemId, title: &str, author: &str, detail: ItemDetail) -> Self {
        Self {
            item_id,
            title: title.to_string(),
            author: author.to_string(),
            detail,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

impl<'a> Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand<'a> {
    fn execute(&mut self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = LibraryItem::build(req.item_id, req.title.as_str(), req.author.as_str(), req.detail)?;
        self.lending_service.add_item(item)
            .map_err(CommandError::from).map(AddItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::items::dto::ItemDetail;
    use crate::lending::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::lending::factory::create_lending_service;

    #[test]
    fn test_should_run_add_item() {
        let mut svc = create_lending_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let res = AddItemCommand::new(svc.as_mut()).execute(AddItemCommandRequest::new(
            102, "Deep Work", "Cal Newport", ItemDetail::Duration { duration_minutes: 180 })).expect("should add item");
        assert_eq!(102, res.item.item_id);
        assert!(svc.is_available(102).expect("should find"));
    }

    #[test]
    fn test_should_reject_invalid_and_duplicate_items() {
        let mut svc = create_lending_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let invalid = AddItemCommand::new(svc.as_mut()).execute(AddItemCommandRequest::new(
            1, "Empty", "Nobody", ItemDetail::Pages { page_count: 0 }));
        assert!(matches!(invalid, Err(CommandError::Validation { .. })));

        let req = || AddItemCommandRequest::new(103, "NatGeo", "Various", ItemDetail::Issue { issue_number: 2025 });
        AddItemCommand::new(svc.as_mut()).execute(req()).expect("should add item");
        let dup = AddItemCommand::new(svc.as_mut()).execute(req());
        assert!(matches!(dup, Err(CommandError::DuplicateKey { .. })));
    }

    #[test]
    fn test_should_parse_add_item_request() {
        let json = r#"{"item_id": 101, "title": "Atomic Habits", "author": "James Clear", "detail": {"Pages": {"page_count": 320}}}"#;
        let req: AddItemCommandRequest = serde_json::from_str(json).expect("should parse request");
        assert_eq!(ItemDetail::Pages { page_count: 320 }, req.detail);
    }
}
