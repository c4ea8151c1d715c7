use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};
use crate::core::clock::Clock;
use crate::core::domain::{Configuration, Identifiable, ItemId};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::fines::ledger::FineLedger;
use crate::fines::policy::FinePolicy;
use crate::gateway::events::EventPublisher;
use crate::items::domain::{Lendable, LibraryItem};
use crate::items::domain::audiobook::Audiobook;
use crate::items::domain::book::Book;
use crate::items::domain::emagazine::EMagazine;
use crate::items::dto::ItemDto;
use crate::lending::domain::LendingService;
use crate::lending::dto::{BorrowDto, ReturnDto};

pub struct LendingServiceImpl {
    branch_id: String,
    policy: FinePolicy,
    items: BTreeMap<ItemId, LibraryItem>,
    ledger: FineLedger,
    clock: Box<dyn Clock>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration, clock: Box<dyn Clock>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            policy: FinePolicy::from(config),
            items: BTreeMap::new(),
            ledger: FineLedger::new(),
            clock,
            events_publisher,
        }
    }

    fn find(&self, item_id: ItemId) -> LibraryResult<&LibraryItem> {
        self.items.get(&item_id).ok_or_else(|| not_found(item_id))
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // lending state is already committed at this point, so a failed publish is only reported
    fn publish(&mut self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish lending event: {}", err);
        }
    }
}

fn not_found(item_id: ItemId) -> LibraryError {
    LibraryError::not_found(format!("item with id {} not found", item_id).as_str())
}

fn wrong_kind(item_id: ItemId, expected: &str) -> LibraryError {
    LibraryError::validation(format!("item {} is not {}", item_id, expected).as_str(), Some("400".to_string()))
}

impl LendingService for LendingServiceImpl {
    fn add_item(&mut self, item: LibraryItem) -> LibraryResult<ItemDto> {
        let item_id = item.id();
        if self.items.contains_key(&item_id) {
            return Err(LibraryError::duplicate_key(
                format!("item with id {} already exists", item_id).as_str()));
        }
        let added = ItemDto::from(&item);
        self.items.insert(item_id, item);
        debug!(item_id, "added {} to catalog", added.kind);
        let event = DomainEvent::added("item_added", "catalog", item_id.to_string().as_str(), &self.metadata(), &added);
        self.publish(event);
        Ok(added)
    }

    fn find_item(&self, item_id: ItemId) -> LibraryResult<ItemDto> {
        self.find(item_id).map(ItemDto::from)
    }

    fn items(&self) -> Vec<ItemDto> {
        self.items.values().map(ItemDto::from).collect()
    }

    fn borrow(&mut self, item_id: ItemId, duration_spec: &str) -> LibraryResult<BorrowDto> {
        let now = self.clock.now();
        let item = self.items.get_mut(&item_id).ok_or_else(|| not_found(item_id))?;
        let duration_days = item.borrow_at(duration_spec, now)?;
        let borrowed = BorrowDto {
            item: ItemDto::from(&*item),
            duration_days,
        };
        let event = DomainEvent::updated("item_borrowed", "lending", item_id.to_string().as_str(), &self.metadata(), &borrowed);
        self.publish(event);
        Ok(borrowed)
    }

    fn return_item(&mut self, item_id: ItemId) -> LibraryResult<ReturnDto> {
        let now = self.clock.now();
        let item = self.items.get_mut(&item_id).ok_or_else(|| not_found(item_id))?;
        let receipt = item.return_item_at(now, &self.policy, &mut self.ledger)?;
        let returned = ReturnDto {
            item: ItemDto::from(&*item),
            receipt,
            fine: self.ledger.fine_for(item_id),
        };
        let mut metadata = self.metadata();
        if let Some(fine) = receipt.fine_charged {
            metadata.insert("fine".to_string(), fine.to_string());
        }
        let event = DomainEvent::updated("item_returned", "lending", item_id.to_string().as_str(), &metadata, &returned);
        self.publish(event);
        Ok(returned)
    }

    fn is_available(&self, item_id: ItemId) -> LibraryResult<bool> {
        self.find(item_id).map(|item| item.is_available())
    }

    fn get_fine(&self, item_id: ItemId) -> LibraryResult<u64> {
        self.find(item_id).map(|item| item.get_fine(&self.ledger))
    }

    fn display_info(&self, item_id: ItemId) -> LibraryResult<String> {
        self.find(item_id).map(|item| item.display_info())
    }

    fn play(&self, item_id: ItemId) -> LibraryResult<String> {
        self.find(item_id)?.as_audiobook().map(Audiobook::play)
            .ok_or_else(|| wrong_kind(item_id, "an audiobook"))
    }

    fn archive_issue(&self, item_id: ItemId) -> LibraryResult<String> {
        self.find(item_id)?.as_emagazine().map(EMagazine::archive_issue)
            .ok_or_else(|| wrong_kind(item_id, "an e-magazine"))
    }

    fn page_count(&self, item_id: ItemId) -> LibraryResult<u32> {
        self.find(item_id)?.as_book().map(Book::page_count)
            .ok_or_else(|| wrong_kind(item_id, "a book"))
    }

    fn fines(&self) -> &FineLedger {
        &self.ledger
    }

    fn total_fines(&self) -> u64 {
        self.ledger.total()
    }
}
