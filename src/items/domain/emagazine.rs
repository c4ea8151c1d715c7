use tracing::info;
use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::ItemKind;
use crate::items::domain::Lendable;
use crate::items::domain::model::LendableItem;

// EMagazine abstracts a single digital magazine issue
#[derive(Debug, PartialEq, Clone)]
pub struct EMagazine {
    item: LendableItem,
    issue_number: i32,
}

impl EMagazine {
    pub fn new(item_id: ItemId, title: &str, author: &str, issue_number: i32) -> Self {
        Self {
            item: LendableItem::new(item_id, title, author),
            issue_number,
        }
    }

    pub fn issue_number(&self) -> i32 {
        self.issue_number
    }

    pub fn archive_issue(&self) -> String {
        let message = format!("Archiving issue #{} of {}", self.issue_number, self.item.title());
        info!(item_id = self.id(), "{}", message);
        message
    }
}

impl Identifiable for EMagazine {
    fn id(&self) -> ItemId {
        self.item.id()
    }
}

impl Lendable for EMagazine {
    fn kind(&self) -> ItemKind {
        ItemKind::EMagazine
    }

    fn lending(&self) -> &LendableItem {
        &self.item
    }

    fn lending_mut(&mut self) -> &mut LendableItem {
        &mut self.item
    }

    fn display_info(&self) -> String {
        format!("E-Magazine: {} | Issue: #{} | Available: {}",
                self.item.title(), self.issue_number, self.item.is_available())
    }
}
