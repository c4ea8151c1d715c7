use tracing::info;
use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::{ItemKind, LibraryError, LibraryResult};
use crate::items::domain::Lendable;
use crate::items::domain::model::LendableItem;

// Audiobook abstracts a recorded reading that can be played back
#[derive(Debug, PartialEq, Clone)]
pub struct Audiobook {
    item: LendableItem,
    duration_minutes: u32,
}

impl Audiobook {
    pub fn new(item_id: ItemId, title: &str, author: &str, duration_minutes: u32) -> LibraryResult<Self> {
        if duration_minutes == 0 {
            return Err(LibraryError::validation(
                format!("audiobook {} must run for at least one minute", item_id).as_str(), Some("400".to_string())));
        }
        Ok(Self {
            item: LendableItem::new(item_id, title, author),
            duration_minutes,
        })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn play(&self) -> String {
        let message = format!("Playing audiobook: {} [{} mins]", self.item.title(), self.duration_minutes);
        info!(item_id = self.id(), "{}", message);
        message
    }
}

impl Identifiable for Audiobook {
    fn id(&self) -> ItemId {
        self.item.id()
    }
}

impl Lendable for Audiobook {
    fn kind(&self) -> ItemKind {
        ItemKind::Audiobook
    }

    fn lending(&self) -> &LendableItem {
        &self.item
    }

    fn lending_mut(&mut self) -> &mut LendableItem {
        &mut self.item
    }

    fn display_info(&self) -> String {
        format!("Audiobook: {} by {} | Duration: {} mins | Available: {}",
                self.item.title(), self.item.author(), self.duration_minutes, self.item.is_available())
    }
}
