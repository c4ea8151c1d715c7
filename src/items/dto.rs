use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::{ItemKind, ItemStatus};
use crate::items::domain::{Lendable, LibraryItem};
use crate::utils::date::option_serializer;

// ItemDetail carries the attribute that is specific to each kind of item
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemDetail {
    Pages { page_count: u32 },
    Duration { duration_minutes: u32 },
    Issue { issue_number: i32 },
}

// ItemDto is a read-only snapshot of a catalog item.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub item_id: ItemId,
    pub kind: ItemKind,
    pub title: String,
    pub author: String,
    pub status: ItemStatus,
    #[serde(with = "option_serializer", default)]
    pub borrowed_at: Option<NaiveDateTime>,
    pub detail: ItemDetail,
    pub display: String,
}

impl ItemDto {
    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }
}

impl From<&LibraryItem> for ItemDto {
    fn from(other: &LibraryItem) -> Self {
        let detail = match other {
            LibraryItem::Book(book) => ItemDetail::Pages { page_count: book.page_count() },
            LibraryItem::Audiobook(audiobook) => ItemDetail::Duration { duration_minutes: audiobook.duration_minutes() },
            LibraryItem::EMagazine(magazine) => ItemDetail::Issue { issue_number: magazine.issue_number() },
        };
        let lending = other.lending();
        Self {
            item_id: other.id(),
            kind: other.kind(),
            title: lending.title().to_string(),
            author: lending.author().to_string(),
            status: lending.status(),
            borrowed_at: lending.borrowed_at(),
            detail,
            display: other.display_info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::core::library::{ItemKind, ItemStatus};
    use crate::items::domain::{Lendable, LibraryItem};
    use crate::items::domain::book::Book;
    use crate::items::domain::emagazine::EMagazine;
    use crate::items::dto::{ItemDetail, ItemDto};

    #[test]
    fn test_should_build_dto_from_item() {
        let item = LibraryItem::from(Book::new(101, "Atomic Habits", "James Clear", 320).expect("book"));
        let dto = ItemDto::from(&item);
        assert_eq!(101, dto.item_id);
        assert_eq!(ItemKind::Book, dto.kind);
        assert_eq!(ItemStatus::Available, dto.status);
        assert_eq!(ItemDetail::Pages { page_count: 320 }, dto.detail);
        assert_eq!(item.display_info(), dto.display);
        assert!(dto.is_available());
    }

    #[test]
    fn test_should_serialize_borrowed_dto() {
        let mut item = LibraryItem::from(EMagazine::new(103, "NatGeo", "Various", 2025));
        item.borrow_at("10", Utc::now().naive_utc()).expect("should borrow");
        let dto = ItemDto::from(&item);
        let json = serde_json::to_string(&dto).expect("should serialize");
        let parsed: ItemDto = serde_json::from_str(json.as_str()).expect("should parse");
        assert_eq!(ItemStatus::Borrowed, parsed.status);
        assert!(parsed.borrowed_at.is_some());
        assert_eq!(dto.detail, parsed.detail);
    }

    #[test]
    fn test_should_rebuild_item_from_dto() {
        let item = LibraryItem::from(EMagazine::new(103, "NatGeo", "Various", 2025));
        let dto = ItemDto::from(&item);
        let rebuilt = LibraryItem::build(dto.item_id, dto.title.as_str(), dto.author.as_str(), dto.detail)
            .expect("should rebuild");
        assert_eq!(item, rebuilt);
    }
}
