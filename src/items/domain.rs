use chrono::NaiveDateTime;
use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::{ItemKind, LibraryResult};
use crate::fines::ledger::FineLedger;
use crate::fines::policy::FinePolicy;
use crate::items::domain::audiobook::Audiobook;
use crate::items::domain::book::Book;
use crate::items::domain::emagazine::EMagazine;
use crate::items::domain::model::{LendableItem, ReturnReceipt};
use crate::items::dto::ItemDetail;

pub mod audiobook;
pub mod book;
pub mod emagazine;
pub mod model;

// Lendable is the capability every catalog item exposes. Borrow and return are
// provided here on top of the shared LendableItem and are not overridden.
pub trait Lendable: Identifiable {
    fn kind(&self) -> ItemKind;
    fn lending(&self) -> &LendableItem;
    fn lending_mut(&mut self) -> &mut LendableItem;
    fn display_info(&self) -> String;

    fn is_available(&self) -> bool {
        self.lending().is_available()
    }

    fn borrow_at(&mut self, duration_spec: &str, now: NaiveDateTime) -> LibraryResult<u32> {
        self.lending_mut().borrow_at(duration_spec, now)
    }

    fn return_item_at(&mut self, now: NaiveDateTime, policy: &FinePolicy,
                      ledger: &mut FineLedger) -> LibraryResult<ReturnReceipt> {
        self.lending_mut().return_item_at(now, policy, ledger)
    }

    fn get_fine(&self, ledger: &FineLedger) -> u64 {
        self.lending().get_fine(ledger)
    }
}

// LibraryItem is the closed set of item kinds the library lends
#[derive(Debug, PartialEq, Clone)]
pub enum LibraryItem {
    Book(Book),
    Audiobook(Audiobook),
    EMagazine(EMagazine),
}

impl LibraryItem {
    // builds the variant that matches the kind-specific detail
    pub fn build(item_id: ItemId, title: &str, author: &str, detail: ItemDetail) -> LibraryResult<Self> {
        let item = match detail {
            ItemDetail::Pages { page_count } => {
                LibraryItem::from(Book::new(item_id, title, author, page_count)?)
            }
            ItemDetail::Duration { duration_minutes } => {
                LibraryItem::from(Audiobook::new(item_id, title, author, duration_minutes)?)
            }
            ItemDetail::Issue { issue_number } => {
                LibraryItem::from(EMagazine::new(item_id, title, author, issue_number))
            }
        };
        Ok(item)
    }

    fn as_lendable(&self) -> &dyn Lendable {
        match self {
            LibraryItem::Book(book) => book,
            LibraryItem::Audiobook(audiobook) => audiobook,
            LibraryItem::EMagazine(magazine) => magazine,
        }
    }

    fn as_lendable_mut(&mut self) -> &mut dyn Lendable {
        match self {
            LibraryItem::Book(book) => book,
            LibraryItem::Audiobook(audiobook) => audiobook,
            LibraryItem::EMagazine(magazine) => magazine,
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            LibraryItem::Book(book) => Some(book),
            _ => None,
        }
    }

    pub fn as_audiobook(&self) -> Option<&Audiobook> {
        match self {
            LibraryItem::Audiobook(audiobook) => Some(audiobook),
            _ => None,
        }
    }

    pub fn as_emagazine(&self) -> Option<&EMagazine> {
        match self {
            LibraryItem::EMagazine(magazine) => Some(magazine),
            _ => None,
        }
    }
}

impl Identifiable for LibraryItem {
    fn id(&self) -> ItemId {
        self.as_lendable().id()
    }
}

impl Lendable for LibraryItem {
    fn kind(&self) -> ItemKind {
        self.as_lendable().kind()
    }

    fn lending(&self) -> &LendableItem {
        self.as_lendable().lending()
    }

    fn lending_mut(&mut self) -> &mut LendableItem {
        self.as_lendable_mut().lending_mut()
    }

    fn display_info(&self) -> String {
        self.as_lendable().display_info()
    }
}

impl From<Book> for LibraryItem {
    fn from(book: Book) -> Self {
        LibraryItem::Book(book)
    }
}

impl From<Audiobook> for LibraryItem {
    fn from(audiobook: Audiobook) -> Self {
        LibraryItem::Audiobook(audiobook)
    }
}

impl From<EMagazine> for LibraryItem {
    fn from(magazine: EMagazine) -> Self {
        LibraryItem::EMagazine(magazine)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use crate::core::domain::Identifiable;
    use crate::core::library::{ItemKind, LibraryError};
    use crate::fines::ledger::FineLedger;
    use crate::items::dto::ItemDetail;
    use crate::fines::policy::FinePolicy;
    use crate::items::domain::audiobook::Audiobook;
    use crate::items::domain::book::Book;
    use crate::items::domain::emagazine::EMagazine;
    use crate::items::domain::{Lendable, LibraryItem};

    fn catalog() -> Vec<LibraryItem> {
        vec![
            Book::new(101, "Atomic Habits", "James Clear", 320).expect("book").into(),
            Audiobook::new(102, "Deep Work", "Cal Newport", 180).expect("audiobook").into(),
            EMagazine::new(103, "NatGeo", "Various", 2025).into(),
        ]
    }

    #[test]
    fn test_should_dispatch_kind_and_id() {
        let items = catalog();
        let kinds: Vec<ItemKind> = items.iter().map(|i| i.kind()).collect();
        assert_eq!(vec![ItemKind::Book, ItemKind::Audiobook, ItemKind::EMagazine], kinds);
        let ids: Vec<u32> = items.iter().map(|i| i.id()).collect();
        assert_eq!(vec![101, 102, 103], ids);
    }

    #[test]
    fn test_should_share_lending_logic_across_kinds() {
        let now = Utc::now().naive_utc();
        let mut ledger = FineLedger::new();
        for mut item in catalog() {
            item.borrow_at("5", now).expect("should borrow");
            assert!(!item.is_available());
            item.return_item_at(now + Duration::days(9), &FinePolicy::default(), &mut ledger)
                .expect("should return");
            assert!(item.is_available());
            assert_eq!(20, item.get_fine(&ledger));
        }
        assert_eq!(3, ledger.len());
    }

    #[test]
    fn test_should_display_availability() {
        let now = Utc::now().naive_utc();
        let mut items = catalog();
        assert!(items[0].display_info().ends_with("Available: true"));
        items[0].borrow_at("7", now).expect("should borrow");
        assert!(items[0].display_info().ends_with("Available: false"));
    }

    #[test]
    fn test_should_build_from_detail() {
        let item = LibraryItem::build(102, "Deep Work", "Cal Newport", ItemDetail::Duration { duration_minutes: 180 })
            .expect("should build");
        assert_eq!(ItemKind::Audiobook, item.kind());
        let invalid = LibraryItem::build(101, "Atomic Habits", "James Clear", ItemDetail::Pages { page_count: 0 });
        assert!(matches!(invalid, Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_downcast_variants() {
        let items = catalog();
        assert_eq!(Some(320), items[0].as_book().map(|b| b.page_count()));
        assert!(items[0].as_audiobook().is_none());
        assert_eq!(Some(180), items[1].as_audiobook().map(|a| a.duration_minutes()));
        assert_eq!(Some(2025), items[2].as_emagazine().map(|m| m.issue_number()));
        assert!(items[2].as_book().is_none());
    }
}
