use crate::core::domain::{Identifiable, ItemId};
use crate::core::library::{ItemKind, LibraryError, LibraryResult};
use crate::items::domain::Lendable;
use crate::items::domain::model::LendableItem;

// Book abstracts a physical, printed book
#[derive(Debug, PartialEq, Clone)]
pub struct Book {
    item: LendableItem,
    page_count: u32,
}

impl Book {
    pub fn new(item_id: ItemId, title: &str, author: &str, page_count: u32) -> LibraryResult<Self> {
        if page_count == 0 {
            return Err(LibraryError::validation(
                format!("book {} must have at least one page", item_id).as_str(), Some("400".to_string())));
        }
        Ok(Self {
            item: LendableItem::new(item_id, title, author),
            page_count,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }
}

impl Identifiable for Book {
    fn id(&self) -> ItemId {
        self.item.id()
    }
}

impl Lendable for Book {
    fn kind(&self) -> ItemKind {
        ItemKind::Book
    }

    fn lending(&self) -> &LendableItem {
        &self.item
    }

    fn lending_mut(&mut self) -> &mut LendableItem {
        &mut self.item
    }

    fn display_info(&self) -> String {
        format!("Book: {} by {} | Pages: {} | Available: {}",
                self.item.title(), self.item.author(), self.page_count, self.item.is_available())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::items::domain::Lendable;
    use crate::items::domain::book::Book;

    #[test]
    fn test_should_build_book() {
        let book = Book::new(101, "Atomic Habits", "James Clear", 320).expect("should build book");
        assert_eq!(320, book.page_count());
        assert_eq!("Book: Atomic Habits by James Clear | Pages: 320 | Available: true", book.display_info());
    }

    #[test]
    fn test_should_reject_book_without_pages() {
        assert!(matches!(Book::new(1, "t", "a", 0), Err(LibraryError::Validation { .. })));
    }
}
