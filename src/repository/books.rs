//! In-memory book collection.
//!
//! A `Vec` behind an async `RwLock`: reads snapshot the collection,
//! mutations hold the single write lock for their whole critical section
//! so lookups never observe a half-applied change.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Book;

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book, preserving insertion order
    pub async fn insert(&self, book: Book) {
        self.books.write().await.push(book);
    }

    /// Snapshot of the whole collection in insertion order
    pub async fn all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Look up a book by id
    pub async fn get(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Apply a mutation to the book with the given id under one write
    /// lock. Returns false when the id is unknown.
    pub async fn update(&self, id: &str, apply: impl FnOnce(&mut Book)) -> bool {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                apply(book);
                true
            }
            None => false,
        }
    }

    /// Remove the book with the given id. At most one record is removed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample(id: &str, name: &str) -> Book {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Book {
            id: id.to_string(),
            name: name.to_string(),
            year: Some(2024),
            author: Some("John Doe".to_string()),
            summary: None,
            publisher: Some("Dicoding Indonesia".to_string()),
            page_count: 100,
            read_page: 25,
            finished: false,
            reading: true,
            inserted_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn insert_preserves_order() {
        let repo = BooksRepository::new();
        repo.insert(sample("a", "First")).await;
        repo.insert(sample("b", "Second")).await;
        repo.insert(sample("c", "Third")).await;

        let names: Vec<String> = repo.all().await.into_iter().map(|b| b.name).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn get_finds_by_id() {
        let repo = BooksRepository::new();
        repo.insert(sample("a", "First")).await;

        assert_eq!(repo.get("a").await.unwrap().name, "First");
        assert!(repo.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn update_applies_in_place() {
        let repo = BooksRepository::new();
        repo.insert(sample("a", "First")).await;

        let updated = repo.update("a", |book| book.read_page = 99).await;
        assert!(updated);
        assert_eq!(repo.get("a").await.unwrap().read_page, 99);

        assert!(!repo.update("missing", |_| {}).await);
    }

    #[tokio::test]
    async fn remove_deletes_at_most_one() {
        let repo = BooksRepository::new();
        repo.insert(sample("a", "First")).await;
        repo.insert(sample("b", "Second")).await;

        assert!(repo.remove("a").await);
        assert_eq!(repo.len().await, 1);
        assert!(repo.get("a").await.is_none());

        assert!(!repo.remove("a").await);
        assert_eq!(repo.len().await, 1);
    }
}
