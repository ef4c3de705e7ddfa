//! Book collection service.
//!
//! Owns every write-time rule: payload validation, the derived `finished`
//! flag, timestamp stamping and the list-filter precedence. Handlers stay
//! thin; the store below only moves records around.

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    id::IdGenerator,
    models::{Book, BookPayload, BookQuery, BookSummary},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookshelfService {
    repository: Repository,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl BookshelfService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            clock,
            ids,
        }
    }

    /// Add a book and return its generated id
    pub async fn add_book(&self, payload: BookPayload) -> AppResult<String> {
        let name = validated_name(&payload, "Gagal menambahkan buku. Mohon isi nama buku")?;
        if payload.read_page > payload.page_count {
            return Err(AppError::Validation(
                "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
                    .to_string(),
            ));
        }

        let id = self.ids.generate();
        let now = self.clock.now();
        let book = Book {
            id: id.clone(),
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.page_count == payload.read_page,
            reading: payload.reading,
            inserted_at: now,
            updated_at: now,
        };
        self.repository.books.insert(book).await;

        // The 201 response promises the id is readable from the collection.
        if self.repository.books.get(&id).await.is_none() {
            return Err(AppError::Internal("Buku gagal ditambahkan".to_string()));
        }

        tracing::debug!("Added book id={}", id);
        Ok(id)
    }

    /// List summary projections, applying at most one filter.
    ///
    /// When several query parameters are present only the first active one
    /// counts: name, then reading, then finished. A reading/finished value
    /// other than "1"/"0" leaves that filter inactive.
    pub async fn list_books(&self, query: &BookQuery) -> Vec<BookSummary> {
        let books = self.repository.books.all().await;

        if let Some(needle) = query.name.as_deref() {
            let needle = needle.to_lowercase();
            return books
                .iter()
                .filter(|b| b.name.to_lowercase().contains(&needle))
                .map(BookSummary::from)
                .collect();
        }

        if let Some(reading) = parse_flag(query.reading.as_deref()) {
            return books
                .iter()
                .filter(|b| b.reading == reading)
                .map(BookSummary::from)
                .collect();
        }

        if let Some(finished) = parse_flag(query.finished.as_deref()) {
            return books
                .iter()
                .filter(|b| b.finished == finished)
                .map(BookSummary::from)
                .collect();
        }

        books.iter().map(BookSummary::from).collect()
    }

    /// Get the full record for a book id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound("Buku tidak ditemukan".to_string()))
    }

    /// Replace every client-settable field of an existing book.
    ///
    /// `id` and `insertedAt` are preserved, `finished` is recomputed and
    /// `updatedAt` refreshed. Payload validation runs before the existence
    /// check, so a bad payload wins over an unknown id.
    pub async fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        let name = validated_name(&payload, "Gagal memperbarui buku. Mohon isi nama buku")?;
        if payload.read_page > payload.page_count {
            return Err(AppError::Validation(
                "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
                    .to_string(),
            ));
        }

        let now = self.clock.now();
        let updated = self
            .repository
            .books
            .update(id, |book| {
                book.name = name;
                book.year = payload.year;
                book.author = payload.author;
                book.summary = payload.summary;
                book.publisher = payload.publisher;
                book.page_count = payload.page_count;
                book.read_page = payload.read_page;
                book.finished = payload.page_count == payload.read_page;
                book.reading = payload.reading;
                book.updated_at = now;
            })
            .await;

        if !updated {
            return Err(AppError::NotFound(
                "Gagal memperbarui buku. Id tidak ditemukan".to_string(),
            ));
        }

        tracing::debug!("Updated book id={}", id);
        Ok(())
    }

    /// Delete a book by id
    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.remove(id).await {
            return Err(AppError::NotFound(
                "Buku gagal dihapus. Id tidak ditemukan".to_string(),
            ));
        }

        tracing::debug!("Deleted book id={}", id);
        Ok(())
    }
}

fn validated_name(payload: &BookPayload, message: &str) -> AppResult<String> {
    match payload.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}
