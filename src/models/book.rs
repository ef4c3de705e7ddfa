//! Book model and related request/response types.
//!
//! Wire names follow the JSON API contract (camelCase). `finished` is a
//! derived field: it is never part of a request payload and is recomputed
//! from `pageCount`/`readPage` on every write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A book record with reading-progress metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque 16-character id, assigned at creation
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Total pages
    pub page_count: u32,
    /// Pages read, kept `<= page_count` at write time
    pub read_page: u32,
    /// Derived: true iff `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    /// Set once at creation
    pub inserted_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a book.
///
/// Only `name` is required; numeric fields default to 0 and `reading`
/// to false when absent, matching the lenient payload contract.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

/// Projection returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Query parameters for the list endpoint.
///
/// `reading` and `finished` are the raw `"1"`/`"0"` flags from the query
/// string; any other value leaves the filter inactive.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Case-insensitive substring match on the book name
    pub name: Option<String>,
    /// `"1"` for books being read, `"0"` for the rest
    pub reading: Option<String>,
    /// `"1"` for finished books, `"0"` for the rest
    pub finished: Option<String>,
}
