//! Book collection endpoints.
//!
//! Every body carries the `status` discriminator (`success`, `fail` or
//! `error`); error bodies are produced by the `AppError` responder.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{Book, BookPayload, BookQuery, BookSummary},
    AppState,
};

/// Response for a successful creation
#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub status: String,
    pub message: String,
    pub data: BookIdData,
}

#[derive(Serialize, ToSchema)]
pub struct BookIdData {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

/// Response for the list endpoint
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: String,
    pub data: BookListData,
}

#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// Response for the detail endpoint
#[derive(Serialize, ToSchema)]
pub struct BookDetailResponse {
    pub status: String,
    pub data: BookData,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

/// Response carrying only a status and a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Missing name or readPage beyond pageCount", body = ErrorResponse),
        (status = 500, description = "Insert could not be confirmed", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book_id = state.services.books.add_book(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            status: "success".to_string(),
            message: "Buku berhasil ditambahkan".to_string(),
            data: BookIdData { book_id },
        }),
    ))
}

/// List books, optionally filtered
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Summaries of matching books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> Json<BookListResponse> {
    let books = state.services.books.list_books(&query).await;

    Json(BookListResponse {
        status: "success".to_string(),
        data: BookListData { books },
    })
}

/// Get the full record for a book
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookDetailResponse>> {
    let book = state.services.books.get_book(&book_id).await?;

    Ok(Json(BookDetailResponse {
        status: "success".to_string(),
        data: BookData { book },
    }))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book id")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name or readPage beyond pageCount", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update_book(&book_id, payload).await?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Buku berhasil diperbarui".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete_book(&book_id).await?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Buku berhasil dihapus".to_string(),
    }))
}
