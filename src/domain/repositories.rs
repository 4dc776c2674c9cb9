//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use super::pagination::{PageParams, Pagination};
use crate::models::book::Book;
use crate::models::review::Review;

/// Filter criteria for book queries. `author` and `genre` are
/// case-insensitive substring matches; `query` matches title OR author.
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    pub author: Option<String>,
    pub genre: Option<String>,
    pub query: Option<String>,
    pub page: PageParams,
}

/// Input for creating a book. All fields are required and trimmed;
/// blank values are rejected before the insert.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateBookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
}

/// One page of books with its metadata
#[derive(Debug)]
pub struct PaginatedBooks {
    pub books: Vec<Book>,
    pub pagination: Pagination,
}

/// One page of a book's reviews with its metadata
#[derive(Debug)]
pub struct PaginatedReviews {
    pub reviews: Vec<Review>,
    pub pagination: Pagination,
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find one page of books matching the filter criteria.
    /// Ordered most recently created first.
    async fn find_page(&self, filter: BookFilter) -> Result<PaginatedBooks, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Create a new book with zeroed aggregate fields
    async fn create(&self, input: CreateBookInput) -> Result<Book, DomainError>;
}

/// Repository trait for the read side of reviews. Mutations go through
/// the review service, which keeps the book aggregates in step.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find one page of a book's reviews, most recent first, with each
    /// reviewer resolved to a display name.
    async fn find_by_book(
        &self,
        book_id: i32,
        page: PageParams,
    ) -> Result<PaginatedReviews, DomainError>;
}
