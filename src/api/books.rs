use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::Claims;
use crate::domain::{BookFilter, CreateBookInput, DomainError, PageParams};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub author: Option<String>,
    pub genre: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[utoipa::path(
    post,
    path = "/api/books",
    responses(
        (status = 201, description = "Book created"),
        (status = 400, description = "Missing or blank field"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    _claims: Claims,
    Json(input): Json<CreateBookInput>,
) -> impl IntoResponse {
    match state.book_repo.create(input).await {
        Ok(book) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "Book created successfully",
                "data": book
            })),
        )
            .into_response(),
        Err(DomainError::Validation(msg)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": msg
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "message": "Error creating book",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "One page of books with pagination metadata")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksQuery>,
) -> impl IntoResponse {
    let filter = BookFilter {
        author: params.author,
        genre: params.genre,
        query: None,
        page: params.page,
    };

    match state.book_repo.find_page(filter).await {
        Ok(page) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "books": page.books,
                    "pagination": page.pagination
                }
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "message": "Error fetching books",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "Book plus one page of its reviews"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(page): Query<PageParams>,
) -> impl IntoResponse {
    // Resolve the book before issuing any review query
    let book = match state.book_repo.find_by_id(id).await {
        Ok(Some(book)) => book,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "message": "Book not found"
                })),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Error fetching book",
                    "error": e.to_string()
                })),
            )
                .into_response();
        }
    };

    match state.review_repo.find_by_book(id, page).await {
        Ok(reviews) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "book": book,
                    "reviews": {
                        "data": reviews.reviews,
                        "pagination": reviews.pagination
                    }
                }
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "message": "Error fetching book",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}
