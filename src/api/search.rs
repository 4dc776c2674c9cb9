use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{BookFilter, PageParams};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, Clone)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

#[utoipa::path(
    get,
    path = "/api/search",
    responses(
        (status = 200, description = "Books whose title or author match the query"),
        (status = 400, description = "Missing search query")
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let q = params.q.as_deref().map(str::trim).unwrap_or("");

    // An absent query is a client error, not an empty result
    if q.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Search query is required"
            })),
        )
            .into_response();
    }

    let filter = BookFilter {
        author: None,
        genre: None,
        query: Some(q.to_string()),
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
                "message": "Error searching books",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}
