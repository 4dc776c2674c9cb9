use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::auth::Claims;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::review_service::{self, ReviewInput};

pub async fn create_review(
    State(state): State<AppState>,
    claims: Claims,
    Path(book_id): Path<i32>,
    Json(input): Json<ReviewInput>,
) -> impl IntoResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_subject();
    };

    match review_service::create_review(state.db(), book_id, user_id, input).await {
        Ok(review) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "Review created successfully",
                "data": review
            })),
        )
            .into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "Book not found"
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
        Err(DomainError::Conflict(err)) => (
            StatusCode::CONFLICT,
            Json(json!({
                "success": false,
                "message": "You have already reviewed this book",
                "error": err
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "message": "Error creating review",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

pub async fn update_review(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<i32>,
    Json(input): Json<ReviewInput>,
) -> impl IntoResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_subject();
    };

    match review_service::update_review(state.db(), id, user_id, input).await {
        Ok(review) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Review updated successfully",
                "data": review
            })),
        )
            .into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "Review not found"
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
        Err(DomainError::Forbidden) => forbidden(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "message": "Error updating review",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

pub async fn delete_review(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let Some(user_id) = claims.user_id() else {
        return invalid_subject();
    };

    match review_service::delete_review(state.db(), id, user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Review deleted successfully"
            })),
        )
            .into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "message": "Review not found"
            })),
        )
            .into_response(),
        Err(DomainError::Forbidden) => forbidden(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "message": "Error deleting review",
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

fn invalid_subject() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "success": false,
            "message": "Invalid token subject"
        })),
    )
        .into_response()
}

fn forbidden() -> axum::response::Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "success": false,
            "message": "You can only modify your own reviews"
        })),
    )
        .into_response()
}
