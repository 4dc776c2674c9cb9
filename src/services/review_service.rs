//! Review lifecycle - create, update, delete
//!
//! Each mutation runs in a single transaction together with the rating
//! recompute: the review set and the owning book's aggregates commit
//! atomically, so concurrent writers serialize at the database instead of
//! racing a read-compute-write cycle.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait,
};

use crate::domain::DomainError;
use crate::models::Review;
use crate::models::book::Entity as BookEntity;
use crate::models::review::{ActiveModel as ReviewActiveModel, Entity as ReviewEntity};
use crate::models::user::Entity as UserEntity;
use crate::services::rating;

/// Rating + comment payload shared by create and update
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ReviewInput {
    pub rating: i32,
    pub comment: String,
}

fn validate(input: &ReviewInput) -> Result<String, DomainError> {
    if !(1..=5).contains(&input.rating) {
        return Err(DomainError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }

    let comment = input.comment.trim();
    if comment.is_empty() {
        return Err(DomainError::Validation("comment is required".to_string()));
    }

    Ok(comment.to_string())
}

/// Create a review for a book on behalf of a user.
///
/// The book must exist (checked before anything is written) and the user
/// must not have reviewed it yet; the UNIQUE (book_id, user_id) index
/// backs the second rule and surfaces as a Conflict.
pub async fn create_review(
    db: &DatabaseConnection,
    book_id: i32,
    user_id: i32,
    input: ReviewInput,
) -> Result<Review, DomainError> {
    let comment = validate(&input)?;
    let now = chrono::Utc::now().to_rfc3339();

    let txn = db.begin().await?;

    BookEntity::find_by_id(book_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound)?;

    let review = ReviewActiveModel {
        book_id: Set(book_id),
        user_id: Set(user_id),
        rating: Set(input.rating),
        comment: Set(comment),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| match DomainError::from(e) {
        DomainError::Conflict(_) => {
            DomainError::Conflict("user has already reviewed this book".to_string())
        }
        other => other,
    })?;

    rating::recompute_book_rating(&txn, book_id).await?;
    txn.commit().await?;

    let user = UserEntity::find_by_id(user_id).one(db).await?;
    Ok(Review::from_model(review, user))
}

/// Update a review's rating and comment. Only the review's author may
/// touch it.
pub async fn update_review(
    db: &DatabaseConnection,
    review_id: i32,
    user_id: i32,
    input: ReviewInput,
) -> Result<Review, DomainError> {
    let comment = validate(&input)?;

    let txn = db.begin().await?;

    let existing = ReviewEntity::find_by_id(review_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound)?;

    if existing.user_id != user_id {
        return Err(DomainError::Forbidden);
    }

    let book_id = existing.book_id;

    let mut active: ReviewActiveModel = existing.into();
    active.rating = Set(input.rating);
    active.comment = Set(comment);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());
    let review = active.update(&txn).await?;

    rating::recompute_book_rating(&txn, book_id).await?;
    txn.commit().await?;

    let user = UserEntity::find_by_id(user_id).one(db).await?;
    Ok(Review::from_model(review, user))
}

/// Delete a review. Only the review's author may delete it.
pub async fn delete_review(
    db: &DatabaseConnection,
    review_id: i32,
    user_id: i32,
) -> Result<(), DomainError> {
    let txn = db.begin().await?;

    let existing = ReviewEntity::find_by_id(review_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound)?;

    if existing.user_id != user_id {
        return Err(DomainError::Forbidden);
    }

    let book_id = existing.book_id;
    existing.delete(&txn).await?;

    rating::recompute_book_rating(&txn, book_id).await?;
    txn.commit().await?;

    Ok(())
}
