//! Rating aggregation
//!
//! A book's `average_rating` and `total_reviews` are derived from its current
//! review set. The review service calls [`recompute_book_rating`] explicitly
//! after every committed review write or delete, inside the same transaction,
//! so the derived fields never drift from the reviews.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::domain::DomainError;
use crate::models::book::{ActiveModel as BookActiveModel, Entity as BookEntity};
use crate::models::review::{Column as ReviewColumn, Entity as ReviewEntity};

/// Mean and count of a rating set. An empty set aggregates to (0.0, 0),
/// never NaN.
pub fn aggregate_ratings(ratings: &[i32]) -> (f64, i32) {
    if ratings.is_empty() {
        return (0.0, 0);
    }

    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum as f64 / ratings.len() as f64, ratings.len() as i32)
}

/// Recompute one book's aggregate fields from its current review set and
/// persist them. Generic over the connection so callers can run it inside
/// the transaction that carried the triggering mutation.
pub async fn recompute_book_rating<C>(conn: &C, book_id: i32) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    let book = BookEntity::find_by_id(book_id)
        .one(conn)
        .await?
        .ok_or(DomainError::NotFound)?;

    let ratings: Vec<i32> = ReviewEntity::find()
        .filter(ReviewColumn::BookId.eq(book_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|r| r.rating)
        .collect();

    let (average, count) = aggregate_ratings(&ratings);

    let mut active: BookActiveModel = book.into();
    active.average_rating = Set(average);
    active.total_reviews = Set(count);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());
    active.update(conn).await?;

    Ok(())
}
