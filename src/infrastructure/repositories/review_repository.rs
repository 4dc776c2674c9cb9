//! SeaORM implementation of ReviewRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::domain::{DomainError, PageParams, PaginatedReviews, Pagination, ReviewRepository};
use crate::models::Review;
use crate::models::review::{Column, Entity as ReviewEntity};
use crate::models::user::Entity as UserEntity;

/// SeaORM-based implementation of ReviewRepository
pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn find_by_book(
        &self,
        book_id: i32,
        page: PageParams,
    ) -> Result<PaginatedReviews, DomainError> {
        let paginator = ReviewEntity::find()
            .filter(Column::BookId.eq(book_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .find_also_related(UserEntity)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.page() - 1).await?;

        let reviews = rows
            .into_iter()
            .map(|(review, user)| Review::from_model(review, user))
            .collect();

        Ok(PaginatedReviews {
            reviews,
            pagination: Pagination::new(page, total),
        })
    }
}
