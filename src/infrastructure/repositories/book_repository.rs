//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    BookFilter, BookRepository, CreateBookInput, DomainError, PaginatedBooks, Pagination,
};
use crate::models::Book;
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_page(&self, filter: BookFilter) -> Result<PaginatedBooks, DomainError> {
        let mut query = BookEntity::find();

        // Apply filters: `contains` compiles to LIKE '%..%', which SQLite
        // matches case-insensitively for ASCII.
        if let Some(author) = &filter.author
            && !author.is_empty()
        {
            query = query.filter(Column::Author.contains(author));
        }

        if let Some(genre) = &filter.genre
            && !genre.is_empty()
        {
            query = query.filter(Column::Genre.contains(genre));
        }

        if let Some(q) = &filter.query
            && !q.is_empty()
        {
            let cond = Condition::any()
                .add(Column::Title.contains(q))
                .add(Column::Author.contains(q));
            query = query.filter(cond);
        }

        // Most recent first; same-timestamp rows stay in insertion order
        query = query
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        // Fetch one page plus the total match count
        let params = filter.page;
        let paginator = query.paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let books = paginator.fetch_page(params.page() - 1).await?;

        Ok(PaginatedBooks {
            books: books.into_iter().map(Book::from).collect(),
            pagination: Pagination::new(params, total),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book_model = BookEntity::find_by_id(id).one(&self.db).await?;
        Ok(book_model.map(Book::from))
    }

    async fn create(&self, input: CreateBookInput) -> Result<Book, DomainError> {
        let title = input.title.trim();
        let author = input.author.trim();
        let genre = input.genre.trim();
        let description = input.description.trim();

        for (field, value) in [
            ("title", title),
            ("author", author),
            ("genre", genre),
            ("description", description),
        ] {
            if value.is_empty() {
                return Err(DomainError::Validation(format!("{} is required", field)));
            }
        }

        let now = chrono::Utc::now();

        let new_book = ActiveModel {
            title: Set(title.to_string()),
            author: Set(author.to_string()),
            genre: Set(genre.to_string()),
            description: Set(description.to_string()),
            average_rating: Set(0.0),
            total_reviews: Set(0),
            created_at: Set(now.to_rfc3339()),
            updated_at: Set(now.to_rfc3339()),
            ..Default::default()
        };

        let result = new_book.insert(&self.db).await?;
        Ok(Book::from(result))
    }
}
