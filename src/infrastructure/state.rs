//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookRepository, ReviewRepository};
use crate::infrastructure::{SeaOrmBookRepository, SeaOrmReviewRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
    /// Review repository (read side; mutations go through the review service)
    pub review_repo: Arc<dyn ReviewRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let review_repo = Arc::new(SeaOrmReviewRepository::new(db.clone()));

        Self {
            db,
            book_repo,
            review_repo,
        }
    }

    /// Get the database connection for service-level operations
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

// Allow handlers that only need the connection to extract it directly
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
