//! Services Layer
//!
//! Business logic that spans more than one record: review lifecycle and the
//! rating aggregation it triggers. Handlers stay thin and call in here.

pub mod rating;
pub mod review_service;

pub use rating::recompute_book_rating;
pub use review_service::ReviewInput;
