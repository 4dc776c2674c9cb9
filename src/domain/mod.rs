//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, the pagination contract and domain error types.

pub mod errors;
pub mod pagination;
pub mod repositories;

pub use errors::DomainError;
pub use pagination::{PageParams, Pagination};
pub use repositories::*;
