// Server module - assembles the HTTP application
// Used by main.rs and by the integration tests

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the application router: API nested under /api with request tracing.
/// CORS is layered on by the caller since allowed origins come from config.
pub fn build_router(state: AppState) -> Router {
    let api_router = api::api_router(state);

    Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
}
